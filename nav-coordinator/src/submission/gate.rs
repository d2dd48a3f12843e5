use super::Phase;

/// Decides whether the primary navigation action is enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveGate {
    min_length: usize,
}

impl SaveGate {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// `input` is long enough, differs from `baseline`, and the submission is
    /// neither in flight nor already complete
    pub fn evaluate(&self, input: &str, baseline: Option<&str>, phase: Phase) -> bool {
        input.chars().count() >= self.min_length
            && baseline != Some(input)
            && !matches!(phase, Phase::Saving | Phase::Complete)
    }
}
