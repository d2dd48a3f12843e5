use serde::{Deserialize, Serialize};

/// Lifecycle phase of a create/edit submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Saving,
    Complete,
    Failure,
}

/// Transitions issued by a screen's submit handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionAction {
    Start,
    Complete,
    Failure(String),
}

/// Per-screen submission state, created at mount and discarded on teardown
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubmissionState {
    pub phase: Phase,
    pub error: Option<String>,
}

impl SubmissionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_saving(&self) -> bool {
        self.phase == Phase::Saving
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Apply a transition in place
    pub fn apply(&mut self, action: &SubmissionAction) {
        *self = reduce(self, action);
    }
}

/// Pure transition function.
///
/// `Complete` is terminal: once reached, every further action leaves the
/// state untouched.
pub fn reduce(state: &SubmissionState, action: &SubmissionAction) -> SubmissionState {
    if state.phase == Phase::Complete {
        return state.clone();
    }

    match action {
        SubmissionAction::Start => SubmissionState {
            phase: Phase::Saving,
            error: None,
        },
        SubmissionAction::Complete => SubmissionState {
            phase: Phase::Complete,
            error: None,
        },
        SubmissionAction::Failure(message) => SubmissionState {
            phase: Phase::Failure,
            error: Some(message.clone()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_clears_previous_error() {
        let failed = SubmissionState {
            phase: Phase::Failure,
            error: Some("Team name is taken".to_string()),
        };

        let next = reduce(&failed, &SubmissionAction::Start);
        assert_eq!(next.phase, Phase::Saving);
        assert_eq!(next.error(), None);
    }

    #[test]
    fn test_failure_keeps_message() {
        let mut state = SubmissionState::new();
        state.apply(&SubmissionAction::Start);
        state.apply(&SubmissionAction::Failure("boom".to_string()));

        assert_eq!(state.phase, Phase::Failure);
        assert_eq!(state.error(), Some("boom"));
        assert!(!state.is_saving());
    }

    #[test]
    fn test_complete_is_terminal() {
        let mut state = SubmissionState::new();
        state.apply(&SubmissionAction::Start);
        state.apply(&SubmissionAction::Complete);
        state.apply(&SubmissionAction::Start);
        state.apply(&SubmissionAction::Failure("late".to_string()));

        assert!(state.is_complete());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_reduce_does_not_mutate_input() {
        let idle = SubmissionState::new();
        let _ = reduce(&idle, &SubmissionAction::Start);
        assert_eq!(idle.phase, Phase::Idle);
    }
}
