//! Error taxonomy of the coordination core.
//!
//! User-facing failures collapse into a single display string held by the
//! submission state. [`StaleDispatch`] is internal: it is logged and dropped,
//! never shown.

use crate::nav::ScreenId;
use crate::submission::{RemoteError, ValidationError};
use std::fmt;

/// Why a submission ended in `Failure`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// Rejected locally; no remote call was made
    Validation(ValidationError),

    /// The remote mutation returned an error
    Remote(RemoteError),
}

impl SubmissionError {
    /// Text shown inline under the form
    pub fn display_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::Validation(err) => write!(f, "{}", err),
            SubmissionError::Remote(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SubmissionError {}

impl From<ValidationError> for SubmissionError {
    fn from(err: ValidationError) -> Self {
        SubmissionError::Validation(err)
    }
}

impl From<RemoteError> for SubmissionError {
    fn from(err: RemoteError) -> Self {
        SubmissionError::Remote(err)
    }
}

/// A message arrived for a screen that has already been torn down
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleDispatch {
    pub screen: ScreenId,
}

impl fmt::Display for StaleDispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dispatch to unmounted screen {}", self.screen)
    }
}

impl std::error::Error for StaleDispatch {}
