use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of conversation a create/edit screen targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationKind {
    Open,
    Private,
    Direct,
    Group,
}

impl ConversationKind {
    /// Single-letter type code used by the server API
    pub fn code(&self) -> char {
        match self {
            ConversationKind::Open => 'O',
            ConversationKind::Private => 'P',
            ConversationKind::Direct => 'D',
            ConversationKind::Group => 'G',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'O' => Some(ConversationKind::Open),
            'P' => Some(ConversationKind::Private),
            'D' => Some(ConversationKind::Direct),
            'G' => Some(ConversationKind::Group),
            _ => None,
        }
    }

    /// Direct and group conversations derive their name from members
    pub fn is_direct(&self) -> bool {
        matches!(self, ConversationKind::Direct | ConversationKind::Group)
    }
}

/// Read model of the entity being edited
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditTarget {
    pub display_name: String,
    pub kind: ConversationKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Required,
    TooShort { min: usize },
    TooLong { max: usize },
    Unchanged,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required => write!(f, "Name is required"),
            ValidationError::TooShort { min } => write!(f, "Name must be {} or more characters", min),
            ValidationError::TooLong { max } => write!(f, "Name must be {} or fewer characters", max),
            ValidationError::Unchanged => write!(f, "Name is unchanged"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Pure, synchronous display-name check
pub trait DisplayNameValidator: Send + Sync {
    fn validate(&self, name: &str) -> Result<(), ValidationError>;
}

/// Length-bounded validator matching the server's display-name limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthValidator {
    pub min: usize,
    pub max: usize,
}

impl LengthValidator {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

impl DisplayNameValidator for LengthValidator {
    fn validate(&self, name: &str) -> Result<(), ValidationError> {
        let length = name.chars().count();
        if name.trim().is_empty() {
            Err(ValidationError::Required)
        } else if length > self.max {
            Err(ValidationError::TooLong { max: self.max })
        } else if length < self.min {
            Err(ValidationError::TooShort { min: self.min })
        } else {
            Ok(())
        }
    }
}

/// Validate the name a create/edit screen is about to submit.
///
/// Direct and group targets have implicit names and always pass. When
/// editing, the name must also differ from the original.
pub fn is_valid_display_name(
    target: Option<&EditTarget>,
    name: &str,
    validator: &dyn DisplayNameValidator,
) -> Result<(), ValidationError> {
    if target.is_some_and(|t| t.kind.is_direct()) {
        return Ok(());
    }

    validator.validate(name)?;

    if target.is_some_and(|t| t.display_name == name) {
        return Err(ValidationError::Unchanged);
    }
    Ok(())
}
