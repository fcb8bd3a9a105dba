// ============================================================================
// domain/error.rs - ENTITY VALIDATION ERRORS
// ============================================================================

use std::fmt;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// The domain has exactly one failure mode: an entity rejected a value.
/// All errors are:
/// - Cloneable (callers may stash and re-raise them)
/// - Comparable (tests assert on the exact rule that fired)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field failed one of the entity's invariants.
    ///
    /// `Display` renders the human-readable message, e.g.
    /// `"Name should be at least 3 characters long"`.
    #[error("{field} {violation}")]
    EntityValidation {
        field: &'static str,
        violation: Violation,
    },
}

impl DomainError {
    pub const fn validation(field: &'static str, violation: Violation) -> Self {
        Self::EntityValidation { field, violation }
    }

    /// Label of the field that was rejected.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EntityValidation { field, .. } => *field,
        }
    }

    /// The rule the field broke.
    pub const fn violation(&self) -> Violation {
        match self {
            Self::EntityValidation { violation, .. } => *violation,
        }
    }

    /// Error category for display styling.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::EntityValidation { .. } => ErrorCategory::Validation,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        let Self::EntityValidation { field, violation } = self;
        match violation {
            Violation::Null | Violation::Blank => vec![
                format!("Provide a value for {field}"),
                "Whitespace-only values are treated as empty".into(),
            ],
            Violation::TooShort { min } => {
                vec![format!("{field} needs at least {min} characters")]
            }
            Violation::TooLong { max } => {
                vec![format!("Shorten {field} to {max} characters or fewer")]
            }
            Violation::Nil => vec![
                format!("{field} must be a generated identifier"),
                "The stored record is likely corrupted".into(),
            ],
        }
    }
}

/// The rule a rejected value broke.
///
/// Lengths are counted in characters (Unicode scalar values), not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    /// Value was absent.
    Null,
    /// Value was absent, empty, or whitespace only.
    Blank,
    /// Value had fewer than `min` characters.
    TooShort { min: usize },
    /// Value had more than `max` characters.
    TooLong { max: usize },
    /// Identifier was the nil UUID.
    Nil,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("should not be null"),
            Self::Blank => f.write_str("should not be null or empty"),
            Self::TooShort { min } => write!(f, "should be at least {min} characters long"),
            Self::TooLong { max } => {
                write!(f, "should be less or equal to {max} characters long")
            }
            Self::Nil => f.write_str("should not be nil"),
        }
    }
}
