//! Unified error handling for Catalog Core.
//!
//! Wraps domain errors together with the ambient failures of the crate
//! (configuration, logging setup) behind one root type.

use thiserror::Error;

use crate::domain::DomainError;

/// Root error type for Catalog Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    /// An entity rejected a value.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Configuration could not be loaded or logging could not be set up.
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl CatalogError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check catalog.toml and CATALOG_* environment variables".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
        }
    }
}

/// Error categories for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
}

/// Convenient result type alias.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Violation;

    #[test]
    fn domain_errors_convert_with_question_mark() {
        fn build() -> CatalogResult<()> {
            Err::<(), _>(DomainError::validation("Name", Violation::Blank))?;
            Ok(())
        }

        let err = build().unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(
            err.to_string(),
            "Domain error: Name should not be null or empty"
        );
    }

    #[test]
    fn configuration_errors_carry_message() {
        let err = CatalogError::configuration("missing file");
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.suggestions()[0].contains("missing file"));
    }
}
