use crate::domain::error::{DomainError, Violation};

/// Centralized domain validation.
///
/// Stateless predicate checks shared by every entity. Each check takes the
/// value and the label of the field it belongs to, and fails with
/// [`DomainError::EntityValidation`] naming that label.
pub struct DomainValidation;

impl DomainValidation {
    /// Fails when `target` is absent.
    pub fn not_null<T: ?Sized>(target: Option<&T>, field: &'static str) -> Result<(), DomainError> {
        match target {
            Some(_) => Ok(()),
            None => Err(DomainError::validation(field, Violation::Null)),
        }
    }

    /// Fails when `target` is absent, empty, or whitespace only.
    pub fn not_null_or_empty(target: Option<&str>, field: &'static str) -> Result<(), DomainError> {
        match target {
            Some(value) if !value.trim().is_empty() => Ok(()),
            _ => Err(DomainError::validation(field, Violation::Blank)),
        }
    }

    /// Fails when `target` has fewer than `min` characters.
    pub fn min_length(target: &str, min: usize, field: &'static str) -> Result<(), DomainError> {
        if char_len(target) < min {
            return Err(DomainError::validation(field, Violation::TooShort { min }));
        }
        Ok(())
    }

    /// Fails when `target` has more than `max` characters.
    pub fn max_length(target: &str, max: usize, field: &'static str) -> Result<(), DomainError> {
        if char_len(target) > max {
            return Err(DomainError::validation(field, Violation::TooLong { max }));
        }
        Ok(())
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}
