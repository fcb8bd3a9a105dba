//! The `Category` aggregate root.
//!
//! A `Category` groups catalog items under a human-readable name. Every
//! constructor and every mutation runs the same validation sequence, so a
//! `Category` value that exists is always consistent:
//!
//! 1. name is not null or blank
//! 2. name has at least [`Category::NAME_MIN_LENGTH`] characters
//! 3. name has at most [`Category::NAME_MAX_LENGTH`] characters
//! 4. description is not null or blank
//! 5. description has at most [`Category::DESCRIPTION_MAX_LENGTH`] characters
//!
//! The sequence short-circuits, so the error always names the first rule
//! that failed.
//!
//! # Validate, then assign
//!
//! Candidate values are checked before they are written. A rejected `update`
//! leaves the entity exactly as it was before the call.
//!
//! # Thread safety
//!
//! Mutation takes `&mut self`. Share a `Category` across threads only behind
//! external synchronization (`Mutex`, `RwLock`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    entities::common::{AggregateRoot, EntityId},
    error::DomainError,
    validation::DomainValidation,
};

const NAME: &str = "Name";
const DESCRIPTION: &str = "Description";

// ── Aggregate root ────────────────────────────────────────────────────────────

/// A validated catalog category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "CategoryRecord")]
pub struct Category {
    id: EntityId,
    name: String,
    description: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    pub const NAME_MIN_LENGTH: usize = 3;
    pub const NAME_MAX_LENGTH: usize = 255;
    pub const DESCRIPTION_MAX_LENGTH: usize = 10_000;

    /// Create an active category.
    ///
    /// # Errors
    /// `DomainError::EntityValidation` for the first rule `name` or
    /// `description` breaks.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::with_status(name, description, true)
    }

    /// Create a category with an explicit active flag.
    pub fn with_status(
        name: impl Into<String>,
        description: impl Into<String>,
        is_active: bool,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let description = description.into();
        Self::check(&name, &description)?;

        Ok(Self {
            id: EntityId::new(),
            name,
            description,
            is_active,
            created_at: Utc::now(),
        })
    }

    pub const fn id(&self) -> EntityId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub const fn is_active(&self) -> bool {
        self.is_active
    }
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Mark the category active.
    ///
    /// Re-validates unconditionally; the flag itself carries no rule.
    pub fn activate(&mut self) -> Result<(), DomainError> {
        self.validate()?;
        self.is_active = true;
        Ok(())
    }

    /// Mark the category inactive.
    pub fn deactivate(&mut self) -> Result<(), DomainError> {
        self.validate()?;
        self.is_active = false;
        Ok(())
    }

    /// Replace the name and, when `description` is `Some`, the description.
    ///
    /// `None` keeps the current description.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<(), DomainError> {
        let name = name.into();
        Self::check(&name, description.as_deref().unwrap_or(&self.description))?;

        self.name = name;
        if let Some(description) = description {
            self.description = description;
        }
        Ok(())
    }

    /// Re-run the validation sequence against the current state.
    pub fn validate(&self) -> Result<(), DomainError> {
        Self::check(&self.name, &self.description)
    }

    fn check(name: &str, description: &str) -> Result<(), DomainError> {
        DomainValidation::not_null_or_empty(Some(name), NAME)?;
        DomainValidation::min_length(name, Self::NAME_MIN_LENGTH, NAME)?;
        DomainValidation::max_length(name, Self::NAME_MAX_LENGTH, NAME)?;

        DomainValidation::not_null_or_empty(Some(description), DESCRIPTION)?;
        DomainValidation::max_length(description, Self::DESCRIPTION_MAX_LENGTH, DESCRIPTION)?;
        Ok(())
    }
}

impl AggregateRoot for Category {
    fn id(&self) -> EntityId {
        self.id
    }

    fn validate(&self) -> Result<(), DomainError> {
        Category::validate(self)
    }
}

// ── Creation input ────────────────────────────────────────────────────────────

/// Unvalidated creation input, typically deserialized from a request.
///
/// Every field may be missing. Absent `name` or `description` fail the same
/// rule as an empty one; absent `is_active` defaults to `true`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl TryFrom<NewCategory> for Category {
    type Error = DomainError;

    fn try_from(input: NewCategory) -> Result<Self, Self::Error> {
        Self::with_status(
            input.name.unwrap_or_default(),
            input.description.unwrap_or_default(),
            input.is_active.unwrap_or(true),
        )
    }
}

// ── Persistence snapshot ──────────────────────────────────────────────────────

/// Flat snapshot of every `Category` field.
///
/// This is the shape handed to and received from whatever persists
/// categories. Converting back into a `Category` re-runs validation and
/// rejects a nil id, so a corrupted row never becomes a live aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Category> for CategoryRecord {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into_uuid(),
            name: category.name,
            description: category.description,
            is_active: category.is_active,
            created_at: category.created_at,
        }
    }
}

impl From<&Category> for CategoryRecord {
    fn from(category: &Category) -> Self {
        category.clone().into()
    }
}

impl TryFrom<CategoryRecord> for Category {
    type Error = DomainError;

    fn try_from(record: CategoryRecord) -> Result<Self, Self::Error> {
        let id = EntityId::try_from_uuid(record.id)?;
        Self::check(&record.name, &record.description)?;

        Ok(Self {
            id,
            name: record.name,
            description: record.description,
            is_active: record.is_active,
            created_at: record.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::Violation;

    fn valid_category() -> Category {
        Category::new("Category name", "Category Description").unwrap()
    }

    // ========================================================================
    // Validation order
    // ========================================================================

    #[test]
    fn blank_name_wins_over_bad_description() {
        let err = Category::new("", "").unwrap_err();
        assert_eq!(err.field(), NAME);
        assert_eq!(err.violation(), Violation::Blank);
    }

    #[test]
    fn short_name_wins_over_long_description() {
        let err = Category::new("ab", "d".repeat(10_001)).unwrap_err();
        assert_eq!(err.violation(), Violation::TooShort { min: 3 });
    }

    #[test]
    fn whitespace_padded_short_name_is_too_short_not_blank() {
        // " a " is three characters and not blank
        assert!(Category::new(" a ", "desc").is_ok());
        let err = Category::new(" a", "desc").unwrap_err();
        assert_eq!(err.violation(), Violation::TooShort { min: 3 });
    }

    #[test]
    fn blank_description_is_rejected() {
        let err = Category::new("Category name", "   ").unwrap_err();
        assert_eq!(err.to_string(), "Description should not be null or empty");
    }

    // ========================================================================
    // Validate, then assign
    // ========================================================================

    #[test]
    fn rejected_update_leaves_state_untouched() {
        let mut category = valid_category();
        let before = category.clone();

        assert!(category.update("ab", Some("new description".into())).is_err());
        assert!(category.update("new name", Some(String::new())).is_err());
        assert!(category.update("", None).is_err());

        assert_eq!(category, before);
    }

    #[test]
    fn update_keeps_identity_and_timestamp() {
        let mut category = valid_category();
        let id = category.id();
        let created_at = category.created_at();

        category.update("other name", Some("other description".into())).unwrap();

        assert_eq!(category.id(), id);
        assert_eq!(category.created_at(), created_at);
    }

    #[test]
    fn activate_is_idempotent() {
        let mut category = valid_category();
        category.activate().unwrap();
        category.activate().unwrap();
        assert!(category.is_active());
    }

    // ========================================================================
    // Conversions
    // ========================================================================

    #[test]
    fn new_category_defaults_to_active() {
        let input = NewCategory {
            name: Some("Movies".into()),
            description: Some("Feature films".into()),
            is_active: None,
        };
        let category = Category::try_from(input).unwrap();
        assert!(category.is_active());
    }

    #[test]
    fn new_category_without_name_fails_on_name() {
        let err = Category::try_from(NewCategory::default()).unwrap_err();
        assert_eq!(err.to_string(), "Name should not be null or empty");
    }

    #[test]
    fn record_round_trip_preserves_every_field() {
        let category = valid_category();
        let record = CategoryRecord::from(&category);
        let restored = Category::try_from(record).unwrap();
        assert_eq!(restored, category);
    }

    #[test]
    fn record_with_nil_id_is_rejected() {
        let mut record = CategoryRecord::from(valid_category());
        record.id = Uuid::nil();
        let err = Category::try_from(record).unwrap_err();
        assert_eq!(err.violation(), Violation::Nil);
    }

    #[test]
    fn record_with_invalid_name_is_rejected() {
        let mut record = CategoryRecord::from(valid_category());
        record.name = "x".repeat(256);
        let err = Category::try_from(record).unwrap_err();
        assert_eq!(err.violation(), Violation::TooLong { max: 255 });
    }

    #[test]
    fn aggregate_root_exposes_identity() {
        fn id_of(root: &impl AggregateRoot) -> EntityId {
            root.id()
        }
        let category = valid_category();
        assert_eq!(id_of(&category), category.id());
        assert!(AggregateRoot::validate(&category).is_ok());
    }
}
