use super::DomainError;
use crate::domain::error::Violation;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Globally unique identity of an aggregate.
///
/// Invariant: never nil once it belongs to an entity. `new` always generates
/// a random v4 value; `try_from_uuid` is for restoring stored records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(Uuid);

impl EntityId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Fallible constructor for identifiers coming from outside the domain.
    pub fn try_from_uuid(uuid: Uuid) -> Result<Self, DomainError> {
        if uuid.is_nil() {
            return Err(DomainError::validation("Id", Violation::Nil));
        }
        Ok(Self(uuid))
    }

    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub const fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for EntityId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl From<EntityId> for Uuid {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An entity that is the consistency boundary for its own invariants.
///
/// Identity is composed in (each aggregate embeds an [`EntityId`]) and
/// exposed through this trait so generic code can key on it.
pub trait AggregateRoot {
    fn id(&self) -> EntityId;

    /// Re-check every invariant of the aggregate.
    fn validate(&self) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_unique_and_not_nil() {
        let a = EntityId::new();
        let b = EntityId::new();
        assert_ne!(a, b);
        assert!(!a.as_uuid().is_nil());
    }

    #[test]
    fn try_from_uuid_rejects_nil() {
        let err = EntityId::try_from_uuid(Uuid::nil()).unwrap_err();
        assert_eq!(err.violation(), Violation::Nil);
        assert_eq!(err.to_string(), "Id should not be nil");
    }

    #[test]
    fn try_from_uuid_keeps_value() {
        let uuid = Uuid::new_v4();
        let id = EntityId::try_from_uuid(uuid).unwrap();
        assert_eq!(id.into_uuid(), uuid);
        assert_eq!(id.to_string(), uuid.to_string());
    }
}
