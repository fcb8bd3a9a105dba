pub mod category;
pub mod common;

pub use crate::domain::DomainError;
pub use category::{Category, CategoryRecord, NewCategory};
pub use common::{AggregateRoot, EntityId};
