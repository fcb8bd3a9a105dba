//! Core domain layer for the catalog.
//!
//! Pure business logic: entities, their invariants, and the shared
//! validation helpers they are built from.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, network, or external calls
//! - **No tracing**: callers decide what to log when validation fails
//! - **Rich domain model**: behavior lives in entities, not services

pub mod entities;
pub mod error;
pub mod validation;

pub use entities::{AggregateRoot, Category, CategoryRecord, EntityId, NewCategory};
pub use error::{DomainError, Violation};
pub use validation::DomainValidation;
