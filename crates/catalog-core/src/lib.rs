//! Catalog Core - the Category aggregate and its validation rules.
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │   Host process (service, job, tests)    │
//! │  loads CatalogConfig, calls init_logging│
//! └──────────────────┬──────────────────────┘
//!                    │ constructs / mutates
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │   Category ── DomainValidation          │
//! │      │                                  │
//! │      └── EntityId (identity)            │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use catalog_core::prelude::*;
//!
//! let mut category = Category::new("Documentaries", "Non-fiction films").unwrap();
//! category.deactivate().unwrap();
//! assert!(!category.is_active());
//!
//! let err = Category::new("ab", "desc").unwrap_err();
//! assert_eq!(err.to_string(), "Name should be at least 3 characters long");
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::config::{CatalogConfig, LogFormat, LoggingConfig};
    pub use crate::domain::{
        AggregateRoot, Category, CategoryRecord, DomainError, DomainValidation, EntityId,
        NewCategory, Violation,
    };
    pub use crate::error::{CatalogError, CatalogResult, ErrorCategory};
    pub use crate::logging::init_logging;
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
