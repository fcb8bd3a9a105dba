//! Tracing subscriber initialisation.
//!
//! The domain never logs and never touches subscribers. Host
//! processes (services, test harnesses) call [`init_logging`] once at
//! startup with the [`LoggingConfig`] they loaded.
//!
//! The configured level applies to `catalog_core` only. `RUST_LOG`
//! overrides it if set.

use std::str::FromStr;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::{LogFormat, LoggingConfig},
    error::{CatalogError, CatalogResult},
};

/// Initialise the global tracing subscriber.
///
/// Returns an error if the level is not recognised or a subscriber is
/// already installed (a second call in the same process).
pub fn init_logging(config: &LoggingConfig) -> CatalogResult<()> {
    let level = parse_level(&config.level)?;

    // RUST_LOG wins; otherwise only this crate's events pass.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(level));

    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(config.ansi)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| CatalogError::configuration(format!("Failed to initialise tracing: {e}")))
}

fn default_filter(level: LevelFilter) -> EnvFilter {
    EnvFilter::new(format!("catalog_core={level}"))
}

/// Translate a configured level name into a filter.
fn parse_level(level: &str) -> CatalogResult<LevelFilter> {
    LevelFilter::from_str(level.trim())
        .map_err(|_| CatalogError::configuration(format!("unknown log level '{level}'")))
}
