//! Layered configuration.
//!
//! [`CatalogConfig`] is loaded once by the host process and passed down by
//! value. The domain never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables: `CATALOG_<SECTION>__<KEY>`, e.g.
//!    `CATALOG_LOGGING__LEVEL=debug`
//! 2. Config file: the explicit path, else `catalog.toml` in the working
//!    directory if it exists
//! 3. Built-in defaults (always present)
//!
//! ```toml
//! [logging]
//! level = "info"
//! format = "json"
//! ansi = false
//! ```

use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};

/// File looked up in the working directory when no explicit path is given.
/// Always parsed as TOML.
pub const DEFAULT_CONFIG_FILE: &str = "catalog.toml";

/// Prefix of the environment variables that override file values.
pub const ENV_PREFIX: &str = "CATALOG";

/// Host configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Tracing subscriber settings.
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter level (`trace`, `debug`, `info`, `warn`, `error`, `off`).
    /// `RUST_LOG` overrides it when set.
    pub level: String,
    pub format: LogFormat,
    /// Colourise human-readable output.
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::Pretty,
            ansi: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl CatalogConfig {
    /// Load configuration from defaults, the config file, and the environment.
    ///
    /// An explicit `config_file` must exist; the default `catalog.toml` is
    /// optional.
    ///
    /// Emits `debug` events under `catalog_core::config`. They reach a
    /// subscriber only if the host installed one before loading; a process
    /// that calls [`crate::logging::init_logging`] with the result of this
    /// function will not see them.
    pub fn load(config_file: Option<&Path>) -> CatalogResult<Self> {
        Self::load_with(config_file, Path::new("."), environment())
    }

    fn load_with(
        config_file: Option<&Path>,
        search_dir: &Path,
        env: Environment,
    ) -> CatalogResult<Self> {
        let defaults = Config::try_from(&Self::default()).map_err(config_error)?;

        let file = match config_file {
            Some(path) => {
                debug!(path = %path.display(), "loading configuration file");
                File::from(path).required(true)
            }
            None => {
                let path = search_dir.join(DEFAULT_CONFIG_FILE);
                File::new(&path.to_string_lossy(), FileFormat::Toml).required(false)
            }
        };

        let config: Self = Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(env)
            .build()
            .and_then(Config::try_deserialize)
            .map_err(config_error)?;

        debug!(
            level = %config.logging.level,
            format = ?config.logging.format,
            "configuration loaded"
        );
        Ok(config)
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn config_error(e: config::ConfigError) -> CatalogError {
    CatalogError::configuration(e.to_string())
}
