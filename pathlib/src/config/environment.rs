//! Environment variable handling for configuration overrides.
//!
//! This module provides support for PATHLIB_* environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::{parse_mode, Config};
use crate::error::{Error, Result};

/// Variable overriding [`Config::dir_mode`].
pub const DIR_MODE_VAR: &str = "PATHLIB_DIR_MODE";

/// Variable overriding [`Config::file_mode`].
pub const FILE_MODE_VAR: &str = "PATHLIB_FILE_MODE";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathlib::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Both variables hold octal modes (`755`, `0755` or `0o755`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if a variable is set but not octal.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(mode) = Self::read_mode(DIR_MODE_VAR)? {
            config.dir_mode = Some(mode);
        }
        if let Some(mode) = Self::read_mode(FILE_MODE_VAR)? {
            config.file_mode = Some(mode);
        }
        Ok(())
    }

    fn read_mode(var: &str) -> Result<Option<u32>> {
        let Ok(raw) = env::var(var) else {
            return Ok(None);
        };
        log::debug!("Using {var}={raw}");
        parse_mode(&raw).map(Some).map_err(|message| Error::Validation {
            field: var.to_string(),
            message,
        })
    }
}
