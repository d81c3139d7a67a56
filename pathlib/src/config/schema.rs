//! Configuration schema definitions.
//!
//! This module defines the settings pathlib reads from YAML files and the
//! environment: the permission modes used when creating directories and
//! files.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Mode used by [`crate::Path::mkdir`] for every directory it creates.
pub const DEFAULT_DIR_MODE: u32 = 0o755;

/// Mode used by [`crate::Path::open`] when it has to create the file.
pub const DEFAULT_FILE_MODE: u32 = 0o755;

/// Largest mode accepted: permission bits plus setuid, setgid and sticky.
pub const MAX_MODE: u32 = 0o7777;

/// Complete configuration structure.
///
/// Unset fields fall back to [`DEFAULT_DIR_MODE`] and [`DEFAULT_FILE_MODE`].
///
/// # Examples
///
/// ```
/// use pathlib::config::Config;
///
/// let config = Config {
///     dir_mode: Some(0o700),
///     ..Default::default()
/// };
/// assert_eq!(config.dir_mode(), 0o700);
/// assert_eq!(config.file_mode(), 0o755);
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Mode for directories created by `mkdir`.
    #[serde(default, deserialize_with = "deserialize_mode")]
    pub dir_mode: Option<u32>,

    /// Mode for files created by `open`.
    #[serde(default, deserialize_with = "deserialize_mode")]
    pub file_mode: Option<u32>,
}

impl Config {
    /// The directory creation mode, or the default.
    #[must_use]
    pub fn dir_mode(&self) -> u32 {
        self.dir_mode.unwrap_or(DEFAULT_DIR_MODE)
    }

    /// The file creation mode, or the default.
    #[must_use]
    pub fn file_mode(&self) -> u32 {
        self.file_mode.unwrap_or(DEFAULT_FILE_MODE)
    }

    /// Overlay the fields set in `other` onto this configuration.
    pub fn merge(&mut self, other: &Config) {
        if other.dir_mode.is_some() {
            self.dir_mode = other.dir_mode;
        }
        if other.file_mode.is_some() {
            self.file_mode = other.file_mode;
        }
    }

    /// Check that every mode fits in [`MAX_MODE`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        for (field, mode) in [("dir_mode", self.dir_mode), ("file_mode", self.file_mode)] {
            if let Some(mode) = mode {
                if mode > MAX_MODE {
                    return Err(Error::Validation {
                        field: field.to_string(),
                        message: format!("mode {mode:o} does not fit in {MAX_MODE:o}"),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Parse an octal mode string such as `"755"`, `"0755"` or `"0o755"`.
///
/// # Errors
///
/// Returns a message describing the problem if the string is not octal.
pub fn parse_mode(raw: &str) -> std::result::Result<u32, String> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix("0o")
        .or_else(|| trimmed.strip_prefix("0O"))
        .unwrap_or(trimmed);
    u32::from_str_radix(digits, 8).map_err(|_| format!("invalid octal mode: {raw}"))
}

/// Largest mode accepted as a bare YAML integer.
const MAX_INTEGER_MODE: u32 = 0o777;

/// Accept either a YAML integer or an octal string for a mode.
///
/// Integers are taken as-is, so `0o755` in YAML and `493` mean the same
/// thing. YAML reads a leading zero as decimal, so `0755` is `755`; integers
/// above `0o777` are rejected to catch that mistake, and modes with setuid,
/// setgid or sticky bits must be written as strings. Strings are always read
/// as octal, so `"755"` is `0o755`.
fn deserialize_mode<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Helper {
        Number(u32),
        Octal(String),
    }

    match Option::<Helper>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Helper::Number(mode)) if mode > MAX_INTEGER_MODE => Err(D::Error::custom(format!(
            "integer mode {mode} is not a permission mode; quote it (\"{mode}\") to read it as octal"
        ))),
        Some(Helper::Number(mode)) => Ok(Some(mode)),
        Some(Helper::Octal(raw)) => parse_mode(&raw).map(Some).map_err(D::Error::custom),
    }
}
