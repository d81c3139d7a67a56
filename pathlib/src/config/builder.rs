//! Layered configuration assembly.

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::schema::Config;
use crate::error::Result;
use crate::path::Path;

/// Builds a [`Config`] from a file, the environment and explicit overrides.
///
/// Later layers win: file, then environment, then programmatic overrides.
/// The result is validated before it is returned.
///
/// # Examples
///
/// ```
/// use pathlib::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_env()
///     .with_config(Config { dir_mode: Some(0o700), ..Default::default() })
///     .build()
///     .unwrap();
/// assert_eq!(config.dir_mode(), 0o700);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    file: Option<Path>,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads only the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this YAML file first, if it exists.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<Path>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Ignore PATHLIB_* environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply these values last.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Assemble and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed, an environment
    /// variable is malformed, or the merged result fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(file) = &self.file {
            if let Some(loaded) = ConfigLoader::load_optional(file)? {
                config.merge(&loaded);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = &self.overrides {
            config.merge(overrides);
        }

        config.validate()?;
        Ok(config)
    }
}
