//! Configuration file loading.

use crate::config::schema::Config;
use crate::error::Result;
use crate::path::Path;

/// Loads configuration from YAML files.
///
/// # Examples
///
/// ```no_run
/// use pathlib::config::ConfigLoader;
/// use pathlib::Path;
///
/// let config = ConfigLoader::load(&Path::new("pathlib.yaml")).unwrap();
/// println!("directories get mode {:o}", config.dir_mode());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid
    /// configuration.
    pub fn load(path: &Path) -> Result<Config> {
        log::debug!("Loading configuration from {path}");
        let contents = path.read_text()?;
        Self::parse(&contents)
    }

    /// Load a configuration file if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_optional(path: &Path) -> Result<Option<Config>> {
        if !path.is_file() {
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    /// Parse configuration from a YAML string.
    ///
    /// An empty document yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or has unknown fields.
    pub fn parse(contents: &str) -> Result<Config> {
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn test_load_file() {
        let dir = tempdir().unwrap();
        let file = Path::try_from(dir.path().join("pathlib.yaml")).unwrap();
        file.write_text("dir_mode: \"750\"\n").unwrap();

        let config = ConfigLoader::load(&file).unwrap();
        assert_eq!(config.dir_mode(), 0o750);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ConfigLoader::load(&Path::new("/nonexistent/pathlib.yaml")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_load_optional_missing_is_none() {
        let loaded = ConfigLoader::load_optional(&Path::new("/nonexistent/pathlib.yaml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_parse_empty_is_default() {
        assert_eq!(ConfigLoader::parse("  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_malformed() {
        let err = ConfigLoader::parse("dir_mode: [1, 2").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
