//! Configuration for pathlib.
//!
//! The only settings are the permission modes used when pathlib creates
//! directories ([`crate::Path::mkdir_with_config`]) and files
//! ([`crate::Path::open_with_config`]). They can come from:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PATHLIB_DIR_MODE`, `PATHLIB_FILE_MODE`)
//! 3. A YAML file (via `ConfigBuilder::with_file`)
//! 4. Built-in defaults (`0o755` for both)
//!
//! in order of precedence, highest first.
//!
//! # Examples
//!
//! ```no_run
//! use pathlib::config::ConfigBuilder;
//! use pathlib::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_file("pathlib.yaml")
//!     .build()
//!     .unwrap();
//!
//! Path::new("/srv/cache/thumbs").mkdir_with_config(&config).unwrap();
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;

pub use builder::ConfigBuilder;
pub use environment::{EnvironmentConfig, DIR_MODE_VAR, FILE_MODE_VAR};
pub use loader::ConfigLoader;
pub use schema::{parse_mode, Config, DEFAULT_DIR_MODE, DEFAULT_FILE_MODE, MAX_MODE};
