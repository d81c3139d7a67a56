#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathlib
//!
//! An ergonomic filesystem path type backed by a plain string.
//!
//! [`Path`] bundles the everyday questions and chores around a path into
//! methods: does it exist, what is it, how old is it, what is its parent,
//! give me a sibling with another extension, create it, write it, remove it.
//! Every method is a thin, synchronous wrapper over `std::fs` or a bit of
//! string manipulation.
//!
//! ## Core Types
//!
//! - [`Path`]: The immutable path value and all its operations
//! - [`OpenMode`]: Access flags parsed from compact mode strings
//! - [`Config`] and [`ConfigBuilder`]: Default creation modes
//! - [`Error`] and [`Result`]: Error handling types
//!
//! ## Examples
//!
//! ```
//! use pathlib::Path;
//!
//! let source = Path::new("docs/guide.md");
//! assert_eq!(source.name(), "guide.md");
//! assert_eq!(source.with_suffix("html"), Path::new("docs/guide.html"));
//! assert_eq!(source.parent().join_path(["index.md"]), Path::new("docs/index.md"));
//! ```
//!
//! Working with the filesystem:
//!
//! ```no_run
//! use pathlib::Path;
//!
//! let cache = Path::new("/tmp/pathlib-demo");
//! if !cache.exists() {
//!     cache.mkdir().unwrap();
//! }
//! let entry = cache.join_path(["entry.bin"]);
//! entry.write_bytes(b"payload").unwrap();
//! for found in cache.glob("*.bin").unwrap() {
//!     println!("{found}");
//! }
//! cache.rmdir_recursive().unwrap();
//! ```
//!
//! ## Logging
//!
//! Mutating operations emit `debug` records through the `log` facade. No
//! logger is installed by this crate.

pub mod config;
pub mod error;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use path::{OpenMode, Path};
