//! The `Path` value and everything it can do.
//!
//! # Key Concepts
//!
//! ## Text, not components
//!
//! A [`Path`] is its raw string. Parents, names and suffixes are derived from
//! that string when asked for; nothing is pre-parsed or cached.
//!
//! ## Cleaning
//!
//! Cleaning simplifies a path lexically:
//! - Collapsing repeated separators
//! - Dropping `.` segments
//! - Letting `..` cancel the segment before it
//! - Removing a trailing separator
//!
//! Joining cleans its result; equality never does.
//!
//! ## Resolution
//!
//! [`Path::absolute`] joins a relative path onto the current working
//! directory and cleans it. [`Path::resolve`] additionally requires the
//! result to exist. Every filesystem query resolves first, so relative
//! paths depend on the process working directory at call time.
//!
//! ## Two error policies
//!
//! [`Path::exists`], [`Path::is_dir`] and [`Path::is_file`] answer `false`
//! whenever the answer cannot be determined. All other filesystem operations
//! return [`crate::Result`].
//!
//! # Examples
//!
//! ```
//! use pathlib::Path;
//!
//! let report = Path::new("/srv/reports").join_path(["2024", "q1.csv"]);
//! assert_eq!(report.name(), "q1.csv");
//! assert_eq!(report.parent(), Path::new("/srv/reports/2024"));
//! assert_eq!(report.with_suffix("json"), Path::new("/srv/reports/2024/q1.json"));
//! ```

mod algebra;
mod glob;
mod inspect;
mod mutate;
pub mod normalize;
mod open;
mod resolve;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use open::OpenMode;
pub use types::Path;
