//! The `Path` value type.
//!
//! A `Path` owns the raw text it was built from and nothing else. Structure
//! (components, parent, extension) is derived from that text on demand, and
//! facts about the filesystem are re-queried on every call.

use std::convert::Infallible;
use std::fmt;
use std::path::{Path as StdPath, PathBuf};
use std::str::FromStr;

use crate::error::{Error, Result};

/// An immutable, string-backed filesystem path.
///
/// Equality, ordering and hashing compare the raw text exactly, so
/// `Path::new("a/../b")` and `Path::new("b")` are different values even
/// though they name the same entry. Use [`Path::clean`] or
/// [`Path::resolve`] to compare spellings.
///
/// # Examples
///
/// ```
/// use pathlib::Path;
///
/// let logs = Path::new("/var/log");
/// assert_eq!(logs.as_str(), "/var/log");
/// assert_eq!(logs.join_path(["messages"]), Path::new("/var/log/messages"));
/// assert_ne!(Path::new("/var/log/"), logs);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path {
    raw: String,
}

impl Path {
    /// Create a path from any string-like value.
    ///
    /// Nothing is checked: the path may be relative, absolute, empty, or
    /// name something that does not exist.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The raw text of the path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// View this path as a standard library path for use with `std::fs`.
    #[must_use]
    pub fn as_std_path(&self) -> &StdPath {
        StdPath::new(&self.raw)
    }

    /// Convert into the underlying `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.raw
    }

    /// Convert into a `PathBuf`.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        PathBuf::from(self.raw)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for Path {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Path {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&Path> for Path {
    fn from(path: &Path) -> Self {
        path.clone()
    }
}

impl FromStr for Path {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl TryFrom<&StdPath> for Path {
    type Error = Error;

    fn try_from(path: &StdPath) -> Result<Self> {
        path.to_str().map(Self::new).ok_or_else(|| Error::InvalidPath {
            path: Self::new(path.to_string_lossy()),
            reason: "Path contains invalid UTF-8".to_string(),
        })
    }
}

impl TryFrom<PathBuf> for Path {
    type Error = Error;

    fn try_from(path: PathBuf) -> Result<Self> {
        match path.into_os_string().into_string() {
            Ok(raw) => Ok(Self::new(raw)),
            Err(os) => Err(Error::InvalidPath {
                path: Self::new(os.to_string_lossy()),
                reason: "Path contains invalid UTF-8".to_string(),
            }),
        }
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl AsRef<StdPath> for Path {
    fn as_ref(&self) -> &StdPath {
        self.as_std_path()
    }
}
