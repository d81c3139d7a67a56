//! Error types for the pathlib library.
//!
//! Every fallible operation returns [`Result`], whose error side is the
//! [`Error`] enum below, built with `thiserror`.

use std::io::{self, ErrorKind};

use thiserror::Error;

use crate::path::Path;

/// Result type alias for operations that may fail with a pathlib error.
///
/// # Examples
///
/// ```
/// use pathlib::{Path, Result};
///
/// fn config_dir() -> Result<Path> {
///     Ok(Path::new("/etc"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathlib library.
///
/// Precondition violations (a directory where a file was expected, a path
/// that already exists) get their own variants. Failures from the operating
/// system are mapped to [`Error::PathNotFound`] or [`Error::PermissionDenied`]
/// when the kind is recognisable, and otherwise wrapped in [`Error::Io`].
#[derive(Debug, Error)]
pub enum Error {
    /// The path cannot be used as given.
    #[error("invalid path {path}: {reason}")]
    InvalidPath {
        /// The offending path.
        path: Path,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A path does not exist.
    #[error("path not found: {path}")]
    PathNotFound {
        /// The path that was not found.
        path: Path,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {path}")]
    PermissionDenied {
        /// The path that could not be accessed.
        path: Path,
    },

    /// The operation requires the path to be absent.
    #[error("cannot create {path}: it already exists")]
    AlreadyExists {
        /// The path that already exists.
        path: Path,
    },

    /// Resolution produced an absolute path that does not exist.
    #[error("cannot resolve path that does not exist: {absolute}")]
    CannotResolve {
        /// The original, unresolved path.
        path: Path,
        /// The absolute form that was checked.
        absolute: Path,
    },

    /// The operation does not accept directories.
    #[error("cannot {operation} {path}: it is a directory")]
    IsADirectory {
        /// The directory path.
        path: Path,
        /// The operation that was refused.
        operation: &'static str,
    },

    /// `unlink` was called on a directory.
    #[error("{path} is a directory, use rmdir() or rmdir_recursive() instead")]
    UnlinkDirectory {
        /// The directory path.
        path: Path,
    },

    /// The operation only works on directories.
    #[error("cannot {operation} {path}: not a directory")]
    NotADirectory {
        /// The path that is not a directory.
        path: Path,
        /// The operation that was refused.
        operation: &'static str,
    },

    /// Moving an entry failed. Either side may be the cause, so both are
    /// kept.
    #[error("cannot rename {from} to {to}: {source}")]
    Rename {
        /// The entry being moved.
        from: Path,
        /// The requested destination.
        to: Path,
        /// The underlying operating system error.
        #[source]
        source: io::Error,
    },

    /// A glob pattern could not be parsed.
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Map an I/O error for `path`, keeping the path for the kinds callers
    /// commonly branch on.
    pub(crate) fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            ErrorKind::NotFound => Self::PathNotFound { path: path.clone() },
            ErrorKind::PermissionDenied => Self::PermissionDenied { path: path.clone() },
            _ => Self::Io(err),
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// A plain [`Error::PathNotFound`], a failed resolution and a rename
    /// whose source or destination directory is missing all count.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathlib::{Error, Path};
    ///
    /// let err = Error::PathNotFound { path: Path::new("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::PathNotFound { .. } | Self::CannotResolve { .. } => true,
            Self::Rename { source, .. } => source.kind() == ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathlib::{Error, Path};
    ///
    /// let err = Error::PermissionDenied { path: Path::new("/restricted") };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Self::PermissionDenied { .. } => true,
            Self::Rename { source, .. } => source.kind() == ErrorKind::PermissionDenied,
            _ => false,
        }
    }

    /// The path the error is about, if it carries one.
    ///
    /// For [`Error::CannotResolve`] this is the original, unresolved path.
    /// For [`Error::Rename`] it is the entry being moved.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::InvalidPath { path, .. }
            | Self::PathNotFound { path }
            | Self::PermissionDenied { path }
            | Self::AlreadyExists { path }
            | Self::CannotResolve { path, .. }
            | Self::IsADirectory { path, .. }
            | Self::UnlinkDirectory { path }
            | Self::NotADirectory { path, .. }
            | Self::Rename { from: path, .. } => Some(path),
            Self::Pattern(_) | Self::Io(_) | Self::Configuration(_) | Self::Validation { .. } => {
                None
            }
        }
    }
}
