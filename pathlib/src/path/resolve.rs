//! Absolute-path resolution for `Path` values.
//!
//! Resolution is lexical: a relative path is joined onto the current working
//! directory and cleaned, but symlinks are left as they are. The working
//! directory is process-wide state, so resolving the same relative `Path`
//! twice can give different answers if something calls
//! `std::env::set_current_dir` in between.

use crate::error::{Error, Result};
use crate::path::{normalize, Path};

impl Path {
    /// The absolute, cleaned form of this path.
    ///
    /// Does not require the path to exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the path is relative and the current
    /// working directory cannot be determined.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathlib::Path;
    ///
    /// let absolute = Path::new("src/../Cargo.toml").absolute().unwrap();
    /// assert!(absolute.is_absolute());
    /// assert_eq!(absolute.name(), "Cargo.toml");
    /// ```
    pub fn absolute(&self) -> Result<Path> {
        normalize::absolute(self.as_str()).map(Path::new)
    }

    /// The absolute form of this path, if it exists.
    ///
    /// # Errors
    ///
    /// Returns the error from [`Path::absolute`], or
    /// [`Error::CannotResolve`] carrying this original path when the
    /// absolute form does not exist.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pathlib::Path;
    ///
    /// let passwd = Path::new("/etc/../etc/passwd").resolve().unwrap();
    /// assert_eq!(passwd, Path::new("/etc/passwd"));
    /// ```
    pub fn resolve(&self) -> Result<Path> {
        let absolute = self.absolute()?;
        if !absolute.exists() {
            return Err(Error::CannotResolve {
                path: self.clone(),
                absolute,
            });
        }
        Ok(absolute)
    }

    /// Expand a leading `~` to the current user's home directory.
    ///
    /// Paths that do not start with `~` are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] for `~user` forms or when the home
    /// directory cannot be determined.
    pub fn expand_user(&self) -> Result<Path> {
        normalize::expand_tilde(self.as_str()).map(Path::new)
    }
}
