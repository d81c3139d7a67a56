//! Filesystem queries on `Path` values.
//!
//! Two policies live side by side here. The boolean queries (`exists`,
//! `is_dir`, `is_file`) collapse every failure into `false`: a path that is
//! missing, unreadable, or cannot be made absolute all look the same. The
//! remaining queries return a [`Result`] so callers can tell these apart.
//!
//! Nothing is cached. Each call resolves the path against the current
//! working directory and stats it again.

use std::fs::{self, Metadata};

use chrono::{DateTime, Duration, Utc};

use crate::error::{Error, Result};
use crate::path::Path;

impl Path {
    /// Stat the absolute form of this path, following symlinks.
    fn metadata(&self) -> Result<Metadata> {
        let absolute = self.absolute()?;
        fs::metadata(absolute.as_std_path()).map_err(|e| Error::from_io(self, e))
    }

    /// Whether the path names an existing entry.
    ///
    /// Returns `false` when the entry is missing, but also when it cannot be
    /// statted (for example because a parent directory is not searchable) or
    /// when the working directory is unavailable.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathlib::Path;
    ///
    /// assert!(!Path::new("/no/such/place/on/this/host").exists());
    /// ```
    #[must_use]
    pub fn exists(&self) -> bool {
        self.metadata().is_ok()
    }

    /// Whether the path is an existing directory.
    ///
    /// Follows the same failure-collapsing policy as [`Path::exists`].
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.metadata().is_ok_and(|m| m.is_dir())
    }

    /// Whether the path is an existing regular file.
    ///
    /// Follows the same failure-collapsing policy as [`Path::exists`].
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.metadata().is_ok_and(|m| m.is_file())
    }

    /// The permission bits of the entry.
    ///
    /// On Unix this is `st_mode & 0o777`. Elsewhere only the read-only flag
    /// is known, reported as `0o444` or `0o666`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be made absolute or statted.
    pub fn permissions(&self) -> Result<u32> {
        let metadata = self.metadata()?;
        Ok(permission_bits(&metadata))
    }

    /// The last modification time of the entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be statted or the platform does
    /// not record modification times.
    pub fn modified(&self) -> Result<DateTime<Utc>> {
        let modified = self
            .metadata()?
            .modified()
            .map_err(|e| Error::from_io(self, e))?;
        Ok(DateTime::<Utc>::from(modified))
    }

    /// Time elapsed between the last modification and `now`.
    ///
    /// `now` is taken from the caller so results are reproducible. The
    /// duration is negative if the entry was modified after `now`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathNotFound`] if the path does not exist, or any
    /// error from [`Path::modified`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use chrono::Utc;
    /// use pathlib::Path;
    ///
    /// let age = Path::new("/var/log/syslog").age(Utc::now()).unwrap();
    /// println!("last written {} seconds ago", age.num_seconds());
    /// ```
    pub fn age(&self, now: DateTime<Utc>) -> Result<Duration> {
        if !self.exists() {
            return Err(Error::PathNotFound { path: self.clone() });
        }
        Ok(now.signed_duration_since(self.modified()?))
    }
}

#[cfg(unix)]
fn permission_bits(metadata: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;

    metadata.permissions().mode() & 0o777
}

#[cfg(not(unix))]
fn permission_bits(metadata: &Metadata) -> u32 {
    if metadata.permissions().readonly() {
        0o444
    } else {
        0o666
    }
}
