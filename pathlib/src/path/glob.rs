//! Wildcard matching inside a directory.

use crate::error::{Error, Result};
use crate::path::Path;

impl Path {
    /// List the entries of this directory that match `pattern`.
    ///
    /// The pattern is joined onto the absolute form of the directory and
    /// expanded with shell-style wildcards (`*`, `?`, `[...]`). Matches are
    /// returned as absolute paths in sorted order. Entries that cannot be
    /// read while matching are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotADirectory`] if this path is not an existing
    /// directory, [`Error::Pattern`] for a malformed pattern, or the error
    /// from [`Path::absolute`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pathlib::Path;
    ///
    /// for conf in Path::new("/etc").glob("*.conf").unwrap() {
    ///     assert!(conf.is_absolute());
    /// }
    /// ```
    pub fn glob(&self, pattern: &str) -> Result<Vec<Path>> {
        if !self.is_dir() {
            return Err(Error::NotADirectory {
                path: self.clone(),
                operation: "glob",
            });
        }

        let full_pattern = self.absolute()?.join_path([pattern]);
        let entries = glob::glob(full_pattern.as_str())?;

        let mut matches = Vec::new();
        for entry in entries {
            match entry {
                Ok(found) => matches.push(Path::try_from(found)?),
                Err(e) => {
                    log::debug!("Skipping unreadable glob entry {}: {e}", e.path().display());
                }
            }
        }
        Ok(matches)
    }
}
