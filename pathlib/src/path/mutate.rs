//! Operations that create, change or remove filesystem entries.
//!
//! Each operation checks its precondition (a directory where a file is
//! expected, an entry that must not exist yet) and then makes a single call
//! into `std::fs`. The check and the call are not atomic.

use std::fs::{self, DirBuilder, File, OpenOptions};
use std::io::Write;

use crate::config::{Config, DEFAULT_DIR_MODE};
use crate::error::{Error, Result};
use crate::path::Path;

impl Path {
    /// Create an empty file if nothing exists at this path yet.
    ///
    /// An existing entry, file or directory, is left untouched. Missing
    /// parent directories are not created.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn touch(&self) -> Result<()> {
        if self.exists() {
            return Ok(());
        }
        log::debug!("Creating empty file {self}");
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(self.as_std_path())
            .map_err(|e| Error::from_io(self, e))?;
        Ok(())
    }

    /// Create this directory and any missing ancestors with mode `0o755`.
    ///
    /// Unlike `mkdir -p`, an existing entry at this path is an error, even
    /// if it is already a directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyExists`] if the path exists, or an error from
    /// creating the directories.
    pub fn mkdir(&self) -> Result<()> {
        self.mkdir_with_mode(DEFAULT_DIR_MODE)
    }

    /// Like [`Path::mkdir`], using the directory mode from `config`.
    ///
    /// # Errors
    ///
    /// Same as [`Path::mkdir`].
    pub fn mkdir_with_config(&self, config: &Config) -> Result<()> {
        self.mkdir_with_mode(config.dir_mode())
    }

    /// Like [`Path::mkdir`], with an explicit mode for every directory created.
    ///
    /// The process umask still applies. The mode is ignored on platforms
    /// without Unix permissions.
    ///
    /// # Errors
    ///
    /// Same as [`Path::mkdir`].
    pub fn mkdir_with_mode(&self, mode: u32) -> Result<()> {
        if self.exists() {
            return Err(Error::AlreadyExists { path: self.clone() });
        }
        log::debug!("Creating directory {self} (mode {mode:o})");

        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(mode);
        }
        #[cfg(not(unix))]
        let _ = mode;

        builder
            .create(self.as_std_path())
            .map_err(|e| Error::from_io(self, e))
    }

    /// Replace the contents of this file with `data`.
    ///
    /// The file is created if missing and truncated otherwise. The handle is
    /// closed before returning, whether or not the write succeeded.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn write_bytes(&self, data: &[u8]) -> Result<()> {
        log::debug!("Writing {} bytes to {self}", data.len());
        let mut file = File::create(self.as_std_path()).map_err(|e| Error::from_io(self, e))?;
        file.write_all(data)?;
        Ok(())
    }

    /// Replace the contents of this file with `text`.
    ///
    /// # Errors
    ///
    /// Same as [`Path::write_bytes`].
    pub fn write_text(&self, text: &str) -> Result<()> {
        self.write_bytes(text.as_bytes())
    }

    /// Read the whole file.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be made absolute or read.
    pub fn read_bytes(&self) -> Result<Vec<u8>> {
        let absolute = self.absolute()?;
        fs::read(absolute.as_std_path()).map_err(|e| Error::from_io(self, e))
    }

    /// Read the whole file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    pub fn read_text(&self) -> Result<String> {
        let absolute = self.absolute()?;
        fs::read_to_string(absolute.as_std_path()).map_err(|e| Error::from_io(self, e))
    }

    /// Remove the file at this path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnlinkDirectory`] if the path is a directory, or an
    /// error from removing the file.
    pub fn unlink(&self) -> Result<()> {
        if self.is_dir() {
            return Err(Error::UnlinkDirectory { path: self.clone() });
        }
        log::debug!("Removing file {self}");
        fs::remove_file(self.as_std_path()).map_err(|e| Error::from_io(self, e))
    }

    /// Remove this directory, which must be empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotADirectory`] if the path is not a directory, or an
    /// error from the operating system if it is not empty.
    pub fn rmdir(&self) -> Result<()> {
        if !self.is_dir() {
            return Err(Error::NotADirectory {
                path: self.clone(),
                operation: "rmdir",
            });
        }
        log::debug!("Removing directory {self}");
        fs::remove_dir(self.as_std_path()).map_err(|e| Error::from_io(self, e))
    }

    /// Remove this directory and everything below it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotADirectory`] if the path is not a directory, or an
    /// error from removing any entry.
    pub fn rmdir_recursive(&self) -> Result<()> {
        if !self.is_dir() {
            return Err(Error::NotADirectory {
                path: self.clone(),
                operation: "rmdir_recursive",
            });
        }
        log::debug!("Removing directory tree {self}");
        fs::remove_dir_all(self.as_std_path()).map_err(|e| Error::from_io(self, e))
    }

    /// Move this entry to `target`.
    ///
    /// Atomicity and cross-device behaviour are those of the host's rename.
    /// This value still names the old location afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Rename`], naming both paths, if the rename fails.
    pub fn rename(&self, target: &Path) -> Result<()> {
        log::debug!("Renaming {self} to {target}");
        fs::rename(self.as_std_path(), target.as_std_path()).map_err(|source| Error::Rename {
            from: self.clone(),
            to: target.clone(),
            source,
        })
    }
}
