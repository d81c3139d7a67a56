//! Opening files with compact mode strings.

use std::fmt;
use std::fs::{File, OpenOptions};

use crate::config::{Config, DEFAULT_FILE_MODE};
use crate::error::{Error, Result};
use crate::path::Path;

/// Access flags parsed from a mode string such as `"r"`, `"rw"` or `"w+"`.
///
/// - `r` and `w` together: read-write
/// - `r` alone: read-only
/// - `w` alone: write-only
/// - neither: read-only
/// - `+` anywhere: append
///
/// Appending never grants write access. `"r+"` is a read-only handle with
/// the append flag set, so writes through it fail. Other characters are
/// ignored.
///
/// # Examples
///
/// ```
/// use pathlib::OpenMode;
///
/// let mode = OpenMode::parse("w+");
/// assert!(!mode.read);
/// assert!(mode.write);
/// assert!(mode.append);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenMode {
    /// Open for reading.
    pub read: bool,
    /// Open for writing.
    pub write: bool,
    /// Position every write at the end of the file.
    pub append: bool,
}

impl OpenMode {
    /// Parse a compact mode string.
    #[must_use]
    pub fn parse(mode: &str) -> Self {
        let read = mode.contains('r');
        let write = mode.contains('w');
        Self {
            read: read || !write,
            write,
            append: mode.contains('+'),
        }
    }

    /// Whether the mode can modify the file.
    #[must_use]
    pub fn is_writable(&self) -> bool {
        self.write
    }

    fn options(self) -> OpenOptions {
        let mut options = OpenOptions::new();
        options
            .read(self.read)
            .write(self.write)
            .append(self.append && self.write);
        options
    }
}

impl fmt::Display for OpenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.read {
            f.write_str("r")?;
        }
        if self.write {
            f.write_str("w")?;
        }
        if self.append {
            f.write_str("+")?;
        }
        Ok(())
    }
}

impl Path {
    /// Open this file with a compact mode string, creating it with mode
    /// `0o755` if it does not exist.
    ///
    /// See [`OpenMode`] for the mode syntax.
    ///
    /// # Errors
    ///
    /// Same as [`Path::open_with_permissions`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::io::Write;
    /// use pathlib::Path;
    ///
    /// let mut log = Path::new("/tmp/app.log").open("w+").unwrap();
    /// writeln!(log, "started").unwrap();
    /// ```
    pub fn open(&self, mode: &str) -> Result<File> {
        self.open_with_permissions(mode, DEFAULT_FILE_MODE)
    }

    /// Like [`Path::open`], creating missing files with the file mode from
    /// `config`.
    ///
    /// # Errors
    ///
    /// Same as [`Path::open_with_permissions`].
    pub fn open_with_config(&self, mode: &str, config: &Config) -> Result<File> {
        self.open_with_permissions(mode, config.file_mode())
    }

    /// Open this file with a compact mode string.
    ///
    /// A missing file is created with `permissions` (subject to the umask).
    /// This also happens for read-only modes: the empty file is created
    /// first and then opened for reading. The handle is owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IsADirectory`] if the path is a directory, or an
    /// error from the operating system.
    pub fn open_with_permissions(&self, mode: &str, permissions: u32) -> Result<File> {
        if self.is_dir() {
            return Err(Error::IsADirectory {
                path: self.clone(),
                operation: "open",
            });
        }

        let mode = OpenMode::parse(mode);
        let mut options = mode.options();

        if !self.exists() {
            log::debug!("Creating {self} (mode {permissions:o}) to open as {mode}");
            if mode.is_writable() {
                options.create(true).truncate(false);
                set_create_mode(&mut options, permissions);
            } else {
                let mut create = OpenOptions::new();
                create.write(true).create(true).truncate(false);
                set_create_mode(&mut create, permissions);
                create
                    .open(self.as_std_path())
                    .map_err(|e| Error::from_io(self, e))?;
            }
        }

        options
            .open(self.as_std_path())
            .map_err(|e| Error::from_io(self, e))
    }
}

#[cfg(unix)]
fn set_create_mode(options: &mut OpenOptions, permissions: u32) {
    use std::os::unix::fs::OpenOptionsExt;

    options.mode(permissions);
}

#[cfg(not(unix))]
fn set_create_mode(_options: &mut OpenOptions, _permissions: u32) {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use tempfile::{tempdir, TempDir};

    fn sandbox() -> (TempDir, Path) {
        let dir = tempdir().unwrap();
        let root = Path::try_from(dir.path()).unwrap();
        (dir, root)
    }

    #[test]
    fn test_parse_modes() {
        let cases = [
            ("rw", true, true, false),
            ("r", true, false, false),
            ("w", false, true, false),
            ("", true, false, false),
            ("r+", true, false, true),
            ("w+", false, true, true),
            ("wr+", true, true, true),
        ];
        for (raw, read, write, append) in cases {
            assert_eq!(
                OpenMode::parse(raw),
                OpenMode { read, write, append },
                "mode {raw:?}"
            );
        }
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(OpenMode::parse("+wr").to_string(), "rw+");
        assert_eq!(OpenMode::parse("x").to_string(), "r");
    }

    #[test]
    fn test_open_write_creates_missing_file() {
        let (_dir, root) = sandbox();
        let file = root.join_path(["new.txt"]);

        let mut handle = file.open("w").unwrap();
        handle.write_all(b"hello").unwrap();
        drop(handle);

        assert_eq!(file.read_text().unwrap(), "hello");
    }

    #[test]
    fn test_open_read_creates_missing_file() {
        let (_dir, root) = sandbox();
        let file = root.join_path(["empty.txt"]);

        let mut handle = file.open("r").unwrap();
        let mut contents = String::new();
        handle.read_to_string(&mut contents).unwrap();

        assert!(contents.is_empty());
        assert!(file.is_file());
    }

    #[test]
    fn test_open_append() {
        let (_dir, root) = sandbox();
        let file = root.join_path(["log.txt"]);
        file.write_text("one\n").unwrap();

        let mut handle = file.open("w+").unwrap();
        handle.write_all(b"two\n").unwrap();
        drop(handle);

        assert_eq!(file.read_text().unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_open_read_append_is_read_only() {
        let (_dir, root) = sandbox();
        let file = root.join_path(["log.txt"]);
        file.write_text("one\n").unwrap();

        let mode = OpenMode::parse("r+");
        assert!(mode.append);
        assert!(!mode.is_writable());

        let mut handle = file.open("r+").unwrap();
        assert!(handle.write_all(b"two\n").is_err());

        let mut contents = String::new();
        handle.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "one\n");
        drop(handle);

        assert_eq!(file.read_text().unwrap(), "one\n");
    }

    #[test]
    fn test_open_read_append_creates_missing_file() {
        let (_dir, root) = sandbox();
        let file = root.join_path(["fresh.txt"]);

        drop(file.open("r+").unwrap());
        assert!(file.is_file());
    }

    #[test]
    fn test_open_write_existing_does_not_truncate() {
        let (_dir, root) = sandbox();
        let file = root.join_path(["data"]);
        file.write_text("abcdef").unwrap();

        let mut handle = file.open("w").unwrap();
        handle.write_all(b"XY").unwrap();
        drop(handle);

        assert_eq!(file.read_text().unwrap(), "XYcdef");
    }

    #[test]
    fn test_open_directory_refused() {
        let (_dir, root) = sandbox();
        let err = root.open("r").unwrap_err();
        assert!(matches!(err, Error::IsADirectory { operation: "open", .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_open_with_permissions_sets_mode() {
        let (_dir, root) = sandbox();
        let file = root.join_path(["secret"]);
        drop(file.open_with_permissions("w", 0o600).unwrap());
        assert_eq!(file.permissions().unwrap(), 0o600);
    }
}
