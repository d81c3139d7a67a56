//! Common test utilities for integration tests.
//!
//! This module provides a sandbox fixture for tests that need a scratch
//! directory populated with files and subdirectories.

use std::fs;

use pathlib::Path;
use tempfile::TempDir;

/// A temporary directory that is removed when dropped.
///
/// # Examples
///
/// ```no_run
/// # use common::Sandbox;
/// let sandbox = Sandbox::new()
///     .with_file("a.conf", "x = 1")
///     .with_dir("conf.d");
/// assert!(sandbox.path("a.conf").is_file());
/// ```
pub struct Sandbox {
    dir: TempDir,
    root: Path,
}

impl Sandbox {
    /// Creates an empty sandbox.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let root = Path::try_from(dir.path()).expect("temp dir should be UTF-8");
        Self { dir, root }
    }

    /// Adds a file with the given contents.
    pub fn with_file(self, name: &str, contents: &str) -> Self {
        fs::write(self.path(name).as_std_path(), contents).expect("should write fixture file");
        self
    }

    /// Adds a directory, including missing parents.
    #[allow(dead_code)]
    pub fn with_dir(self, name: &str) -> Self {
        fs::create_dir_all(self.path(name).as_std_path()).expect("should create fixture dir");
        self
    }

    /// The sandbox root as an absolute path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// A path inside the sandbox.
    pub fn path(&self, name: &str) -> Path {
        self.root.join_path([name])
    }

    /// The underlying std path of the sandbox root.
    #[allow(dead_code)]
    pub fn std_root(&self) -> &std::path::Path {
        self.dir.path()
    }
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new()
    }
}
