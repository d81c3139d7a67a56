//! Integration tests for relative paths.
//!
//! Relative paths are resolved against the process working directory at
//! call time. These tests change the working directory, so every test in
//! this file is marked `#[serial]`.

mod common;

use std::env;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;

use common::Sandbox;
use pathlib::Path;
use serial_test::serial;

/// Restores the saved working directory when dropped, even if the test
/// panics.
struct CwdGuard {
    saved: PathBuf,
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.saved);
    }
}

/// Runs `f` with the working directory set to `dir`, restoring it afterwards.
fn in_dir<F: FnOnce()>(dir: &Path, f: F) {
    let _guard = CwdGuard {
        saved: env::current_dir().unwrap(),
    };
    env::set_current_dir(dir.as_std_path()).unwrap();
    f();
}

#[test]
#[serial]
fn test_absolute_uses_current_dir() {
    let sandbox = Sandbox::new();
    let cwd = Path::try_from(env::current_dir().unwrap()).unwrap();

    let before = Path::new("relative/path").absolute().unwrap();
    assert_eq!(before, cwd.join_path(["relative/path"]));

    in_dir(sandbox.root(), || {
        let here = Path::try_from(env::current_dir().unwrap()).unwrap();
        let after = Path::new("relative/path").absolute().unwrap();
        assert_eq!(after, here.join_path(["relative", "path"]));
        assert_ne!(after, before);
    });
}

#[test]
#[serial]
fn test_relative_queries_follow_current_dir() {
    let sandbox = Sandbox::new().with_file("local.txt", "hi");
    let relative = Path::new("local.txt");

    in_dir(sandbox.root(), || {
        assert!(relative.exists());
        assert!(relative.is_file());
        assert_eq!(relative.read_text().unwrap(), "hi");
    });

    assert!(!relative.exists());
}

#[test]
#[serial]
fn test_relative_resolve() {
    let sandbox = Sandbox::new().with_dir("sub").with_file("top.txt", "");

    in_dir(sandbox.root(), || {
        let here = Path::try_from(env::current_dir().unwrap()).unwrap();
        let resolved = Path::new("sub/../top.txt").resolve().unwrap();
        assert_eq!(resolved, here.join_path(["top.txt"]));
        assert!(Path::new("missing.txt").resolve().is_err());
    });
}

#[test]
#[serial]
fn test_relative_glob_returns_absolute() {
    let sandbox = Sandbox::new().with_file("a.log", "").with_file("b.log", "");

    in_dir(sandbox.root(), || {
        let found = Path::new(".").glob("*.log").unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(Path::is_absolute));
    });
}

#[test]
#[serial]
fn test_in_dir_restores_after_panic() {
    let sandbox = Sandbox::new();
    let before = env::current_dir().unwrap();

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        in_dir(sandbox.root(), || panic!("failing body"));
    }));

    assert!(outcome.is_err());
    assert_eq!(env::current_dir().unwrap(), before);
}

#[test]
#[serial]
fn test_relative_mutations() {
    let sandbox = Sandbox::new();

    in_dir(sandbox.root(), || {
        let dir = Path::new("made/here");
        dir.mkdir().unwrap();
        let file = dir.join_path(["file.txt"]);
        file.touch().unwrap();
        assert!(file.exists());
        Path::new("made").rmdir_recursive().unwrap();
        assert!(!dir.exists());
    });
}
