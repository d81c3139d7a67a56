//! Lexical path functions.
//!
//! Everything here works on the path text alone:
//! - Cleaning separators, `.` and `..` segments
//! - Joining, base name, directory and extension
//! - Expanding tilde (~) to the home directory
//! - Converting relative paths to absolute paths
//!
//! Only [`expand_tilde`] and [`absolute`] look outside the string, at the
//! home directory and the current working directory respectively.

use std::env;
use std::path::{is_separator, MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

use crate::error::{Error, Result};
use crate::path::Path;

/// Lexically simplify a path.
///
/// Repeated separators collapse to one, `.` segments are dropped, and each
/// `..` removes the segment before it. A `..` that would climb above the root
/// of an absolute path is dropped; in a relative path it is kept. A trailing
/// separator is removed, and an empty result becomes `.`.
///
/// # Examples
///
/// ```
/// use pathlib::path::normalize::clean;
///
/// assert_eq!(clean("/a/./b/../c"), "/a/c");
/// assert_eq!(clean("a//b/"), "a/b");
/// assert_eq!(clean("../x/.."), "..");
/// assert_eq!(clean("/.."), "/");
/// assert_eq!(clean(""), ".");
/// ```
#[must_use]
pub fn clean(path: &str) -> String {
    let rooted = path.starts_with(is_separator);
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split(is_separator) {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if rooted => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let body = segments.join(MAIN_SEPARATOR_STR);
    if rooted {
        format!("{MAIN_SEPARATOR}{body}")
    } else if body.is_empty() {
        ".".to_string()
    } else {
        body
    }
}

/// Join path elements with the separator, then [`clean`] the result.
///
/// Empty elements are skipped. Unlike `std::path::Path::join`, an absolute
/// element does not replace what came before it; it is appended as a
/// segment. Joining nothing but empty elements yields the empty string.
///
/// # Examples
///
/// ```
/// use pathlib::path::normalize::join;
///
/// assert_eq!(join(["/tmp/", "foo", "bar"]), "/tmp/foo/bar");
/// assert_eq!(join(["/tmp", "/etc"]), "/tmp/etc");
/// assert_eq!(join(["", ""]), "");
/// ```
pub fn join<'a>(elements: impl IntoIterator<Item = &'a str>) -> String {
    let parts: Vec<&str> = elements.into_iter().filter(|e| !e.is_empty()).collect();
    if parts.is_empty() {
        return String::new();
    }
    clean(&parts.join(MAIN_SEPARATOR_STR))
}

/// The last element of a path.
///
/// Trailing separators are ignored. An empty path yields `.` and a path made
/// only of separators yields a single separator.
#[must_use]
pub fn base(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }
    let trimmed = path.trim_end_matches(is_separator);
    if trimmed.is_empty() {
        return MAIN_SEPARATOR_STR;
    }
    match trimmed.rfind(is_separator) {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

/// Everything but the last element of a path, cleaned.
///
/// A path without a separator yields `.`; the root yields the root.
#[must_use]
pub fn dir(path: &str) -> String {
    match path.rfind(is_separator) {
        Some(idx) => clean(&path[..=idx]),
        None => ".".to_string(),
    }
}

/// The extension of the final element, including its dot.
///
/// Returns the empty string when the final element has no dot. Dots in
/// earlier elements are never considered.
#[must_use]
pub fn ext(path: &str) -> &str {
    for (idx, c) in path.char_indices().rev() {
        if is_separator(c) {
            break;
        }
        if c == '.' {
            return &path[idx..];
        }
    }
    ""
}

/// Expand tilde (~) to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user` syntax.
///
/// # Errors
///
/// Returns an error if:
/// - The home directory cannot be determined
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use pathlib::path::normalize::expand_tilde;
///
/// // Leaves other paths unchanged
/// assert_eq!(expand_tilde("/absolute").unwrap(), "/absolute");
/// assert!(expand_tilde("~other/path").is_err());
/// ```
pub fn expand_tilde(path: &str) -> Result<String> {
    let Some(rest) = path.strip_prefix('~') else {
        return Ok(path.to_string());
    };

    if !rest.is_empty() && !rest.starts_with(is_separator) {
        return Err(Error::InvalidPath {
            path: Path::new(path),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        });
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: Path::new(path),
        reason: "Cannot determine home directory".to_string(),
    })?;
    let home = home.to_str().ok_or_else(|| Error::InvalidPath {
        path: Path::new(path),
        reason: "Home directory contains invalid UTF-8".to_string(),
    })?;

    Ok(join([home, rest]))
}

/// Make a path absolute against the current working directory and clean it.
///
/// The working directory is process-wide state, so the result for a relative
/// path depends on when this is called.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined or is not
/// valid UTF-8. Absolute paths never fail.
pub fn absolute(path: &str) -> Result<String> {
    if std::path::Path::new(path).is_absolute() {
        return Ok(clean(path));
    }

    let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
        path: Path::new(path),
        reason: format!("Cannot get current directory: {e}"),
    })?;
    let cwd = cwd.to_str().ok_or_else(|| Error::InvalidPath {
        path: Path::new(path),
        reason: "Current directory contains invalid UTF-8".to_string(),
    })?;

    Ok(join([cwd, path]))
}
