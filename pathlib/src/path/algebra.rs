//! Pure path manipulation on `Path` values.
//!
//! None of these methods touch the filesystem.

use crate::path::normalize;
use crate::path::Path;

impl Path {
    /// The last component of the path.
    ///
    /// Trailing separators are ignored, so `"/var/log/"` has the name `"log"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathlib::Path;
    ///
    /// assert_eq!(Path::new("/var/log/messages").name(), "messages");
    /// assert_eq!(Path::new("foo/bar.baz").name(), "bar.baz");
    /// assert_eq!(Path::new("foo").name(), "foo");
    /// ```
    #[must_use]
    pub fn name(&self) -> &str {
        normalize::base(self.as_str())
    }

    /// The directory containing this path.
    ///
    /// A single relative component has the parent `"."`, and the root is its
    /// own parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathlib::Path;
    ///
    /// assert_eq!(Path::new("/var/log").parent(), Path::new("/var"));
    /// assert_eq!(Path::new("notes.txt").parent(), Path::new("."));
    /// assert_eq!(Path::new("/").parent(), Path::new("/"));
    /// ```
    #[must_use]
    pub fn parent(&self) -> Path {
        Path::new(normalize::dir(self.as_str()))
    }

    /// Append one or more components to this path.
    ///
    /// Components are joined with the host separator and the result is
    /// cleaned. An absolute component is appended like any other segment
    /// rather than replacing the receiver. With no components the receiver
    /// is returned as is, uncleaned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathlib::Path;
    ///
    /// assert_eq!(Path::new("/tmp/").join_path(["foo", "bar"]), Path::new("/tmp/foo/bar"));
    /// assert_eq!(Path::new("foo").join_path(["bar"]), Path::new("foo/bar"));
    /// assert_eq!(Path::new("/srv").join_path(["/www"]), Path::new("/srv/www"));
    /// ```
    #[must_use]
    pub fn join_path<I, P>(&self, parts: I) -> Path
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let parts: Vec<P> = parts.into_iter().collect();
        if parts.is_empty() {
            return self.clone();
        }
        let elements = std::iter::once(self.as_str()).chain(parts.iter().map(|p| p.as_ref()));
        Path::new(normalize::join(elements))
    }

    /// The extension of the final component, including the dot.
    ///
    /// Returns an empty string when there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathlib::Path;
    ///
    /// assert_eq!(Path::new("backup.tar.gz").suffix(), ".gz");
    /// assert_eq!(Path::new("conf.d/hosts").suffix(), "");
    /// ```
    #[must_use]
    pub fn suffix(&self) -> &str {
        normalize::ext(self.as_str())
    }

    /// The final component without its extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathlib::Path;
    ///
    /// assert_eq!(Path::new("/srv/backup.tar.gz").stem(), "backup.tar");
    /// assert_eq!(Path::new("README").stem(), "README");
    /// ```
    #[must_use]
    pub fn stem(&self) -> &str {
        let name = self.name();
        let ext = normalize::ext(name);
        &name[..name.len() - ext.len()]
    }

    /// Replace the extension of the final component.
    ///
    /// The requested suffix is trimmed of whitespace and may be given with or
    /// without its leading dot. An empty suffix strips the existing one,
    /// dot included; a path without an extension gets the new one appended.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathlib::Path;
    ///
    /// assert_eq!(Path::new("foo.bar").with_suffix("baz"), Path::new("foo.baz"));
    /// assert_eq!(Path::new("foo").with_suffix("baz"), Path::new("foo.baz"));
    /// assert_eq!(Path::new("foo/bar.a/baz.zip").with_suffix(""), Path::new("foo/bar.a/baz"));
    /// assert_eq!(Path::new("foo").with_suffix("  "), Path::new("foo"));
    /// ```
    #[must_use]
    pub fn with_suffix(&self, suffix: &str) -> Path {
        let raw = self.as_str();
        let trimmed = suffix.trim();
        let suffix = trimmed.strip_prefix('.').unwrap_or(trimmed);
        let stripped = &raw[..raw.len() - normalize::ext(raw).len()];

        if suffix.is_empty() {
            Path::new(stripped)
        } else {
            Path::new(format!("{stripped}.{suffix}"))
        }
    }

    /// Replace the final component.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathlib::Path;
    ///
    /// assert_eq!(Path::new("/etc/hosts").with_name("fstab"), Path::new("/etc/fstab"));
    /// ```
    #[must_use]
    pub fn with_name(&self, name: &str) -> Path {
        self.parent().join_path([name])
    }

    /// Whether the path is absolute on this host.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.as_std_path().is_absolute()
    }

    /// The lexically cleaned form of this path.
    ///
    /// See [`normalize::clean`] for the rules. No filesystem access happens,
    /// so symlinks followed by `..` may clean to a different entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathlib::Path;
    ///
    /// assert_eq!(Path::new("a//b/./c/..").clean(), Path::new("a/b"));
    /// ```
    #[must_use]
    pub fn clean(&self) -> Path {
        Path::new(normalize::clean(self.as_str()))
    }
}
