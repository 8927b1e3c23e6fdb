//! Dotted member paths for addressing settings.
//!
//! A path is a dot-separated sequence of group member names, e.g.
//! `"server.listen.port"`. Paths follow the same borrowed/owned split as
//! `std::path::Path`/`PathBuf`.
//!
//! # Core Types
//!
//! - [`Path`] - An unsized borrowed path type (always behind a reference)
//! - [`PathBuf`] - An owned path type that can be constructed and extended
//! - [`Component`] - A single validated member name
//!
//! Empty segments carry no meaning and are skipped: `"a..b"` addresses the
//! same setting as `"a.b"`, and the empty path addresses the root group.
//! There is no escaping; a member name can never contain a dot.
//!
//! ```rust
//! use libconf::setting::path::PathBuf;
//! use std::str::FromStr;
//!
//! let path = PathBuf::from_str("server.listen.port")?;
//! assert_eq!(path.components().collect::<Vec<_>>(), ["server", "listen", "port"]);
//! assert_eq!(path.parent().map(|p| p.to_string()), Some("server.listen".to_string()));
//! # Ok::<(), std::convert::Infallible>(())
//! ```

use std::{fmt, ops::Deref, str::FromStr};

use thiserror::Error;

/// Error type for member name validation failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// The name cannot be used as a group member name.
    #[error("Invalid setting name '{component}': {reason}")]
    InvalidComponent { component: String, reason: String },
}

/// Normalizes a path string by dropping empty segments.
///
/// - `""` → `""` (the root)
/// - `".server"` → `"server"`
/// - `"server."` → `"server"`
/// - `"server..port"` → `"server.port"`
///
/// ```rust
/// # use libconf::setting::path::normalize_path;
/// assert_eq!(normalize_path(""), "");
/// assert_eq!(normalize_path("a..b."), "a.b");
/// assert_eq!(normalize_path("..."), "");
/// ```
pub fn normalize_path(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    input
        .split('.')
        .filter(|component| !component.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

/// Returns true if `c` may start a setting name.
pub(crate) fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '*'
}

/// Returns true if `c` may appear after the first character of a setting name.
pub(crate) fn is_name_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '*')
}

/// A validated setting name, usable as one component of a path.
///
/// Names start with a letter or `*` and continue with letters, digits,
/// `-`, `_` or `*`. In particular they never contain a dot, so every named
/// member of a group stays addressable by path.
///
/// ```rust
/// # use libconf::setting::path::Component;
/// assert!(Component::new("listen_port").is_ok());
/// assert!(Component::new("a.b").is_err());
/// assert!(Component::new("").is_err());
/// assert!(Component::new("9lives").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Component {
    inner: String,
}

impl Component {
    /// Creates a new component from a string.
    ///
    /// # Errors
    /// Returns [`PathError::InvalidComponent`] if the string is not a valid
    /// setting name.
    pub fn new(s: impl Into<String>) -> Result<Self, PathError> {
        let s = s.into();

        let reason = match s.chars().next() {
            None => Some("names cannot be empty"),
            Some(_) if s.contains('.') => Some("names cannot contain dots"),
            Some(first) if !is_name_start(first) => Some("names must start with a letter or '*'"),
            Some(_) if !s.chars().skip(1).all(is_name_continue) => {
                Some("names may only contain letters, digits, '-', '_' and '*'")
            }
            Some(_) => None,
        };

        match reason {
            Some(reason) => Err(PathError::InvalidComponent {
                component: s,
                reason: reason.to_string(),
            }),
            None => Ok(Component { inner: s }),
        }
    }

    /// Returns the component as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Consumes the component, returning the owned name.
    pub fn into_string(self) -> String {
        self.inner
    }
}

impl AsRef<str> for Component {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl FromStr for Component {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Component::new(s)
    }
}

/// An owned, normalized member path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PathBuf {
    inner: String,
}

/// A borrowed member path.
///
/// `Path` is to [`PathBuf`] what `&str` is to `String`. It is unsized and
/// always used behind a reference. A `Path` borrowed from an arbitrary
/// string may contain empty segments; [`Path::components`] skips them.
#[derive(Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Path {
    inner: str,
}

impl PathBuf {
    /// Creates a new empty path, which addresses the root.
    pub fn new() -> Self {
        Self {
            inner: String::new(),
        }
    }

    /// Appends a path or name to the end of this path.
    ///
    /// The input is normalized, so pushing `""` is a no-op and pushing
    /// `"a.b"` appends two components.
    pub fn push(mut self, path: impl AsRef<str>) -> Self {
        let normalized = normalize_path(path.as_ref());
        if normalized.is_empty() {
            return self;
        }

        if !self.inner.is_empty() {
            self.inner.push('.');
        }
        self.inner.push_str(&normalized);
        self
    }

    /// Returns the parent path, or `None` if this path is empty.
    ///
    /// The parent of a single-component path is the empty (root) path.
    pub fn parent(&self) -> Option<PathBuf> {
        if self.inner.is_empty() {
            return None;
        }
        Some(match self.inner.rfind('.') {
            Some(last_dot) => PathBuf {
                inner: self.inner[..last_dot].to_string(),
            },
            None => PathBuf::new(),
        })
    }

    /// Creates a `PathBuf` by normalizing the input string.
    pub fn normalize(path: &str) -> Self {
        PathBuf {
            inner: normalize_path(path),
        }
    }
}

impl Path {
    /// Borrows a string as a path.
    pub fn new(s: &str) -> &Path {
        // SAFETY: Path is repr(transparent) over str
        unsafe { &*(s as *const str as *const Path) }
    }

    /// Returns an iterator over the non-empty components of the path.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.inner.split('.').filter(|s| !s.is_empty())
    }

    /// Returns the number of components in the path.
    pub fn len(&self) -> usize {
        self.components().count()
    }

    /// Returns `true` if the path has no components, i.e. addresses the root.
    pub fn is_empty(&self) -> bool {
        self.components().next().is_none()
    }

    /// Returns the last component of the path, or `None` if empty.
    pub fn file_name(&self) -> Option<&str> {
        self.components().last()
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Converts this `Path` to an owned, normalized `PathBuf`.
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::normalize(&self.inner)
    }
}

impl Deref for PathBuf {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        Path::new(&self.inner)
    }
}

impl AsRef<Path> for PathBuf {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for str {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<Path> for String {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for PathBuf {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl FromStr for PathBuf {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::normalize(s))
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&**self, f)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "(root)")
        } else {
            write!(f, "{}", &self.inner)
        }
    }
}
