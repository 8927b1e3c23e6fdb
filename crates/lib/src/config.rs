//! The configuration tree.
//!
//! [`Config`] owns the root group of a tree and is the entry point for
//! parsing text and for root-relative path operations.

use std::{fmt, str::FromStr};

use tracing::debug;

use crate::{
    Result,
    parser::{self, ParseError},
    setting::{Kind, Path, ScalarKind, Setting},
};

/// A hierarchical, typed configuration.
///
/// A new `Config` holds an empty root group. [`Config::parse`] replaces the
/// whole tree; settings can also be added programmatically.
///
/// # Examples
///
/// ```
/// use libconf::{Config, setting::ScalarKind};
///
/// let mut config = Config::new();
/// config.parse("struct: { aint = 1; astring = \"test\"; };")?;
///
/// // Plain lookups return None for missing paths
/// assert!(config.lookup("struct.missing").is_none());
///
/// // Typed lookups tell "missing" apart from "wrong kind"
/// assert!(config.lookup_int("struct.missing").unwrap_err().is_not_found());
/// assert!(config.lookup_int("struct.astring").unwrap_err().is_type_mismatch());
///
/// let added = config.add_scalar_setting_to_parent("struct", "anotherint", ScalarKind::Int)?;
/// added.set_int(22)?;
/// assert_eq!(config.lookup_int("struct.anotherint")?, 22);
/// # Ok::<(), libconf::Error>(())
/// ```
pub struct Config {
    root: Setting,
}

impl Config {
    /// Creates a configuration with an empty root group.
    pub fn new() -> Self {
        Self {
            root: Setting::new_root(),
        }
    }

    /// Parses configuration text, replacing the current tree on success.
    ///
    /// On failure the current tree is left exactly as it was. Handles into
    /// a replaced tree stay usable but are detached from this configuration.
    pub fn parse(&mut self, text: &str) -> std::result::Result<(), ParseError> {
        let root = parser::parse(text)?;
        debug!(settings = root.len(), "Replaced configuration root");
        self.root = root;
        Ok(())
    }

    /// Reads a UTF-8 configuration file and parses it.
    ///
    /// I/O errors and parse errors both leave the current tree untouched.
    pub fn read_file(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "Read configuration file");
        self.parse(&text)?;
        Ok(())
    }

    /// Returns a handle to the root group.
    pub fn root(&self) -> Setting {
        self.root.clone()
    }

    /// Resolves a dotted path from the root.
    ///
    /// The empty path resolves to the root. Returns `None` when a segment
    /// does not exist or passes through a setting that is not a group.
    pub fn lookup(&self, path: impl AsRef<Path>) -> Option<Setting> {
        self.root.lookup(path)
    }

    pub fn lookup_int(&self, path: impl AsRef<Path>) -> Result<i64> {
        Ok(self.root.lookup_int(path)?)
    }

    pub fn lookup_float(&self, path: impl AsRef<Path>) -> Result<f64> {
        Ok(self.root.lookup_float(path)?)
    }

    pub fn lookup_bool(&self, path: impl AsRef<Path>) -> Result<bool> {
        Ok(self.root.lookup_bool(path)?)
    }

    pub fn lookup_string(&self, path: impl AsRef<Path>) -> Result<String> {
        Ok(self.root.lookup_string(path)?)
    }

    /// Appends a new scalar setting named `name` to the group at
    /// `parent_path`, holding its kind's zero value.
    ///
    /// # Errors
    /// - `NotFound` if `parent_path` does not resolve
    /// - `TypeMismatch` if it resolves to something other than a group
    /// - `DuplicateName` if the group already has a member called `name`
    /// - `InvalidName` if `name` is not a valid setting name
    pub fn add_scalar_setting_to_parent(
        &self,
        parent_path: impl AsRef<Path>,
        name: &str,
        kind: ScalarKind,
    ) -> Result<Setting> {
        self.add_setting_to_parent(parent_path, name, kind.into())
    }

    /// Like [`add_scalar_setting_to_parent`](Self::add_scalar_setting_to_parent),
    /// but also accepts container kinds, which start out empty.
    pub fn add_setting_to_parent(
        &self,
        parent_path: impl AsRef<Path>,
        name: &str,
        kind: Kind,
    ) -> Result<Setting> {
        let parent = self.root.require(parent_path)?;
        Ok(parent.add_child(name, kind)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Config {
    type Err = crate::Error;

    fn from_str(text: &str) -> Result<Self> {
        let mut config = Config::new();
        config.parse(text)?;
        Ok(config)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("settings", &self.root.len())
            .finish()
    }
}
