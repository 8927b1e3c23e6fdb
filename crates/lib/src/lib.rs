//!
//! libconf: hierarchical, typed configuration trees.
//! This library reads the libconfig text format into a tree of settings that can be
//! navigated by dotted path, queried with typed accessors and extended in place.
//!
//! ## Core Concepts
//!
//! * **Configurations (`config::Config`)**: Own the root group of a tree. Parsing text replaces the
//!   whole tree, and only on success.
//! * **Settings (`setting::Setting`)**: Handles to nodes of the tree. A setting is a scalar
//!   (`int`, `float`, `bool`, `string`) or a container (`group`, `list`, `array`). Handles alias the
//!   live tree, so a change made through one handle is visible through all of them.
//! * **Paths (`setting::Path`)**: Dotted member names such as `server.tls.port`, resolved one group
//!   at a time. The empty path names the node the lookup starts from.
//! * **Parser (`parser::parse`)**: Turns configuration text into a fresh tree, reporting malformed
//!   input with its line and column.
//!
//! Missing settings and settings of the wrong kind are different errors: see
//! [`Error::is_not_found`] and [`Error::is_type_mismatch`].

pub mod config;
pub mod constants;
pub mod parser;
pub mod setting;

/// Re-export the `Config` struct for easier access.
pub use config::Config;
pub use setting::{Kind, Path, PathBuf, ScalarKind, Setting, Value};

/// Result type used throughout the libconf library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the libconf library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Malformed configuration text, from the parser module
    #[error(transparent)]
    Parse(parser::ParseError),

    /// Structured setting errors from the setting module
    #[error(transparent)]
    Setting(setting::SettingError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Parse(_) => "parser",
            Error::Setting(_) => "setting",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a setting was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Setting(setting_err) => setting_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error indicates a setting of the wrong kind.
    pub fn is_type_mismatch(&self) -> bool {
        match self {
            Error::Setting(setting_err) => setting_err.is_type_mismatch(),
            _ => false,
        }
    }

    /// Check if this error indicates a name already taken in a group.
    pub fn is_duplicate_name(&self) -> bool {
        match self {
            Error::Setting(setting_err) => setting_err.is_duplicate_name(),
            _ => false,
        }
    }

    pub fn is_invalid_name(&self) -> bool {
        match self {
            Error::Setting(setting_err) => setting_err.is_invalid_name(),
            _ => false,
        }
    }

    /// Check if this error comes from malformed configuration text.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::Parse(_))
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}
