//! Error types for setting lookup, access and mutation.
//!
//! Plain lookups report a missing setting as `None`. These errors are for
//! the operations that require a setting to be present and of a given kind.

use thiserror::Error;

use super::{Kind, path::PathError};

/// Structured error types for setting operations.
///
/// `NotFound` and `TypeMismatch` are kept distinct so callers can tell
/// "the key is absent" apart from "the key is present but holds the wrong
/// kind of value".
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingError {
    /// No setting exists at the path
    #[error("Setting not found: {path}")]
    NotFound { path: String },

    /// The setting exists but is of a different kind than requested
    #[error("Setting type mismatch at {path}: expected {expected}, found {actual}")]
    TypeMismatch {
        path: String,
        expected: Kind,
        actual: Kind,
    },

    /// A group already has a member with this name
    #[error("Duplicate setting name '{name}' in {parent}")]
    DuplicateName { parent: String, name: String },

    /// The name cannot be used for a group member
    #[error(transparent)]
    InvalidName(#[from] PathError),

    /// An array element that is not a scalar, or differs in kind from the
    /// elements already present
    #[error("Array {path} cannot hold a {actual} element")]
    ElementKind {
        path: String,
        expected: Option<Kind>,
        actual: Kind,
    },
}

impl SettingError {
    /// Check if this error indicates a missing setting
    pub fn is_not_found(&self) -> bool {
        matches!(self, SettingError::NotFound { .. })
    }

    /// Check if this error is a kind mismatch
    pub fn is_type_mismatch(&self) -> bool {
        matches!(
            self,
            SettingError::TypeMismatch { .. } | SettingError::ElementKind { .. }
        )
    }

    /// Check if this error is a duplicate member name
    pub fn is_duplicate_name(&self) -> bool {
        matches!(self, SettingError::DuplicateName { .. })
    }

    /// Check if this error is an invalid member name
    pub fn is_invalid_name(&self) -> bool {
        matches!(self, SettingError::InvalidName(_))
    }

    /// Get the path if this is a path-related error
    pub fn path(&self) -> Option<&str> {
        match self {
            SettingError::NotFound { path }
            | SettingError::TypeMismatch { path, .. }
            | SettingError::ElementKind { path, .. } => Some(path),
            SettingError::DuplicateName { parent, .. } => Some(parent),
            SettingError::InvalidName(_) => None,
        }
    }
}

// Conversion from SettingError to the main Error type
impl From<SettingError> for crate::Error {
    fn from(err: SettingError) -> Self {
        crate::Error::Setting(err)
    }
}
