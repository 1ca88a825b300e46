//! Model-level validation errors.

use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Role names must be 1-64 ASCII alphanumerics, `-` or `_`.
    InvalidRoleName(String),
    /// Text that does not name any known permission.
    UnknownPermission(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidRoleName(name) => {
                write!(f, "invalid role name: {name:?}")
            }
            ModelError::UnknownPermission(name) => {
                write!(f, "unknown permission: {name:?}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

/// Result alias for model validation.
pub type Result<T> = std::result::Result<T, ModelError>;
