//! Error types for registry, builder, factory and configuration.

use std::fmt;

use roster_model::{ModelError, RoleName};
use thiserror::Error;

use crate::profiles::value_objects::{AgeError, ProfileNameError};

/// Fields a profile cannot be built without.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    /// Display name
    Name,
    /// Age in years
    Age,
    /// Resolved role
    Role,
}

impl ProfileField {
    /// Lowercase field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Age => "age",
            ProfileField::Role => "role",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by the registry, builder, factory and configuration.
#[derive(Error, Debug)]
pub enum RosterError {
    /// The role was never registered.
    #[error("Unknown role: {role}")]
    UnknownRole {
        /// Name as requested.
        role: String,
    },

    /// A role with this name already exists.
    #[error("Role already registered: {role}")]
    DuplicateRole {
        /// The contested name.
        role: RoleName,
    },

    /// The role name failed validation.
    #[error("Invalid role name: {0}")]
    InvalidRoleName(#[source] ModelError),

    /// Text that does not name a permission.
    #[error("Unknown permission: {0}")]
    UnknownPermission(#[source] ModelError),

    /// A builder operation ran before a field it depends on was set.
    #[error("Cannot {operation}: {requires} has not been set")]
    BuilderState {
        /// What was attempted.
        operation: &'static str,
        /// Field that must be set first.
        requires: ProfileField,
    },

    /// `build()` was called with required fields unset.
    #[error("Incomplete profile, missing: {}", join_fields(.missing))]
    IncompleteProfile {
        /// Unset fields, in name, age, role order.
        missing: Vec<ProfileField>,
    },

    /// The profile name failed validation.
    #[error("Invalid profile name: {0}")]
    InvalidName(#[from] ProfileNameError),

    /// The age failed validation.
    #[error("Invalid age: {0}")]
    InvalidAge(#[from] AgeError),

    /// Configuration values are inconsistent.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration text is not valid TOML for [`RosterConfig`](crate::config::RosterConfig).
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Reading a configuration file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A presenter could not serialize a profile.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<ModelError> for RosterError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::InvalidRoleName(_) => RosterError::InvalidRoleName(err),
            ModelError::UnknownPermission(_) => {
                RosterError::UnknownPermission(err)
            }
        }
    }
}

fn join_fields(fields: &[ProfileField]) -> String {
    fields
        .iter()
        .map(ProfileField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl RosterError {
    /// Fields reported missing by an [`RosterError::IncompleteProfile`].
    pub fn missing_fields(&self) -> &[ProfileField] {
        match self {
            RosterError::IncompleteProfile { missing } => missing,
            _ => &[],
        }
    }
}

/// Result alias used throughout roster-core.
pub type Result<T> = std::result::Result<T, RosterError>;
