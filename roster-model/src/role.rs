//! Role identifiers and resolved roles.

use std::borrow::Borrow;
use std::fmt;

use crate::error::ModelError;
use crate::permission::{Permission, PermissionSet};

/// Maximum role name length in bytes.
pub const MAX_ROLE_NAME_LEN: usize = 64;

/// Validated role identifier.
///
/// Business rules:
/// - 1-64 characters
/// - ASCII alphanumerics, `-` and `_` only
/// - Case is preserved; no trimming is performed
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct RoleName(String);

impl RoleName {
    /// Create a new role name with validation
    pub fn new(name: impl Into<String>) -> Result<Self, ModelError> {
        let name = name.into();

        let well_formed = !name.is_empty()
            && name.len() <= MAX_ROLE_NAME_LEN
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if !well_formed {
            return Err(ModelError::InvalidRoleName(name));
        }

        Ok(Self(name))
    }

    /// Get the role name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the inner string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RoleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets registries keyed by `RoleName` be queried with plain `&str`.
impl Borrow<str> for RoleName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RoleName {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for RoleName {
    type Error = ModelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RoleName> for String {
    fn from(value: RoleName) -> Self {
        value.0
    }
}

/// A role resolved against a registry: its name and the permissions it grants.
///
/// Holding a `Role` means the permission lookup has already happened; the
/// value is a snapshot and does not track later registry changes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Role {
    name: RoleName,
    permissions: PermissionSet,
}

impl Role {
    /// Pair a name with the permissions it grants.
    pub fn new(name: RoleName, permissions: PermissionSet) -> Self {
        Self { name, permissions }
    }

    /// The role's identifier.
    pub fn name(&self) -> &RoleName {
        &self.name
    }

    /// Permissions the role grants.
    pub fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }

    /// Whether the role grants `permission`.
    pub fn grants(&self, permission: Permission) -> bool {
        self.permissions.contains(permission)
    }

    /// Split into name and permissions.
    pub fn into_parts(self) -> (RoleName, PermissionSet) {
        (self.name, self.permissions)
    }
}
