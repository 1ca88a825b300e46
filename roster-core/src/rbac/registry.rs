use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use roster_model::{Permission, PermissionSet, Role, RoleName};
use tracing::{debug, info, warn};

use crate::config::RosterConfig;
use crate::error::{Result, RosterError};
use crate::rbac::defaults::default_roles;

/// Process-wide mapping from role name to the permissions it grants.
///
/// The map is append-only. Registration goes through the map's entry API, so
/// a concurrent reader sees either no entry or the complete permission set.
#[derive(Debug)]
pub struct RoleRegistry {
    roles: DashMap<RoleName, PermissionSet>,
}

impl Default for RoleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RoleRegistry {
    /// Create a registry seeded with the default roles.
    pub fn new() -> Self {
        let roles = DashMap::new();
        for role in default_roles() {
            let (name, permissions) = role.into_parts();
            roles.insert(name, permissions);
        }
        Self { roles }
    }

    /// Create a registry seeded with the defaults plus every role in `config`.
    ///
    /// Fails on the first configured role whose name is invalid or already
    /// taken.
    pub fn from_config(config: &RosterConfig) -> Result<Self> {
        let registry = Self::new();
        for seed in &config.roles {
            registry.register(&seed.name, seed.permissions.iter().copied())?;
        }

        info!(
            roles = registry.len(),
            configured = config.roles.len(),
            "role registry seeded"
        );
        Ok(registry)
    }

    /// Permissions granted by `role`, as a snapshot copy.
    pub fn permissions_for(&self, role: &str) -> Result<PermissionSet> {
        match self.roles.get(role) {
            Some(entry) => Ok(entry.value().clone()),
            None => {
                debug!(role, "permission lookup for unregistered role");
                Err(RosterError::UnknownRole {
                    role: role.to_string(),
                })
            }
        }
    }

    /// Resolve `role` into a [`Role`] carrying its current permission set.
    pub fn resolve(&self, role: &str) -> Result<Role> {
        match self.roles.get(role) {
            Some(entry) => Ok(Role::new(entry.key().clone(), entry.value().clone())),
            None => {
                debug!(role, "resolve for unregistered role");
                Err(RosterError::UnknownRole {
                    role: role.to_string(),
                })
            }
        }
    }

    /// Register a new role.
    ///
    /// A name that is already taken is rejected whether or not the permission
    /// lists match; the existing entry is left untouched.
    pub fn register(
        &self,
        role: &str,
        permissions: impl IntoIterator<Item = Permission>,
    ) -> Result<Role> {
        let name = RoleName::new(role)?;
        let permissions: PermissionSet = permissions.into_iter().collect();

        match self.roles.entry(name.clone()) {
            Entry::Occupied(_) => {
                warn!(role = %name, "rejected duplicate role registration");
                Err(RosterError::DuplicateRole { role: name })
            }
            Entry::Vacant(slot) => {
                slot.insert(permissions.clone());
                info!(
                    role = %name,
                    permissions = %permissions,
                    "registered role"
                );
                Ok(Role::new(name, permissions))
            }
        }
    }

    /// Whether `role` is registered.
    pub fn contains(&self, role: &str) -> bool {
        self.roles.contains_key(role)
    }

    /// All registered role names, sorted.
    pub fn role_names(&self) -> Vec<RoleName> {
        let mut names: Vec<RoleName> =
            self.roles.iter().map(|entry| entry.key().clone()).collect();
        names.sort();
        names
    }

    /// Number of registered roles.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Whether no roles are registered.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
