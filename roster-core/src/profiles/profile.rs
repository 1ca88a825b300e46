use roster_model::{Permission, PermissionSet, RoleName};
use serde::Serialize;

use crate::profiles::value_objects::{Age, ProfileName};

/// A fully populated user profile.
///
/// Only [`ProfileBuilder::build`](crate::profiles::ProfileBuilder::build)
/// creates profiles, so every instance has all four fields set and its
/// permissions are the snapshot its role granted at build time plus any
/// extras. There are no mutators; callers replace a profile rather than
/// changing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    name: ProfileName,
    age: Age,
    role: RoleName,
    permissions: PermissionSet,
}

impl Profile {
    pub(crate) fn new(
        name: ProfileName,
        age: Age,
        role: RoleName,
        permissions: PermissionSet,
    ) -> Self {
        Self {
            name,
            age,
            role,
            permissions,
        }
    }

    /// Display name, exactly as given.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Age in years.
    pub fn age(&self) -> u32 {
        self.age.value()
    }

    /// Role the profile was built for.
    pub fn role(&self) -> &RoleName {
        &self.role
    }

    /// Role permissions at build time plus extras.
    pub fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }

    /// Check if the profile holds a specific permission
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(permission)
    }

    /// Check if the profile was built for the given role
    pub fn has_role(&self, role: &str) -> bool {
        self.role.as_str() == role
    }
}
