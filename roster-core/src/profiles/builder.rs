use roster_model::{Permission, PermissionSet, Role, RoleName};

use crate::error::{ProfileField, Result, RosterError};
use crate::profiles::profile::Profile;
use crate::profiles::value_objects::{Age, ProfileName};

/// Incremental accumulator for [`Profile`]s.
///
/// Setters validate only their own field and may be called in any order or
/// repeatedly (last write wins). Completeness is checked once, by
/// [`build`](Self::build), which borrows the builder so the same instance can
/// be adjusted and built again.
///
/// The builder only ever receives roles that were already resolved by the
/// caller; it has no access to a registry.
///
/// ```
/// use roster_core::profiles::ProfileBuilder;
/// use roster_model::{Permission, PermissionSet, Role, RoleName};
///
/// let role = Role::new(
///     RoleName::new("editor").unwrap(),
///     PermissionSet::from([Permission::Read, Permission::Write]),
/// );
///
/// let profile = ProfileBuilder::new()
///     .with_name("Alice")?
///     .with_age(30)?
///     .with_role(role)
///     .add_extra_permission(Permission::Share)?
///     .build()?;
///
/// assert_eq!(profile.name(), "Alice");
/// assert!(profile.has_permission(Permission::Share));
/// # Ok::<(), roster_core::RosterError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProfileBuilder {
    name: Option<ProfileName>,
    age: Option<Age>,
    role: Option<RoleName>,
    permissions: PermissionSet,
}

impl ProfileBuilder {
    /// Start with no fields set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Result<Self> {
        self.name = Some(ProfileName::new(name)?);
        Ok(self)
    }

    /// Set the age in years; zero is rejected.
    pub fn with_age(mut self, age: u32) -> Result<Self> {
        self.age = Some(Age::new(age)?);
        Ok(self)
    }

    /// Set the profile's role and reset its permissions to the role's base set.
    ///
    /// Extras added for a previously set role are discarded.
    pub fn with_role(mut self, role: Role) -> Self {
        let (name, permissions) = role.into_parts();
        self.role = Some(name);
        self.permissions = permissions;
        self
    }

    /// Grant one permission beyond the role's base set.
    ///
    /// Permissions are a set: adding one that is already held is a no-op.
    pub fn add_extra_permission(mut self, permission: Permission) -> Result<Self> {
        if self.role.is_none() {
            return Err(RosterError::BuilderState {
                operation: "add extra permission",
                requires: ProfileField::Role,
            });
        }
        self.permissions.insert(permission);
        Ok(self)
    }

    /// Fields that still need to be set before [`build`](Self::build) succeeds.
    pub fn missing_fields(&self) -> Vec<ProfileField> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push(ProfileField::Name);
        }
        if self.age.is_none() {
            missing.push(ProfileField::Age);
        }
        if self.role.is_none() {
            missing.push(ProfileField::Role);
        }
        missing
    }

    /// Produce a [`Profile`], or report every field that is still unset.
    pub fn build(&self) -> Result<Profile> {
        match (&self.name, self.age, &self.role) {
            (Some(name), Some(age), Some(role)) => Ok(Profile::new(
                name.clone(),
                age,
                role.clone(),
                self.permissions.clone(),
            )),
            _ => Err(RosterError::IncompleteProfile {
                missing: self.missing_fields(),
            }),
        }
    }
}
