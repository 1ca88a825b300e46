use std::fmt;
use std::sync::Arc;

use roster_model::{Permission, Role};
use tracing::debug;

use crate::config::{AgeRange, RosterConfig};
use crate::error::Result;
use crate::generation::{AgeGenerator, NameGenerator};
use crate::profiles::builder::ProfileBuilder;
use crate::profiles::fields::{GeneratedFields, ProfileFields};
use crate::profiles::profile::Profile;
use crate::rbac::{RoleRegistry, roles};

/// Produces ready-made profiles by resolving roles through a shared
/// [`RoleRegistry`] and feeding a fresh [`ProfileBuilder`].
///
/// The factory never knows which permissions a role grants; it always asks
/// the registry. Builder failures are returned unchanged and never retried.
#[derive(Clone)]
pub struct ProfileFactory {
    registry: Arc<RoleRegistry>,
    age_range: AgeRange,
}

impl fmt::Debug for ProfileFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileFactory")
            .field("roles", &self.registry.len())
            .field("age_range", &self.age_range)
            .finish()
    }
}

impl ProfileFactory {
    /// Factory over `registry` with the default generated-age range.
    pub fn new(registry: Arc<RoleRegistry>) -> Self {
        Self {
            registry,
            age_range: AgeRange::default(),
        }
    }

    /// Build a registry from `config` and a factory over it.
    pub fn from_config(config: &RosterConfig) -> Result<Self> {
        config.validate()?;
        let registry = Arc::new(RoleRegistry::from_config(config)?);
        Ok(Self::new(registry).with_age_range(config.generated_age))
    }

    /// Range handed to the age generator for random profiles.
    pub fn with_age_range(mut self, age_range: AgeRange) -> Self {
        self.age_range = age_range;
        self
    }

    /// The shared registry roles are resolved against.
    pub fn registry(&self) -> &Arc<RoleRegistry> {
        &self.registry
    }

    /// Range used for generated ages.
    pub fn age_range(&self) -> AgeRange {
        self.age_range
    }

    /// Create a profile for a registered role.
    pub fn create_for_role(
        &self,
        role: &str,
        fields: &dyn ProfileFields,
    ) -> Result<Profile> {
        let role = self.registry.resolve(role)?;
        Self::create_for_resolved_role(role, fields)
    }

    /// Create a profile from a role the caller already resolved.
    ///
    /// The registry is not consulted. The caller is responsible for `role`
    /// having come from [`RoleRegistry::resolve`]; a hand-built [`Role`] is
    /// accepted as is, so nothing here proves the role is registered.
    pub fn create_for_resolved_role(
        role: Role,
        fields: &dyn ProfileFields,
    ) -> Result<Profile> {
        let profile = ProfileBuilder::new()
            .with_name(fields.name())?
            .with_age(fields.age())?
            .with_role(role)
            .build()?;

        debug!(
            role = %profile.role(),
            permissions = profile.permissions().len(),
            "created profile"
        );
        Ok(profile)
    }

    /// Create a profile for a registered role with additional permissions.
    pub fn create_with_extras(
        &self,
        role: &str,
        fields: &dyn ProfileFields,
        extras: impl IntoIterator<Item = Permission>,
    ) -> Result<Profile> {
        let role = self.registry.resolve(role)?;
        let mut builder = ProfileBuilder::new()
            .with_name(fields.name())?
            .with_age(fields.age())?
            .with_role(role);
        for permission in extras {
            builder = builder.add_extra_permission(permission)?;
        }

        let profile = builder.build()?;
        debug!(
            role = %profile.role(),
            permissions = profile.permissions().len(),
            "created profile with extra permissions"
        );
        Ok(profile)
    }

    /// Create a profile for the `admin` role.
    pub fn create_admin(&self, fields: &dyn ProfileFields) -> Result<Profile> {
        self.create_for_role(roles::ADMIN, fields)
    }

    /// Create a profile for the `editor` role.
    pub fn create_editor(&self, fields: &dyn ProfileFields) -> Result<Profile> {
        self.create_for_role(roles::EDITOR, fields)
    }

    /// Create a profile for the `viewer` role.
    pub fn create_viewer(&self, fields: &dyn ProfileFields) -> Result<Profile> {
        self.create_for_role(roles::VIEWER, fields)
    }

    /// Create a profile whose name and age come from the given generators,
    /// with the age drawn from the factory's configured range.
    pub fn create_random(
        &self,
        role: &str,
        names: &dyn NameGenerator,
        ages: &dyn AgeGenerator,
    ) -> Result<Profile> {
        let fields = GeneratedFields::new(names, ages, self.age_range);
        self.create_for_role(role, &fields)
    }

    /// Random profile for the `admin` role.
    pub fn create_random_admin(
        &self,
        names: &dyn NameGenerator,
        ages: &dyn AgeGenerator,
    ) -> Result<Profile> {
        self.create_random(roles::ADMIN, names, ages)
    }

    /// Random profile for the `editor` role.
    pub fn create_random_editor(
        &self,
        names: &dyn NameGenerator,
        ages: &dyn AgeGenerator,
    ) -> Result<Profile> {
        self.create_random(roles::EDITOR, names, ages)
    }

    /// Random profile for the `viewer` role.
    pub fn create_random_viewer(
        &self,
        names: &dyn NameGenerator,
        ages: &dyn AgeGenerator,
    ) -> Result<Profile> {
        self.create_random(roles::VIEWER, names, ages)
    }
}
