//! Core library for roster: validated user profiles carrying a role and the
//! permissions that role granted at creation time.
//!
//! - [`rbac::RoleRegistry`] owns the role → permission mapping
//! - [`profiles::ProfileBuilder`] assembles a [`profiles::Profile`] and
//!   refuses to yield an incomplete one
//! - [`profiles::ProfileFactory`] ties the two together, optionally with
//!   generated names and ages from [`generation`]
//!
//! ```
//! use std::sync::Arc;
//!
//! use roster_core::prelude::*;
//!
//! let registry = Arc::new(RoleRegistry::new());
//! registry.register("moderator", [Permission::Read, Permission::Write])?;
//!
//! let factory = ProfileFactory::new(registry);
//! let profile =
//!     factory.create_for_role("moderator", &ExplicitFields::new("Alice", 30))?;
//!
//! assert_eq!(profile.permissions().len(), 2);
//! # Ok::<(), RosterError>(())
//! ```

pub mod config;
pub mod error;
pub mod generation;
pub mod presentation;
pub mod profiles;
pub mod rbac;

pub use error::{ProfileField, Result, RosterError};

/// Frequently used types for building and presenting profiles.
pub mod prelude {
    pub use crate::config::{AgeRange, RosterConfig};
    pub use crate::error::{ProfileField, RosterError};
    pub use crate::generation::{AgeGenerator, NameGenerator, RandomProfileData};
    pub use crate::presentation::{JsonPresenter, ProfilePresenter, TextPresenter};
    pub use crate::profiles::{
        ExplicitFields, GeneratedFields, Profile, ProfileBuilder, ProfileFactory,
        ProfileFields,
    };
    pub use crate::rbac::{RoleRegistry, roles};
    pub use roster_model::prelude::*;
}
