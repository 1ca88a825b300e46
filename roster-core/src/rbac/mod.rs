//! Role registry
//!
//! The registry is the single source of truth for which permissions a role
//! grants. Every registry starts out seeded with the default roles below;
//! callers may add roles with [`RoleRegistry::register`] but can never remove
//! or redefine one, so a profile's recorded permission snapshot always
//! matches what its role granted when the profile was built.
//!
//! ## Example
//!
//! ```
//! use roster_core::rbac::{RoleRegistry, roles};
//! use roster_model::Permission;
//!
//! let registry = RoleRegistry::new();
//! let admin = registry.permissions_for(roles::ADMIN).unwrap();
//! assert!(admin.contains(Permission::Delete));
//!
//! registry
//!     .register("moderator", [Permission::Read, Permission::Write])
//!     .unwrap();
//! assert!(registry.contains("moderator"));
//! ```

mod defaults;
mod registry;

pub use defaults::{default_roles, roles};
pub use registry::RoleRegistry;
