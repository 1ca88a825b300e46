//! Core data model definitions shared across roster crates.
//!
//! These types carry no registry or builder behaviour; they only validate
//! their own shape on construction so that downstream crates can rely on a
//! [`RoleName`] being well formed and a [`Permission`] being recognised.

pub mod error;
pub mod permission;
pub mod prelude;
pub mod role;

pub use error::{ModelError, Result as ModelResult};
pub use permission::{Permission, PermissionSet};
pub use role::{Role, RoleName};
