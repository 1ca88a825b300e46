//! Frequently used model types.

pub use crate::error::ModelError;
pub use crate::permission::{Permission, PermissionSet};
pub use crate::role::{Role, RoleName};
