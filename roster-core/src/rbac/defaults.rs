use roster_model::{Permission, PermissionSet, Role, RoleName};
use tracing::error;

/// Well-known role names
pub mod roles {
    /// Full access.
    pub const ADMIN: &str = "admin";
    /// Read and write.
    pub const EDITOR: &str = "editor";
    /// Read only.
    pub const VIEWER: &str = "viewer";
}

/// Roles every registry is seeded with.
pub fn default_roles() -> Vec<Role> {
    let seeds: [(&str, &[Permission]); 3] = [
        (
            roles::ADMIN,
            &[Permission::Read, Permission::Write, Permission::Delete],
        ),
        (roles::EDITOR, &[Permission::Read, Permission::Write]),
        (roles::VIEWER, &[Permission::Read]),
    ];

    let mut defaults = Vec::with_capacity(seeds.len());
    for (name, permissions) in seeds {
        match RoleName::new(name) {
            Ok(name) => defaults.push(Role::new(
                name,
                permissions.iter().copied().collect::<PermissionSet>(),
            )),
            Err(err) => error!(%err, "default role has an invalid name"),
        }
    }
    defaults
}
