mod support;

use roster_core::prelude::*;

fn admin_permissions() -> PermissionSet {
    PermissionSet::from([Permission::Read, Permission::Write, Permission::Delete])
}

#[test]
fn registered_permissions_survive_later_registrations() {
    support::init_tracing();
    let registry = support::registry();

    let before: Vec<(RoleName, PermissionSet)> = registry
        .role_names()
        .into_iter()
        .map(|name| {
            let permissions = registry.permissions_for(name.as_str()).unwrap();
            (name, permissions)
        })
        .collect();

    registry.register("moderator", [Permission::Read, Permission::Write]).unwrap();
    registry.register("auditor", [Permission::Audit]).unwrap();

    for (name, permissions) in before {
        assert_eq!(registry.permissions_for(name.as_str()).unwrap(), permissions);
    }
    assert_eq!(
        registry.permissions_for("auditor").unwrap(),
        PermissionSet::from([Permission::Audit])
    );
}

#[test]
fn second_registration_always_rejected() {
    let registry = support::registry();
    registry.register("moderator", [Permission::Read, Permission::Write]).unwrap();

    // Same permissions, different permissions, no permissions: all duplicates.
    for permissions in [
        vec![Permission::Read, Permission::Write],
        vec![Permission::Delete],
        vec![],
    ] {
        let err = registry.register("moderator", permissions).unwrap_err();
        assert!(matches!(err, RosterError::DuplicateRole { ref role } if role.as_str() == "moderator"));
    }
    assert_eq!(
        registry.permissions_for("moderator").unwrap(),
        PermissionSet::from([Permission::Read, Permission::Write])
    );
}

#[test]
fn builder_profile_matches_registry() {
    let registry = support::registry();
    for role_name in registry.role_names() {
        let role = registry.resolve(role_name.as_str()).unwrap();
        let profile = ProfileBuilder::new()
            .with_name("Alice")
            .unwrap()
            .with_age(30)
            .unwrap()
            .with_role(role)
            .build()
            .unwrap();

        assert_eq!(
            profile.permissions(),
            &registry.permissions_for(role_name.as_str()).unwrap()
        );
    }
}

#[test]
fn build_without_role_names_role() {
    let err = ProfileBuilder::new()
        .with_name("Alice")
        .unwrap()
        .with_age(30)
        .unwrap()
        .build()
        .unwrap_err();

    assert!(matches!(err, RosterError::IncompleteProfile { .. }));
    assert_eq!(err.missing_fields(), &[ProfileField::Role]);
    assert!(err.to_string().contains("role"));
}

#[test]
fn extra_permission_before_role_is_state_error() {
    let err = ProfileBuilder::new()
        .add_extra_permission(Permission::Write)
        .unwrap_err();
    assert!(matches!(err, RosterError::BuilderState { .. }));
}

#[test]
fn factory_end_to_end() {
    support::init_tracing();
    let factory = ProfileFactory::new(support::registry());

    let admin = factory
        .create_for_role("admin", &ExplicitFields::new("Alice", 30))
        .unwrap();
    assert_eq!(admin.role().as_str(), "admin");
    assert_eq!(admin.permissions(), &admin_permissions());

    let err = factory
        .create_for_role("ghost-role", &ExplicitFields::new("Alice", 30))
        .unwrap_err();
    assert!(matches!(err, RosterError::UnknownRole { ref role } if role == "ghost-role"));
}

#[test]
fn newly_registered_role_flows_through_factory() {
    let registry = support::registry();
    registry.register("moderator", [Permission::Read, Permission::Write]).unwrap();
    let factory = ProfileFactory::new(registry);

    let profile = factory
        .create_for_role("moderator", &ExplicitFields::new("Mo", 27))
        .unwrap();
    assert_eq!(
        profile.permissions(),
        &PermissionSet::from([Permission::Read, Permission::Write])
    );
    assert!(!profile.has_permission(Permission::Delete));
}

#[test]
fn convenience_wrappers_follow_registry() {
    let factory = ProfileFactory::new(support::registry());
    let fields = ExplicitFields::new("Nia", 19);

    let editor = factory.create_editor(&fields).unwrap();
    let viewer = factory.create_viewer(&fields).unwrap();

    assert_eq!(
        editor.permissions(),
        &factory.registry().permissions_for(roles::EDITOR).unwrap()
    );
    assert_eq!(
        viewer.permissions(),
        &factory.registry().permissions_for(roles::VIEWER).unwrap()
    );
}

#[test]
fn fields_read_back_exactly() {
    let role = Role::new(
        RoleName::new("curator").unwrap(),
        PermissionSet::from([Permission::Share, Permission::Read, Permission::Audit]),
    );
    let profile = ProfileBuilder::new()
        .with_name("  Zoë Ångström ")
        .unwrap()
        .with_age(97)
        .unwrap()
        .with_role(role.clone())
        .build()
        .unwrap();

    assert_eq!(profile.name(), "  Zoë Ångström ");
    assert_eq!(profile.age(), 97);
    assert_eq!(profile.role(), role.name());
    assert_eq!(profile.permissions(), role.permissions());
}

#[test]
fn presenters_render_profiles() {
    let factory = ProfileFactory::new(support::registry());
    let profile = factory.create_admin(&ExplicitFields::new("Alice", 30)).unwrap();

    assert_eq!(
        TextPresenter.present(&profile).unwrap(),
        "Alice (30) role=admin permissions=[read, write, delete]"
    );

    let json = JsonPresenter::compact().present(&profile).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["role"], "admin");
    assert_eq!(value["name"], "Alice");
}
