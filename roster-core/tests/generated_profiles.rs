mod support;

use mockall::mock;
use mockall::predicate::eq;
use roster_core::prelude::*;

mock! {
    pub Names {}
    impl NameGenerator for Names {
        fn generate_name(&self) -> String;
    }
}

mock! {
    pub Ages {}
    impl AgeGenerator for Ages {
        fn generate_age(&self, min: u32, max: u32) -> u32;
    }
}

#[test]
fn generators_receive_configured_range() {
    support::init_tracing();
    let factory = ProfileFactory::new(support::registry())
        .with_age_range(AgeRange::new(21, 40).unwrap());

    let mut names = MockNames::new();
    names
        .expect_generate_name()
        .times(1)
        .returning(|| "Priya Rossi".to_string());

    let mut ages = MockAges::new();
    ages.expect_generate_age()
        .with(eq(21), eq(40))
        .times(1)
        .returning(|_, _| 33);

    let profile = factory.create_random_viewer(&names, &ages).unwrap();
    assert_eq!(profile.name(), "Priya Rossi");
    assert_eq!(profile.age(), 33);
    assert!(profile.has_role(roles::VIEWER));
}

#[test]
fn generated_values_are_not_rescued() {
    let factory = ProfileFactory::new(support::registry());

    let mut names = MockNames::new();
    names
        .expect_generate_name()
        .times(1)
        .returning(String::new);

    let mut ages = MockAges::new();
    ages.expect_generate_age().returning(|_, _| 30);

    // No retry: the builder's rejection reaches the caller unchanged.
    let err = factory.create_random_admin(&names, &ages).unwrap_err();
    assert!(matches!(err, RosterError::InvalidName(_)));
}

#[test]
fn unknown_role_skips_generation() {
    let factory = ProfileFactory::new(support::registry());

    let mut names = MockNames::new();
    names.expect_generate_name().times(0);
    let mut ages = MockAges::new();
    ages.expect_generate_age().times(0);

    let err = factory
        .create_random("ghost-role", &names, &ages)
        .unwrap_err();
    assert!(matches!(err, RosterError::UnknownRole { .. }));
}

#[test]
fn random_data_generator_produces_valid_profiles() {
    let factory = ProfileFactory::new(support::registry());
    let data = RandomProfileData::seeded(2024);

    for _ in 0..100 {
        let profile = factory.create_random_editor(&data, &data).unwrap();
        let range = factory.age_range();
        assert!((range.min..=range.max).contains(&profile.age()));
        assert!(!profile.name().trim().is_empty());
        assert_eq!(
            profile.permissions(),
            &PermissionSet::from([Permission::Read, Permission::Write])
        );
    }
}

#[test]
fn generated_fields_work_with_explicit_role() {
    let data = RandomProfileData::seeded(5);
    let fields = GeneratedFields::new(&data, &data, AgeRange::new(60, 70).unwrap());
    let role = Role::new(
        RoleName::new("retiree").unwrap(),
        PermissionSet::from([Permission::Read]),
    );

    let profile = ProfileFactory::create_for_resolved_role(role, &fields).unwrap();
    assert!((60..=70).contains(&profile.age()));
}
