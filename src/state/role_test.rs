use super::*;

#[test]
fn role_round_trips_through_wire_strings() {
    for role in [Role::Admin, Role::Manager, Role::Carer, Role::Family] {
        assert_eq!(role.as_str().parse::<Role>(), Ok(role));
    }
}

#[test]
fn unknown_role_string_is_rejected() {
    assert_eq!(
        "superuser".parse::<Role>(),
        Err(UnknownRole("superuser".to_owned()))
    );
    assert!("Manager".parse::<Role>().is_err());
    assert!("".parse::<Role>().is_err());
}

#[test]
fn dashboard_path_uses_wire_string() {
    assert_eq!(Role::Manager.dashboard_path(), "/manager/dashboard");
    assert_eq!(Role::Family.dashboard_path(), "/family/dashboard");
}

#[test]
fn empty_allowed_set_permits_any_role() {
    assert!(role_permitted(Role::Carer, &[]));
    assert!(role_permitted(Role::Admin, &[]));
}

#[test]
fn restricted_set_permits_only_listed_roles() {
    assert!(role_permitted(Role::Manager, MANAGER_ONLY));
    assert!(!role_permitted(Role::Carer, MANAGER_ONLY));
    assert!(role_permitted(Role::Family, &[Role::Manager, Role::Family]));
}

#[test]
fn required_roles_label_joins_with_or() {
    assert_eq!(required_roles_label(MANAGER_ONLY), "manager");
    assert_eq!(
        required_roles_label(&[Role::Manager, Role::Family]),
        "manager or family"
    );
}
