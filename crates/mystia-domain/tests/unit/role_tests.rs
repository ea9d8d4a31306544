//! Unit tests for account roles

use mystia_domain::Role;

#[test]
fn test_role_wire_names() {
    assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"USER\"");
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
    assert_eq!(
        serde_json::to_string(&Role::SuperAdmin).unwrap(),
        "\"SUPER_ADMIN\""
    );
}

#[test]
fn test_role_parse() {
    assert_eq!("SUPER_ADMIN".parse::<Role>().unwrap(), Role::SuperAdmin);
    assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
    assert_eq!("USER".parse::<Role>().unwrap(), Role::User);
    assert!("admin".parse::<Role>().is_err());
    assert!("ROOT".parse::<Role>().is_err());
}

#[test]
fn test_role_elevation() {
    assert!(!Role::User.is_elevated());
    assert!(Role::Admin.is_elevated());
    assert!(Role::SuperAdmin.is_elevated());
}

#[test]
fn test_role_display_matches_wire_name() {
    for role in [Role::User, Role::Admin, Role::SuperAdmin] {
        assert_eq!(role.to_string(), role.as_str());
    }
}
