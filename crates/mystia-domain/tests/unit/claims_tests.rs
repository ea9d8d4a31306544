//! Unit tests for session claims

use mystia_domain::constants::SESSION_TOKEN_TTL_SECS;
use mystia_domain::{Claims, Role};

#[test]
fn test_new_claims_last_one_day() {
    let claims = Claims::new("id-1", "Alice", Role::SuperAdmin);
    assert_eq!(claims.exp - claims.iat, SESSION_TOKEN_TTL_SECS);
    assert!(!claims.is_expired());
}

#[test]
fn test_negative_ttl_is_expired() {
    let claims = Claims::with_ttl("id-1", "Alice", Role::User, -3600);
    assert!(claims.is_expired());
}

#[test]
fn test_claims_json_field_names() {
    let claims = Claims {
        user_id: "id-1".to_string(),
        nickname: "Bob".to_string(),
        role: Role::Admin,
        iat: 10,
        exp: 20,
    };
    let value = serde_json::to_value(&claims).unwrap();
    assert_eq!(value["user_id"], "id-1");
    assert_eq!(value["nickname"], "Bob");
    assert_eq!(value["role"], "ADMIN");
    assert_eq!(value["iat"], 10);
    assert_eq!(value["exp"], 20);
}
