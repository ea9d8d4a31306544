//! Tests for the auth interceptor

use mystia_domain::ports::TokenCodec;
use mystia_domain::value_objects::{Claims, Role};
use mystia_domain::{Error, StatusCode};
use mystia_infrastructure::crypto::JwtTokenCodec;
use mystia_server::constants::*;
use mystia_server::interceptor::{AuthInterceptor, is_public_method};
use std::sync::Arc;

const SECRET: &str = "interceptor-test-secret-0123456789abcd";

fn setup() -> (AuthInterceptor, Arc<JwtTokenCodec>) {
    let codec = Arc::new(JwtTokenCodec::from_secret(SECRET).unwrap());
    (AuthInterceptor::new(codec.clone()), codec)
}

#[test]
fn test_allow_list_is_exactly_register_and_login() {
    assert!(is_public_method(METHOD_REGISTER));
    assert!(is_public_method(METHOD_LOGIN));
    for method in [
        METHOD_LIST_CHANNELS,
        METHOD_JOIN_CHANNEL,
        METHOD_CREATE_CHANNEL,
        METHOD_SET_ADMIN_STATUS,
        METHOD_LIST_USERS,
        "/voice.AuthService/login",
        "/voice.AuthService/Register/",
        "voice.AuthService/Login",
    ] {
        assert!(!is_public_method(method), "{method} must be protected");
    }
}

#[test]
fn test_public_methods_pass_without_credential() {
    let (interceptor, _) = setup();
    let ctx = interceptor.intercept(METHOD_LOGIN, None).unwrap();
    assert_eq!(ctx.method(), METHOD_LOGIN);
    assert!(ctx.claims().is_none());
}

#[test]
fn test_missing_or_empty_credential_is_rejected() {
    let (interceptor, _) = setup();
    for header in [None, Some("")] {
        let err = interceptor
            .intercept(METHOD_LIST_CHANNELS, header)
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::Unauthenticated);
    }
}

#[test]
fn test_valid_token_places_claims_in_context() {
    let (interceptor, codec) = setup();
    let claims = Claims::new("u-1", "Alice", Role::Admin);
    let token = codec.encode(&claims).unwrap();

    let ctx = interceptor
        .intercept(METHOD_LIST_USERS, Some(&format!("Bearer {token}")))
        .unwrap();

    assert_eq!(ctx.caller().unwrap(), &claims);
}

#[test]
fn test_token_without_bearer_prefix_is_accepted() {
    let (interceptor, codec) = setup();
    let token = codec
        .encode(&Claims::new("u-1", "Alice", Role::User))
        .unwrap();

    assert!(interceptor.intercept(METHOD_LIST_CHANNELS, Some(&token)).is_ok());
}

#[test]
fn test_every_decode_failure_looks_the_same() {
    let (interceptor, codec) = setup();
    let expired = codec
        .encode(&Claims::with_ttl("u-1", "Alice", Role::User, -60))
        .unwrap();
    let foreign = JwtTokenCodec::from_secret("some-other-secret-0123456789abcdefgh")
        .unwrap()
        .encode(&Claims::new("u-1", "Alice", Role::User))
        .unwrap();

    let messages: Vec<String> = [expired.as_str(), foreign.as_str(), "garbage"]
        .into_iter()
        .map(|token| {
            let err = interceptor
                .intercept(METHOD_JOIN_CHANNEL, Some(&format!("Bearer {token}")))
                .unwrap_err();
            assert!(matches!(err, Error::Authentication { .. }));
            err.public_message().to_string()
        })
        .collect();

    assert!(messages.iter().all(|m| m == &messages[0]));
}

#[test]
fn test_unknown_method_still_requires_credential() {
    let (interceptor, _) = setup();
    let err = interceptor
        .intercept("/voice.AuthService/Logout", None)
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::Unauthenticated);
}
