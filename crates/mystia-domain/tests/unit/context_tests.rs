//! Unit tests for the per-call context

use mystia_domain::{CallContext, Claims, Error, Role};

#[test]
fn test_anonymous_context_has_no_caller() {
    let ctx = CallContext::anonymous("/voice.AuthService/Login");
    assert_eq!(ctx.method(), "/voice.AuthService/Login");
    assert!(ctx.claims().is_none());
    assert!(matches!(ctx.caller(), Err(Error::Authentication { .. })));
}

#[test]
fn test_authenticated_context_exposes_claims() {
    let claims = Claims::new("id-7", "Carol", Role::User);
    let ctx = CallContext::authenticated("/voice.ChannelService/ListChannels", claims.clone());
    assert_eq!(ctx.caller().unwrap(), &claims);
}

#[test]
fn test_request_ids_differ_per_call() {
    let a = CallContext::anonymous("/m");
    let b = CallContext::anonymous("/m");
    assert_ne!(a.request_id(), b.request_id());
}
