//! Tests for registration and login

use crate::test_utils::{BrokenStore, FakeHasher, FakeTokens, services};
use mystia_application::{AccountServiceImpl, AccountServiceInterface};
use mystia_domain::constants::{REGISTER_BOOTSTRAP_MESSAGE, REGISTER_MESSAGE};
use mystia_domain::ports::TokenCodec;
use mystia_domain::repositories::AccountRepository;
use mystia_domain::{Error, Role};
use std::sync::Arc;
use std::sync::atomic::Ordering;

#[tokio::test]
async fn test_first_account_becomes_super_admin() {
    let s = services();

    let alice = s.accounts.register("alice", "pw1", "Alice").await.unwrap();
    assert_eq!(alice.role, Role::SuperAdmin);
    assert_eq!(alice.message, REGISTER_BOOTSTRAP_MESSAGE);

    let bob = s.accounts.register("bob", "pw2", "Bob").await.unwrap();
    assert_eq!(bob.role, Role::User);
    assert_eq!(bob.message, REGISTER_MESSAGE);
}

#[tokio::test]
async fn test_register_rejects_empty_fields() {
    let s = services();
    for (u, p, n) in [("", "pw", "N"), ("u", "", "N"), ("u", "pw", "")] {
        let err = s.accounts.register(u, p, n).await.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }
    assert_eq!(s.store.count_accounts().await.unwrap(), 0);
}

#[tokio::test]
async fn test_register_duplicate_handle_is_conflict() {
    let s = services();
    s.accounts.register("alice", "pw1", "Alice").await.unwrap();

    let err = s
        .accounts
        .register("alice", "other", "Impostor")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::AlreadyExists { .. }));

    let stored = s.store.get_account_by_handle("alice").await.unwrap().unwrap();
    assert_eq!(stored.nickname, "Alice");
    assert_eq!(stored.role, Role::SuperAdmin);
}

#[tokio::test]
async fn test_register_stores_hash_not_plaintext() {
    let s = services();
    s.accounts.register("alice", "pw1", "Alice").await.unwrap();
    let stored = s.store.get_account_by_handle("alice").await.unwrap().unwrap();
    assert_ne!(stored.password_hash, "pw1");
}

#[tokio::test]
async fn test_login_issues_token_with_identity() {
    let s = services();
    s.accounts.register("alice", "pw1", "Alice").await.unwrap();
    s.accounts.register("bob", "pw2", "Bob").await.unwrap();

    let outcome = s.accounts.login("bob", "pw2").await.unwrap();
    assert_eq!(outcome.account.username, "bob");
    assert_eq!(outcome.account.nickname, "Bob");
    assert_eq!(outcome.account.role, Role::User);

    let claims = FakeTokens.decode(&outcome.token).unwrap();
    assert_eq!(claims.user_id, outcome.account.id);
    assert_eq!(claims.nickname, "Bob");
    assert_eq!(claims.role, Role::User);
    assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let s = services();
    s.accounts.register("bob", "pw2", "Bob").await.unwrap();

    let wrong_password = s.accounts.login("bob", "wrong").await.unwrap_err();
    let unknown_user = s.accounts.login("nobody", "pw2").await.unwrap_err();

    assert!(matches!(wrong_password, Error::Authentication { .. }));
    assert!(matches!(unknown_user, Error::Authentication { .. }));
    assert_eq!(wrong_password.to_string(), unknown_user.to_string());
}

#[tokio::test]
async fn test_unknown_handle_still_verifies_a_password() {
    let s = services();
    let _ = s.accounts.login("nobody", "pw").await;
    assert_eq!(s.hasher.verifications.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_decoy_hash_is_retried_after_failure() {
    let s = services();
    s.hasher.failing_hashes.store(1, Ordering::SeqCst);

    let err = s.accounts.login("nobody", "pw").await.unwrap_err();
    assert!(matches!(err, Error::Authentication { .. }));
    assert_eq!(s.hasher.verifications.load(Ordering::SeqCst), 0);

    let err = s.accounts.login("nobody", "pw").await.unwrap_err();
    assert!(matches!(err, Error::Authentication { .. }));
    assert_eq!(s.hasher.verifications.load(Ordering::SeqCst), 1);

    let _ = s.accounts.login("nobody", "pw").await;
    assert_eq!(s.hasher.verifications.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_storage_failure_is_internal() {
    let service = AccountServiceImpl::new(
        Arc::new(BrokenStore),
        Arc::new(FakeHasher::default()),
        Arc::new(FakeTokens),
    );

    let err = service.register("alice", "pw1", "Alice").await.unwrap_err();
    assert!(matches!(err, Error::Internal { .. }));
    assert_eq!(err.public_message(), "failed to check user count");

    let err = service.login("alice", "pw1").await.unwrap_err();
    assert!(matches!(err, Error::Internal { .. }));
    assert_eq!(err.public_message(), "database error");
}

#[tokio::test]
async fn test_session_ttl_override() {
    let s = services();
    let accounts = AccountServiceImpl::new(
        s.store.clone(),
        s.hasher.clone(),
        Arc::new(FakeTokens),
    )
    .with_session_ttl(60);
    accounts.register("alice", "pw1", "Alice").await.unwrap();

    let outcome = accounts.login("alice", "pw1").await.unwrap();
    let claims = FakeTokens.decode(&outcome.token).unwrap();
    assert_eq!(claims.exp - claims.iat, 60);
}
