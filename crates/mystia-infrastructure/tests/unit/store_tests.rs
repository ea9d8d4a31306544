//! Tests for the in-memory store

use mystia_domain::entities::{Account, Channel};
use mystia_domain::repositories::{AccountRepository, ChannelRepository};
use mystia_domain::{Error, Role};
use mystia_infrastructure::storage::InMemoryStore;
use std::sync::Arc;

fn account(username: &str) -> Account {
    Account::new(username, "hash", username.to_uppercase(), Role::User)
}

#[tokio::test]
async fn test_accounts_are_found_by_handle_and_id() {
    let store = InMemoryStore::new();
    let alice = account("alice");
    store.create_account(alice.clone()).await.unwrap();

    let by_handle = store.get_account_by_handle("alice").await.unwrap();
    let by_id = store.get_account_by_id(&alice.id).await.unwrap();

    assert_eq!(by_handle, Some(alice.clone()));
    assert_eq!(by_id, Some(alice));
    assert_eq!(store.get_account_by_handle("nobody").await.unwrap(), None);
    assert_eq!(store.count_accounts().await.unwrap(), 1);
}

#[tokio::test]
async fn test_duplicate_handle_leaves_original_untouched() {
    let store = InMemoryStore::new();
    let original = account("alice");
    store.create_account(original.clone()).await.unwrap();

    let err = store.create_account(account("alice")).await.unwrap_err();
    assert!(matches!(err, Error::AlreadyExists { .. }));
    assert_eq!(err.public_message(), "username already taken");

    assert_eq!(store.count_accounts().await.unwrap(), 1);
    assert_eq!(
        store.get_account_by_handle("alice").await.unwrap(),
        Some(original)
    );
}

#[tokio::test]
async fn test_concurrent_registration_of_one_handle_admits_one() {
    let store = Arc::new(InMemoryStore::new());

    let mut handles = Vec::new();
    for _ in 0..16 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.create_account(account("racer")).await.is_ok()
        }));
    }

    let mut winners = 0;
    for handle in handles {
        if handle.await.unwrap() {
            winners += 1;
        }
    }
    assert_eq!(winners, 1);
    assert_eq!(store.count_accounts().await.unwrap(), 1);
}

#[tokio::test]
async fn test_lists_keep_creation_order() {
    let store = InMemoryStore::new();
    for name in ["carol", "alice", "bob"] {
        store.create_account(account(name)).await.unwrap();
    }
    for name in ["zeta", "alpha"] {
        store.create_channel(Channel::new(name)).await.unwrap();
    }

    let handles: Vec<String> = store
        .list_accounts()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.username)
        .collect();
    assert_eq!(handles, ["carol", "alice", "bob"]);

    let channels: Vec<String> = store
        .list_channels()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(channels, ["zeta", "alpha"]);
}

#[tokio::test]
async fn test_role_update_changes_only_the_role() {
    let store = InMemoryStore::new();
    let bob = account("bob");
    store.create_account(bob.clone()).await.unwrap();

    store.update_account_role(&bob.id, Role::Admin).await.unwrap();

    let updated = store.get_account_by_id(&bob.id).await.unwrap().unwrap();
    assert_eq!(updated.role, Role::Admin);
    assert_eq!(updated.username, bob.username);
    assert_eq!(updated.password_hash, bob.password_hash);
}

#[tokio::test]
async fn test_role_update_of_unknown_id_is_not_found() {
    let store = InMemoryStore::new();
    let err = store
        .update_account_role("missing", Role::Admin)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}
