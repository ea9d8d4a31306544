//! Tests for channel listing, creation and joining

use crate::test_utils::{BrokenStore, FakeGrants, claims_for, services};
use mystia_application::{ChannelServiceImpl, ChannelServiceInterface};
use mystia_domain::{Error, Role};
use std::sync::Arc;

#[tokio::test]
async fn test_create_channel_requires_elevated_role() {
    let s = services();
    let err = s
        .channels
        .create_channel(&claims_for(Role::User), "general")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::PermissionDenied { .. }));
    assert!(
        s.channels
            .list_channels(&claims_for(Role::User))
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_create_and_list_channels() {
    let s = services();
    let created = s
        .channels
        .create_channel(&claims_for(Role::Admin), "general")
        .await
        .unwrap();
    assert_eq!(created.name, "general");

    let listed = s.channels.list_channels(&claims_for(Role::User)).await.unwrap();
    assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn test_create_channel_rejects_blank_name() {
    let s = services();
    let err = s
        .channels
        .create_channel(&claims_for(Role::SuperAdmin), "  ")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[tokio::test]
async fn test_join_channel_scopes_grant_to_caller_and_room() {
    let s = services();
    let caller = claims_for(Role::User);
    let grant = s.channels.join_channel(&caller, "general").await.unwrap();

    assert_eq!(grant.room, "general");
    assert_eq!(grant.identity, caller.user_id);
    assert_eq!(grant.url, "http://media.test:7880");
}

#[tokio::test]
async fn test_join_channel_rejects_empty_room() {
    let s = services();
    let err = s
        .channels
        .join_channel(&claims_for(Role::User), "")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[tokio::test]
async fn test_storage_failure_is_internal() {
    let channels = ChannelServiceImpl::new(Arc::new(BrokenStore), Arc::new(FakeGrants));
    let err = channels
        .create_channel(&claims_for(Role::Admin), "general")
        .await
        .unwrap_err();
    assert_eq!(err.public_message(), "failed to create channel");
}
