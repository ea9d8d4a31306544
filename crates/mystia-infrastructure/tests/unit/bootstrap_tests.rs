//! Tests for the composition root

use mystia_application::domain_services::{
    AccountServiceInterface, AdminServiceInterface, ChannelServiceInterface,
};
use mystia_domain::Role;
use mystia_domain::ports::TokenCodec;
use mystia_infrastructure::config::{AuthConfig, ConfigBuilder, JwtConfig};
use mystia_infrastructure::di::init_app;

const SECRET: &str = "bootstrap-test-secret-0123456789abcdef";

fn test_auth() -> AuthConfig {
    AuthConfig {
        jwt: JwtConfig::new(SECRET),
        bcrypt_cost: 4,
    }
}

#[test]
fn test_init_requires_jwt_secret() {
    let config = ConfigBuilder::new().build();
    assert!(init_app(config).is_err());
}

#[tokio::test]
async fn test_wired_services_share_one_store_and_codec() {
    let context = init_app(ConfigBuilder::new().with_auth(test_auth()).build()).unwrap();

    let outcome = context
        .accounts()
        .register("alice", "password123", "Alice")
        .await
        .unwrap();
    assert_eq!(outcome.role, Role::SuperAdmin);

    let login = context.accounts().login("alice", "password123").await.unwrap();
    let claims = context.token_codec().decode(&login.token).unwrap();
    assert_eq!(claims.user_id, login.account.id);
    assert_eq!(claims.role, Role::SuperAdmin);

    let users = context.admin().list_users(&claims).await.unwrap();
    assert_eq!(users.len(), 1);

    let grant = context
        .channels()
        .join_channel(&claims, "general")
        .await
        .unwrap();
    assert_eq!(grant.url, context.config.media.url);
    assert_eq!(grant.room, "general");
}

#[tokio::test]
async fn test_session_lifetime_follows_config() {
    let mut auth = test_auth();
    auth.jwt.expiration_secs = 600;
    let context = init_app(ConfigBuilder::new().with_auth(auth).build()).unwrap();

    context
        .accounts()
        .register("alice", "password123", "Alice")
        .await
        .unwrap();
    let login = context.accounts().login("alice", "password123").await.unwrap();
    let claims = context.token_codec().decode(&login.token).unwrap();

    assert_eq!(claims.exp - claims.iat, 600);
}
