//! Application bootstrap
//!
//! ```text
//! AppConfig → adapters (store, bcrypt, JWT, grants) → services → AppContext
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(config)?;
//! let outcome = context.accounts().login("alice", "password123").await?;
//! ```

use crate::config::AppConfig;
use crate::crypto::{BcryptPasswordHasher, JwtTokenCodec};
use crate::media::MediaGrantIssuer;
use crate::storage::InMemoryStore;
use mystia_application::domain_services::{
    AccountServiceInterface, AdminServiceInterface, ChannelServiceInterface,
};
use mystia_application::use_cases::{AccountServiceImpl, AdminServiceImpl, ChannelServiceImpl};
use mystia_domain::error::Result;
use mystia_domain::ports::{GrantIssuer, PasswordHasher, TokenCodec};
use mystia_domain::repositories::{AccountRepository, ChannelRepository};
use std::sync::Arc;
use tracing::info;

/// Application context holding the wired services
///
/// Built once at startup and shared read-only by every request handler.
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    account_service: Arc<dyn AccountServiceInterface>,
    admin_service: Arc<dyn AdminServiceInterface>,
    channel_service: Arc<dyn ChannelServiceInterface>,
    token_codec: Arc<dyn TokenCodec>,
}

impl AppContext {
    /// Get the registration and login service
    pub fn accounts(&self) -> Arc<dyn AccountServiceInterface> {
        self.account_service.clone()
    }

    /// Get the account administration service
    pub fn admin(&self) -> Arc<dyn AdminServiceInterface> {
        self.admin_service.clone()
    }

    /// Get the channel service
    pub fn channels(&self) -> Arc<dyn ChannelServiceInterface> {
        self.channel_service.clone()
    }

    /// Get the session token codec, shared with the auth interceptor
    pub fn token_codec(&self) -> Arc<dyn TokenCodec> {
        self.token_codec.clone()
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Initialize the application context with the in-memory store
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    let store = Arc::new(InMemoryStore::new());
    init_app_with_storage(config, store.clone(), store)
}

/// Initialize the application context over caller-provided storage
pub fn init_app_with_storage(
    config: AppConfig,
    accounts: Arc<dyn AccountRepository>,
    channels: Arc<dyn ChannelRepository>,
) -> Result<AppContext> {
    info!("Initializing application context");

    let hasher: Arc<dyn PasswordHasher> =
        Arc::new(BcryptPasswordHasher::new(config.auth.bcrypt_cost));
    let token_codec: Arc<dyn TokenCodec> = Arc::new(JwtTokenCodec::new(&config.auth.jwt)?);
    let grant_issuer: Arc<dyn GrantIssuer> = Arc::new(MediaGrantIssuer::new(&config.media)?);

    let account_service: Arc<dyn AccountServiceInterface> = Arc::new(
        AccountServiceImpl::new(accounts.clone(), hasher, token_codec.clone())
            .with_session_ttl(config.auth.jwt.expiration_secs),
    );
    let admin_service: Arc<dyn AdminServiceInterface> = Arc::new(AdminServiceImpl::new(accounts));
    let channel_service: Arc<dyn ChannelServiceInterface> =
        Arc::new(ChannelServiceImpl::new(channels, grant_issuer));

    info!(media_url = %config.media.url, "Application context ready");

    Ok(AppContext {
        config: Arc::new(config),
        account_service,
        admin_service,
        channel_service,
        token_codec,
    })
}
