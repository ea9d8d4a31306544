//! Account Service Use Case
//!
//! Registration and login. Composes the credential hasher, the role policy
//! and the token codec into end-to-end outcomes.

use super::internal;
use crate::domain_services::account::{AccountServiceInterface, LoginOutcome, RegisterOutcome};
use crate::policy::role_for_new_account;
use async_trait::async_trait;
use mystia_domain::constants::{
    INVALID_CREDENTIALS, REGISTER_BOOTSTRAP_MESSAGE, REGISTER_MESSAGE, SESSION_TOKEN_TTL_SECS,
};
use mystia_domain::entities::Account;
use mystia_domain::error::{Error, Result};
use mystia_domain::ports::{PasswordHasher, TokenCodec};
use mystia_domain::repositories::AccountRepository;
use mystia_domain::value_objects::{Claims, Role};
use std::sync::{Arc, OnceLock};
use tracing::{info, warn};

/// Plaintext behind the decoy hash used for unknown handles
const DECOY_PASSWORD: &str = "mystia-decoy-password";

/// Account service implementation
pub struct AccountServiceImpl {
    accounts: Arc<dyn AccountRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenCodec>,
    session_ttl_secs: i64,
    decoy_hash: OnceLock<String>,
}

impl AccountServiceImpl {
    /// Create new account service with injected dependencies
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenCodec>,
    ) -> Self {
        Self {
            accounts,
            hasher,
            tokens,
            session_ttl_secs: SESSION_TOKEN_TTL_SECS,
            decoy_hash: OnceLock::new(),
        }
    }

    /// Override the lifetime of issued session tokens
    pub fn with_session_ttl(mut self, ttl_secs: i64) -> Self {
        self.session_ttl_secs = ttl_secs;
        self
    }

    /// Spend roughly the same work as a real verification
    ///
    /// Keeps "unknown handle" from answering measurably faster than "wrong
    /// password". Only a successful decoy hash is cached; a failed one is
    /// retried on the next unknown handle.
    fn verify_decoy(&self, password: &str) {
        let decoy = match self.decoy_hash.get() {
            Some(hash) => hash,
            None => match self.hasher.hash(DECOY_PASSWORD) {
                Ok(hash) => self.decoy_hash.get_or_init(|| hash),
                Err(err) => {
                    warn!(error = %err, "failed to prepare decoy hash");
                    return;
                }
            },
        };
        let _ = self.hasher.verify(decoy, password);
    }
}

#[async_trait]
impl AccountServiceInterface for AccountServiceImpl {
    async fn register(
        &self,
        username: &str,
        password: &str,
        nickname: &str,
    ) -> Result<RegisterOutcome> {
        if username.is_empty() || password.is_empty() || nickname.is_empty() {
            return Err(Error::invalid_argument("missing fields"));
        }

        let password_hash = self
            .hasher
            .hash(password)
            .map_err(internal("failed to hash password"))?;

        // Not atomic with the insert below: concurrent first registrations
        // can both observe zero.
        let existing = self
            .accounts
            .count_accounts()
            .await
            .map_err(internal("failed to check user count"))?;
        let role = role_for_new_account(existing);

        let account = Account::new(username, password_hash, nickname, role);
        let id = account.id.clone();
        match self.accounts.create_account(account).await {
            Ok(()) => {}
            Err(Error::AlreadyExists { .. }) => {
                return Err(Error::already_exists("username already taken"));
            }
            Err(err) => return Err(internal("failed to create user")(err)),
        }

        info!(user_id = %id, username, %role, "account registered");

        let message = if role == Role::SuperAdmin {
            REGISTER_BOOTSTRAP_MESSAGE
        } else {
            REGISTER_MESSAGE
        };
        Ok(RegisterOutcome {
            role,
            message: message.to_string(),
        })
    }

    async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome> {
        let account = self
            .accounts
            .get_account_by_handle(username)
            .await
            .map_err(internal("database error"))?;

        let Some(account) = account else {
            self.verify_decoy(password);
            return Err(Error::authentication(INVALID_CREDENTIALS));
        };

        let matches = self
            .hasher
            .verify(&account.password_hash, password)
            .map_err(internal("failed to verify password"))?;
        if !matches {
            return Err(Error::authentication(INVALID_CREDENTIALS));
        }

        let claims = Claims::with_ttl(
            &account.id,
            &account.nickname,
            account.role,
            self.session_ttl_secs,
        );
        let token = self
            .tokens
            .encode(&claims)
            .map_err(internal("failed to generate token"))?;

        Ok(LoginOutcome {
            token,
            account: account.view(),
        })
    }
}
