//! Account and session service interface

use async_trait::async_trait;
use mystia_domain::entities::AccountView;
use mystia_domain::error::Result;
use mystia_domain::value_objects::Role;

/// Result of a successful registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterOutcome {
    /// Role the new account received
    pub role: Role,
    /// Human-readable message, which differs for the bootstrap account
    pub message: String,
}

/// Result of a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    /// Signed session token
    pub token: String,
    /// Public record of the account
    pub account: AccountView,
}

/// Registration and login
#[async_trait]
pub trait AccountServiceInterface: Send + Sync {
    /// Create an account; the first one ever becomes `SUPER_ADMIN`
    async fn register(&self, username: &str, password: &str, nickname: &str)
    -> Result<RegisterOutcome>;

    /// Check credentials and issue a session token
    async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome>;
}
