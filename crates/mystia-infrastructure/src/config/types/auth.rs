//! Authentication configuration types

use crate::constants::*;
use serde::{Deserialize, Serialize};

/// JWT configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// JWT secret key
    ///
    /// **REQUIRED**. Configure via `MYSTIA__AUTH__JWT__SECRET` (or the
    /// legacy `JWT_SECRET`) or `auth.jwt.secret` in the config file.
    #[serde(deserialize_with = "super::scalar::string_from_scalar")]
    pub secret: String,

    /// Session token lifetime in seconds
    pub expiration_secs: i64,

    /// Clock skew tolerance when checking expiry, in seconds
    pub leeway_secs: u64,
}

/// Returns default JWT configuration with:
/// - Empty secret (MUST be configured)
/// - 24 hour expiration and no leeway
impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            expiration_secs: JWT_DEFAULT_EXPIRATION_SECS,
            leeway_secs: 0,
        }
    }
}

impl JwtConfig {
    /// Creates a new configuration with the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiration_secs", &self.expiration_secs)
            .field("leeway_secs", &self.leeway_secs)
            .finish()
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// JWT configuration
    #[serde(default)]
    pub jwt: JwtConfig,

    /// bcrypt cost factor
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            bcrypt_cost: BCRYPT_DEFAULT_COST,
        }
    }
}
