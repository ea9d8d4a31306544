//! Session token claims

use super::Role;
use crate::constants::SESSION_TOKEN_TTL_SECS;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Decoded contents of a verified session token
///
/// Claims are never stored. They are rebuilt from the presented token on
/// every call and are only meaningful until `exp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Account identity
    pub user_id: String,
    /// Display name at the time the token was issued
    pub nickname: String,
    /// Role at the time the token was issued
    pub role: Role,
    /// Issued at (seconds since the Unix epoch)
    pub iat: i64,
    /// Expires at (seconds since the Unix epoch)
    pub exp: i64,
}

impl Claims {
    /// Claims for a session starting now and lasting the standard 24 hours
    pub fn new(user_id: impl Into<String>, nickname: impl Into<String>, role: Role) -> Self {
        Self::with_ttl(user_id, nickname, role, SESSION_TOKEN_TTL_SECS)
    }

    /// Claims starting now with an explicit lifetime in seconds
    ///
    /// A negative lifetime produces claims that are already expired.
    pub fn with_ttl(
        user_id: impl Into<String>,
        nickname: impl Into<String>,
        role: Role,
        ttl_secs: i64,
    ) -> Self {
        let now = Utc::now().timestamp();
        Self {
            user_id: user_id.into(),
            nickname: nickname.into(),
            role,
            iat: now,
            exp: now + ttl_secs,
        }
    }

    /// Returns `true` once the current time is past `exp`
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}
