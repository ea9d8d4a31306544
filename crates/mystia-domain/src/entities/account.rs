//! Registered accounts

use crate::value_objects::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account
///
/// `id` and `username` never change after creation. `role` is the only
/// field mutated afterwards, through the admin role-change flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Opaque unique identifier
    pub id: String,
    /// Unique handle chosen by the owner
    pub username: String,
    /// One-way password hash, never the plaintext
    pub password_hash: String,
    /// Display name
    pub nickname: String,
    /// Current role
    pub role: Role,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// New account with a freshly generated identity
    pub fn new(
        username: impl Into<String>,
        password_hash: impl Into<String>,
        nickname: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username: username.into(),
            password_hash: password_hash.into(),
            nickname: nickname.into(),
            role,
            created_at: Utc::now(),
        }
    }

    /// Public record, without the password hash
    pub fn view(&self) -> AccountView {
        AccountView::from(self)
    }
}

/// Public account record returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountView {
    /// Account identity
    pub id: String,
    /// Handle
    pub username: String,
    /// Display name
    pub nickname: String,
    /// Current role
    pub role: Role,
}

impl From<&Account> for AccountView {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.clone(),
            username: account.username.clone(),
            nickname: account.nickname.clone(),
            role: account.role,
        }
    }
}
