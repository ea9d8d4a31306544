//! Transport layer types
//!
//! Request and response messages of the RPC surface. Field names are
//! camelCase on the wire. Request fields default when absent so that missing
//! input reaches the flows as empty values and is rejected there.

use mystia_domain::entities::{AccountView, Channel};
use mystia_domain::value_objects::Role;
use serde::{Deserialize, Serialize};

/// `Register` request
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Handle to claim
    pub username: String,
    /// Plaintext password
    pub password: String,
    /// Display name
    pub nickname: String,
}

/// `Register` response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    /// Always `true`; failures are reported as errors
    pub success: bool,
    /// Human-readable outcome
    pub message: String,
}

/// `Login` request
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoginRequest {
    /// Account handle
    pub username: String,
    /// Plaintext password
    pub password: String,
}

/// Public account record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMessage {
    pub id: String,
    pub username: String,
    pub nickname: String,
    pub role: Role,
}

impl From<AccountView> for UserMessage {
    fn from(view: AccountView) -> Self {
        Self {
            id: view.id,
            username: view.username,
            nickname: view.nickname,
            role: view.role,
        }
    }
}

/// `Login` response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Session token
    pub token: String,
    /// The authenticated account
    pub user: UserMessage,
}

/// Channel record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelMessage {
    pub id: String,
    pub name: String,
}

impl From<Channel> for ChannelMessage {
    fn from(channel: Channel) -> Self {
        Self {
            id: channel.id,
            name: channel.name,
        }
    }
}

/// `ListChannels` response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListChannelsResponse {
    pub channels: Vec<ChannelMessage>,
}

/// `JoinChannel` request
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JoinChannelRequest {
    /// Room to join, used verbatim as the grant scope
    pub channel_id: String,
}

/// `JoinChannel` response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinChannelResponse {
    /// Capability grant for the media server
    pub token: String,
    /// Media server base address
    pub url: String,
}

/// `CreateChannel` request
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateChannelRequest {
    pub name: String,
}

/// `SetAdminStatus` request
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SetAdminStatusRequest {
    /// Target account
    pub user_id: String,
    /// `true` grants ADMIN, `false` reverts to USER
    pub is_admin: bool,
}

/// `SetAdminStatus` response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetAdminStatusResponse {
    pub success: bool,
}

/// `ListUsers` response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersResponse {
    pub users: Vec<UserMessage>,
}

/// Error body returned with every non-2xx status
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Upper-case status name, e.g. `PERMISSION_DENIED`
    pub code: String,
    /// Caller-facing message
    pub message: String,
}
