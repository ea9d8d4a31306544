//! Capability grants for the external media server

use serde::{Deserialize, Serialize};

/// Permission block embedded in a capability grant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoGrant {
    /// Caller may join the room
    pub room_join: bool,
    /// The single room this grant is scoped to
    pub room: String,
}

impl VideoGrant {
    /// Join permission for exactly one room
    pub fn join(room: impl Into<String>) -> Self {
        Self {
            room_join: true,
            room: room.into(),
        }
    }
}

/// A minted capability grant, ready to hand to a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityGrant {
    /// Signed token in the media server's access-token format
    pub token: String,
    /// Base address of the media server
    pub url: String,
    /// Room the token is scoped to
    pub room: String,
    /// Identity embedded in the token
    pub identity: String,
    /// Expiry (seconds since the Unix epoch)
    pub expires_at: i64,
}
