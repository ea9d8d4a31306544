//! Channel service interface

use async_trait::async_trait;
use mystia_domain::entities::Channel;
use mystia_domain::error::Result;
use mystia_domain::value_objects::{CapabilityGrant, Claims};

/// Channel listing, creation and joining
#[async_trait]
pub trait ChannelServiceInterface: Send + Sync {
    /// All channels
    async fn list_channels(&self, caller: &Claims) -> Result<Vec<Channel>>;

    /// Create a channel named `name`
    async fn create_channel(&self, caller: &Claims, name: &str) -> Result<Channel>;

    /// Mint a capability grant to join the room `channel_id`
    async fn join_channel(&self, caller: &Claims, channel_id: &str) -> Result<CapabilityGrant>;
}
