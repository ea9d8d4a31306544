//! Channel Repository Interface

use crate::entities::Channel;
use crate::error::Result;
use async_trait::async_trait;

/// Repository: channel storage
#[async_trait]
pub trait ChannelRepository: Send + Sync {
    /// Persist a new channel
    async fn create_channel(&self, channel: Channel) -> Result<()>;

    /// All channels in creation order
    async fn list_channels(&self) -> Result<Vec<Channel>>;
}
