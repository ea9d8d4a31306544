//! Channel Service Use Case
//!
//! Channel listing and creation, and capability grants for joining a room
//! on the external media server.

use super::internal;
use crate::domain_services::channel::ChannelServiceInterface;
use crate::policy::{Operation, authorize};
use async_trait::async_trait;
use mystia_domain::entities::Channel;
use mystia_domain::error::{Error, Result};
use mystia_domain::ports::GrantIssuer;
use mystia_domain::repositories::ChannelRepository;
use mystia_domain::value_objects::{CapabilityGrant, Claims};
use std::sync::Arc;
use tracing::{debug, info};

/// Channel service implementation
pub struct ChannelServiceImpl {
    channels: Arc<dyn ChannelRepository>,
    grants: Arc<dyn GrantIssuer>,
}

impl ChannelServiceImpl {
    /// Create new channel service with injected dependencies
    pub fn new(channels: Arc<dyn ChannelRepository>, grants: Arc<dyn GrantIssuer>) -> Self {
        Self { channels, grants }
    }
}

#[async_trait]
impl ChannelServiceInterface for ChannelServiceImpl {
    async fn list_channels(&self, caller: &Claims) -> Result<Vec<Channel>> {
        authorize(caller.role, Operation::ListChannels)?;

        self.channels
            .list_channels()
            .await
            .map_err(internal("database error"))
    }

    async fn create_channel(&self, caller: &Claims, name: &str) -> Result<Channel> {
        authorize(caller.role, Operation::CreateChannel)?;

        if name.trim().is_empty() {
            return Err(Error::invalid_argument("channel name is required"));
        }

        let channel = Channel::new(name);
        self.channels
            .create_channel(channel.clone())
            .await
            .map_err(internal("failed to create channel"))?;

        info!(channel_id = %channel.id, name = %channel.name, actor = %caller.user_id, "channel created");
        Ok(channel)
    }

    async fn join_channel(&self, caller: &Claims, channel_id: &str) -> Result<CapabilityGrant> {
        authorize(caller.role, Operation::JoinChannel)?;

        if channel_id.is_empty() {
            return Err(Error::invalid_argument("channel id is required"));
        }

        let grant = self
            .grants
            .issue_join_grant(channel_id, &caller.user_id, &caller.nickname)
            .map_err(internal("failed to generate media token"))?;

        debug!(room = %grant.room, identity = %grant.identity, "join grant issued");
        Ok(grant)
    }
}
