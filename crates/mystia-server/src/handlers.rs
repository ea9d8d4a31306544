//! RPC dispatch
//!
//! Routes an intercepted call to its handler by method identifier. Protected
//! handlers read the caller from the [`CallContext`]; none of them run
//! without it.

use std::sync::Arc;

use mystia_application::domain_services::{
    AccountServiceInterface, AdminServiceInterface, ChannelServiceInterface,
};
use mystia_domain::error::{Error, Result};
use mystia_domain::value_objects::CallContext;
use mystia_infrastructure::di::AppContext;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::constants::*;
use crate::transport::types::*;

/// Handlers for every method of the RPC surface
#[derive(Clone)]
pub struct RpcHandlers {
    accounts: Arc<dyn AccountServiceInterface>,
    admin: Arc<dyn AdminServiceInterface>,
    channels: Arc<dyn ChannelServiceInterface>,
}

impl RpcHandlers {
    /// Create handlers over explicit services
    pub fn new(
        accounts: Arc<dyn AccountServiceInterface>,
        admin: Arc<dyn AdminServiceInterface>,
        channels: Arc<dyn ChannelServiceInterface>,
    ) -> Self {
        Self {
            accounts,
            admin,
            channels,
        }
    }

    /// Create handlers over the services of an application context
    pub fn from_context(context: &AppContext) -> Self {
        Self::new(context.accounts(), context.admin(), context.channels())
    }

    /// Run the handler for `call`, decoding `body` as its request message
    pub async fn dispatch(&self, call: &CallContext, body: &[u8]) -> Result<Value> {
        match call.method() {
            METHOD_REGISTER => {
                let req: RegisterRequest = parse(body)?;
                let outcome = self
                    .accounts
                    .register(&req.username, &req.password, &req.nickname)
                    .await?;
                encode(&RegisterResponse {
                    success: true,
                    message: outcome.message,
                })
            }
            METHOD_LOGIN => {
                let req: LoginRequest = parse(body)?;
                let outcome = self.accounts.login(&req.username, &req.password).await?;
                encode(&LoginResponse {
                    token: outcome.token,
                    user: outcome.account.into(),
                })
            }
            METHOD_LIST_CHANNELS => {
                let caller = call.caller()?;
                let channels = self.channels.list_channels(caller).await?;
                encode(&ListChannelsResponse {
                    channels: channels.into_iter().map(Into::into).collect(),
                })
            }
            METHOD_JOIN_CHANNEL => {
                let caller = call.caller()?;
                let req: JoinChannelRequest = parse(body)?;
                let grant = self.channels.join_channel(caller, &req.channel_id).await?;
                encode(&JoinChannelResponse {
                    token: grant.token,
                    url: grant.url,
                })
            }
            METHOD_CREATE_CHANNEL => {
                let caller = call.caller()?;
                let req: CreateChannelRequest = parse(body)?;
                let channel = self.channels.create_channel(caller, &req.name).await?;
                encode(&ChannelMessage::from(channel))
            }
            METHOD_SET_ADMIN_STATUS => {
                let caller = call.caller()?;
                let req: SetAdminStatusRequest = parse(body)?;
                self.admin
                    .set_admin_status(caller, &req.user_id, req.is_admin)
                    .await?;
                encode(&SetAdminStatusResponse { success: true })
            }
            METHOD_LIST_USERS => {
                let caller = call.caller()?;
                let users = self.admin.list_users(caller).await?;
                encode(&ListUsersResponse {
                    users: users.into_iter().map(Into::into).collect(),
                })
            }
            other => Err(Error::not_found(format!("unknown method {other}"))),
        }
    }
}

/// Decode a request message; an empty body is the empty message
fn parse<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        body
    };
    serde_json::from_slice(body).map_err(|_| Error::invalid_argument("malformed request body"))
}

fn encode<T: Serialize>(response: &T) -> Result<Value> {
    serde_json::to_value(response)
        .map_err(|e| Error::internal_with_source("failed to encode response", e))
}
