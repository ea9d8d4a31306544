//! Per-call execution context

use super::Claims;
use crate::error::{Error, Result};
use uuid::Uuid;

/// Context built by the auth interceptor for one inbound call
///
/// Public methods carry no claims. Protected methods only ever reach their
/// handler with claims present, and handlers read them through
/// [`CallContext::caller`].
#[derive(Debug, Clone)]
pub struct CallContext {
    method: String,
    request_id: Uuid,
    claims: Option<Claims>,
}

impl CallContext {
    /// Context for a public call
    pub fn anonymous(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            request_id: Uuid::new_v4(),
            claims: None,
        }
    }

    /// Context for a call whose token was verified
    pub fn authenticated(method: impl Into<String>, claims: Claims) -> Self {
        Self {
            method: method.into(),
            request_id: Uuid::new_v4(),
            claims: Some(claims),
        }
    }

    /// Fully-qualified method identifier of the call
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Identifier used to correlate log lines of one call
    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    /// Claims, if the call was authenticated
    pub fn claims(&self) -> Option<&Claims> {
        self.claims.as_ref()
    }

    /// Claims of the caller, or an authentication error when absent
    pub fn caller(&self) -> Result<&Claims> {
        self.claims
            .as_ref()
            .ok_or_else(|| Error::authentication("unauthenticated"))
    }
}
