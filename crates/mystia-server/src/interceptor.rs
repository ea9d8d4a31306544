//! Auth Interceptor
//!
//! Single enforcement point between the transport and the handlers. Every
//! call passes through [`AuthInterceptor::intercept`] before dispatch:
//!
//! ```text
//! UNCHECKED ──public method──────────────► ALLOWED (no claims)
//!     │
//!     ├─no/empty credential──────────────► REJECTED (UNAUTHENTICATED)
//!     ├─decode fails─────────────────────► REJECTED (UNAUTHENTICATED)
//!     └─decode ok────────────────────────► ALLOWED (claims in context)
//! ```

use std::sync::Arc;

use mystia_domain::error::{Error, Result};
use mystia_domain::ports::TokenCodec;
use mystia_domain::value_objects::CallContext;
use tracing::debug;

use crate::constants::{BEARER_PREFIX, PUBLIC_METHODS};

/// Returns `true` when `method` is on the public allow-list
pub fn is_public_method(method: &str) -> bool {
    PUBLIC_METHODS.contains(&method)
}

/// Verifies the bearer credential of protected calls
#[derive(Clone)]
pub struct AuthInterceptor {
    tokens: Arc<dyn TokenCodec>,
}

impl AuthInterceptor {
    /// Create an interceptor sharing the process-wide token codec
    pub fn new(tokens: Arc<dyn TokenCodec>) -> Self {
        Self { tokens }
    }

    /// Classify a call and build its context
    ///
    /// `authorization` is the raw metadata value, if any. Every rejection is
    /// an authentication error whose message does not say why the credential
    /// was refused.
    pub fn intercept(&self, method: &str, authorization: Option<&str>) -> Result<CallContext> {
        if is_public_method(method) {
            return Ok(CallContext::anonymous(method));
        }

        let Some(raw) = authorization.filter(|value| !value.is_empty()) else {
            debug!(method, reason = "missing_credential", "rejected call");
            return Err(Error::authentication("authorization token is not provided"));
        };

        let token = raw.strip_prefix(BEARER_PREFIX).unwrap_or(raw);
        match self.tokens.decode(token) {
            Ok(claims) => Ok(CallContext::authenticated(method, claims)),
            Err(_) => {
                debug!(method, reason = "invalid_credential", "rejected call");
                Err(Error::authentication("invalid token"))
            }
        }
    }
}

impl std::fmt::Debug for AuthInterceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthInterceptor")
            .field("public_methods", &PUBLIC_METHODS)
            .finish_non_exhaustive()
    }
}
