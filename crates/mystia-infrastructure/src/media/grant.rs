//! Capability grants in the media server's access-token format

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use mystia_domain::error::{Error, Result};
use mystia_domain::ports::GrantIssuer;
use mystia_domain::value_objects::{CapabilityGrant, VideoGrant};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::MediaConfig;
use crate::error_ext::ErrorContext;

/// Claims of a join grant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantClaims {
    /// Media server API key
    pub iss: String,
    /// Caller identity
    pub sub: String,
    /// Caller display name
    pub name: String,
    /// Not valid before (seconds since the Unix epoch)
    pub nbf: i64,
    /// Expiry (seconds since the Unix epoch)
    pub exp: i64,
    /// Token id, equal to the identity
    pub jti: String,
    /// Room permission block
    pub video: VideoGrant,
}

/// Signs join grants with the media server's API key and secret
#[derive(Clone)]
pub struct MediaGrantIssuer {
    api_key: String,
    url: String,
    ttl_secs: i64,
    encoding_key: Arc<EncodingKey>,
    decoding_key: Arc<DecodingKey>,
}

impl MediaGrantIssuer {
    /// Creates an issuer from the media configuration
    pub fn new(config: &MediaConfig) -> Result<Self> {
        if config.api_key.is_empty() || config.api_secret.is_empty() {
            return Err(Error::configuration(
                "Media server API key and secret are required",
            ));
        }
        Ok(Self {
            api_key: config.api_key.clone(),
            url: config.url.clone(),
            ttl_secs: config.grant_ttl_secs,
            encoding_key: Arc::new(EncodingKey::from_secret(config.api_secret.as_bytes())),
            decoding_key: Arc::new(DecodingKey::from_secret(config.api_secret.as_bytes())),
        })
    }

    /// Verify a grant signed by this issuer and return its claims
    pub fn verify(&self, token: &str) -> Result<GrantClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_nbf = true;
        validation.set_issuer(&[&self.api_key]);
        validation.set_required_spec_claims(&["exp", "nbf", "iss", "sub"]);

        decode::<GrantClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(error = %e, "rejected capability grant");
                Error::authentication("invalid grant")
            })
    }
}

impl GrantIssuer for MediaGrantIssuer {
    fn issue_join_grant(
        &self,
        room: &str,
        identity: &str,
        display_name: &str,
    ) -> Result<CapabilityGrant> {
        let now = Utc::now().timestamp();
        let claims = GrantClaims {
            iss: self.api_key.clone(),
            sub: identity.to_string(),
            name: display_name.to_string(),
            nbf: now,
            exp: now + self.ttl_secs,
            jti: identity.to_string(),
            video: VideoGrant::join(room),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .context("grant signing failed")?;

        Ok(CapabilityGrant {
            token,
            url: self.url.clone(),
            room: room.to_string(),
            identity: identity.to_string(),
            expires_at: claims.exp,
        })
    }
}

impl std::fmt::Debug for MediaGrantIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaGrantIssuer")
            .field("api_key", &self.api_key)
            .field("url", &self.url)
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}
