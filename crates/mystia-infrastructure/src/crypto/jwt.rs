//! HS256 session tokens

use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use mystia_domain::error::{Error, Result};
use mystia_domain::ports::TokenCodec;
use mystia_domain::value_objects::Claims;
use tracing::{debug, warn};

use crate::config::JwtConfig;
use crate::constants::JWT_RECOMMENDED_SECRET_LEN;
use crate::error_ext::ErrorContext;

/// Message returned for every rejected token
const INVALID_TOKEN: &str = "invalid token";

/// Signs and verifies session tokens with a single shared secret
///
/// Keys are derived once at construction and shared behind `Arc`, so clones
/// are cheap and can be handed to every request handler.
#[derive(Clone)]
pub struct JwtTokenCodec {
    encoding_key: Arc<EncodingKey>,
    decoding_key: Arc<DecodingKey>,
    validation: Arc<Validation>,
}

impl JwtTokenCodec {
    /// Creates a codec from the JWT configuration
    ///
    /// Fails when the secret is empty.
    pub fn new(config: &JwtConfig) -> Result<Self> {
        if config.secret.is_empty() {
            return Err(Error::configuration("JWT secret is not configured"));
        }
        if config.secret.len() < JWT_RECOMMENDED_SECRET_LEN {
            warn!(
                "JWT secret is shorter than recommended ({} bytes)",
                JWT_RECOMMENDED_SECRET_LEN
            );
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.leeway_secs;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp"]);

        Ok(Self {
            encoding_key: Arc::new(EncodingKey::from_secret(config.secret.as_bytes())),
            decoding_key: Arc::new(DecodingKey::from_secret(config.secret.as_bytes())),
            validation: Arc::new(validation),
        })
    }

    /// Shorthand for a codec with default lifetimes and the given secret
    pub fn from_secret(secret: impl Into<String>) -> Result<Self> {
        Self::new(&JwtConfig::new(secret))
    }
}

impl TokenCodec for JwtTokenCodec {
    fn encode(&self, claims: &Claims) -> Result<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .context("token signing failed")
    }

    fn decode(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(error = %e, "rejected session token");
                Error::authentication(INVALID_TOKEN)
            })
    }
}

impl std::fmt::Debug for JwtTokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtTokenCodec")
            .field("algorithm", &Algorithm::HS256)
            .field("leeway", &self.validation.leeway)
            .finish_non_exhaustive()
    }
}
