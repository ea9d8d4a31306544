//! Media server configuration types

use crate::constants::*;
use serde::{Deserialize, Serialize};

/// Credentials and address of the external media server
#[derive(Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// API key, embedded as the grant issuer
    #[serde(deserialize_with = "super::scalar::string_from_scalar")]
    pub api_key: String,

    /// API secret used to sign grants
    #[serde(deserialize_with = "super::scalar::string_from_scalar")]
    pub api_secret: String,

    /// Base address handed to clients
    #[serde(deserialize_with = "super::scalar::string_from_scalar")]
    pub url: String,

    /// Grant lifetime in seconds
    pub grant_ttl_secs: i64,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            api_key: MEDIA_DEFAULT_API_KEY.to_string(),
            api_secret: MEDIA_DEFAULT_API_SECRET.to_string(),
            url: MEDIA_DEFAULT_URL.to_string(),
            grant_ttl_secs: MEDIA_GRANT_TTL_SECS,
        }
    }
}

impl MediaConfig {
    /// Replace the port component of `url`
    ///
    /// Everything after the last `:` is replaced; a URL without any `:` gets
    /// `:<port>` appended.
    pub fn with_port(mut self, port: u16) -> Self {
        self.url = match self.url.rfind(':') {
            Some(idx) => format!("{}{port}", &self.url[..=idx]),
            None => format!("{}:{port}", self.url),
        };
        self
    }
}

impl std::fmt::Debug for MediaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("url", &self.url)
            .field("grant_ttl_secs", &self.grant_ttl_secs)
            .finish()
    }
}
