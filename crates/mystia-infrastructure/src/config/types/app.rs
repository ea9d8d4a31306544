//! Main application configuration

use super::{AuthConfig, LoggingConfig, MediaConfig, ServerConfig};
use serde::{Deserialize, Serialize};

/// Root configuration, immutable once loaded
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// RPC server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Session tokens and password hashing
    #[serde(default)]
    pub auth: AuthConfig,

    /// External media server credentials
    #[serde(default)]
    pub media: MediaConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}
