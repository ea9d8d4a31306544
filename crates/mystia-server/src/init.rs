//! Server Initialization
//!
//! Startup sequence:
//!
//! 1. Load configuration (defaults → TOML → environment), apply CLI overrides
//! 2. Install the tracing subscriber
//! 3. Wire services through the composition root
//! 4. Serve the RPC surface over HTTP until shutdown

use std::path::Path;

use mystia_infrastructure::config::loader::validate_app_config;
use mystia_infrastructure::config::{AppConfig, ConfigLoader};
use mystia_infrastructure::di::init_app;
use mystia_infrastructure::logging::init_logging;
use tracing::{error, info};

use crate::transport::{HttpTransport, HttpTransportConfig};

/// Command-line values that take precedence over loaded configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerOverrides {
    /// Replaces `server.port`
    pub port: Option<u16>,
    /// Replaces the port component of `media.url`
    pub media_port: Option<u16>,
}

/// Run the Mystia server
///
/// Returns once the transport shuts down, or on the first startup error.
pub async fn run(
    config_path: Option<&Path>,
    overrides: ServerOverrides,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path, overrides)?;
    init_logging(config.logging.clone())?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        media_url = %config.media.url,
        "Starting Mystia server"
    );

    let transport_config = HttpTransportConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };
    let context = init_app(config)?;
    let transport = HttpTransport::from_context(transport_config, &context);

    transport.start().await.map_err(|e| -> Box<dyn std::error::Error> {
        error!(error = %e, "HTTP transport failed");
        e
    })
}

/// Load configuration from optional path and apply overrides
pub fn load_config(
    config_path: Option<&Path>,
    overrides: ServerOverrides,
) -> mystia_domain::Result<AppConfig> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let mut config = loader.load()?;

    if let Some(port) = overrides.port {
        config.server.port = port;
    }
    if let Some(media_port) = overrides.media_port {
        config.media = config.media.with_port(media_port);
    }

    validate_app_config(&config)?;
    Ok(config)
}
