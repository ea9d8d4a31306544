//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML files, environment variables, and default values.

use crate::config::{AppConfig, AuthConfig, MediaConfig, ServerConfig};
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::log_config_loaded;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use mystia_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Flat environment variables accepted for compatibility, and the nested
/// keys they set
const LEGACY_ENV_KEYS: &[(&str, &str)] = &[
    ("JWT_SECRET", "auth.jwt.secret"),
    ("PORT", "server.port"),
    ("LIVEKIT_API_KEY", "media.api_key"),
    ("LIVEKIT_API_SECRET", "media.api_secret"),
    ("LIVEKIT_HOST", "media.url"),
];

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `MYSTIA__SERVER__PORT`)
    /// 4. Legacy flat variables (`JWT_SECRET`, `PORT`, `LIVEKIT_*`)
    ///
    /// The result is not validated; callers apply their own overrides first
    /// and then run [`validate_app_config`].
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = figment
            .merge(
                Env::prefixed(&format!("{CONFIG_ENV_PREFIX}{CONFIG_ENV_SEPARATOR}"))
                    .split(CONFIG_ENV_SEPARATOR),
            )
            .merge(legacy_env());

        figment
            .extract()
            .config_context("Failed to extract configuration")
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment provider for the legacy flat variable names
fn legacy_env() -> Env {
    let names: Vec<&str> = LEGACY_ENV_KEYS.iter().map(|(name, _)| *name).collect();
    Env::raw().only(&names).map(|key| {
        LEGACY_ENV_KEYS
            .iter()
            .find(|(name, _)| key.as_str().eq_ignore_ascii_case(name))
            .map_or_else(|| key.as_str().to_string(), |(_, path)| (*path).to_string())
            .into()
    })
}

/// Validate application configuration
///
/// Performs validation of all configuration sections.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(&config.server)?;
    validate_auth_config(&config.auth)?;
    validate_media_config(&config.media)?;
    crate::logging::parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_server_config(config: &ServerConfig) -> Result<()> {
    if config.port == 0 {
        return Err(Error::configuration("Server port cannot be 0"));
    }
    Ok(())
}

fn validate_auth_config(config: &AuthConfig) -> Result<()> {
    if config.jwt.secret.is_empty() {
        return Err(Error::configuration(
            "JWT secret cannot be empty; set MYSTIA__AUTH__JWT__SECRET or JWT_SECRET",
        ));
    }
    if config.jwt.secret.len() < JWT_RECOMMENDED_SECRET_LEN {
        warn!(
            "JWT secret is shorter than recommended ({} bytes)",
            JWT_RECOMMENDED_SECRET_LEN
        );
    }
    if config.jwt.expiration_secs <= 0 {
        return Err(Error::configuration("JWT expiration must be positive"));
    }
    if !(4..=31).contains(&config.bcrypt_cost) {
        return Err(Error::configuration(format!(
            "bcrypt cost {} is outside the supported range 4..=31",
            config.bcrypt_cost
        )));
    }
    Ok(())
}

fn validate_media_config(config: &MediaConfig) -> Result<()> {
    if config.api_key.is_empty() || config.api_secret.is_empty() {
        return Err(Error::configuration(
            "Media server API key and secret are required",
        ));
    }
    if config.url.is_empty() {
        return Err(Error::configuration("Media server URL cannot be empty"));
    }
    if config.grant_ttl_secs <= 0 {
        return Err(Error::configuration("Grant lifetime must be positive"));
    }
    Ok(())
}

/// Configuration builder for programmatic configuration
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Set authentication configuration
    pub fn with_auth(mut self, auth: AuthConfig) -> Self {
        self.config.auth = auth;
        self
    }

    /// Set the JWT secret only
    pub fn with_jwt_secret<S: Into<String>>(mut self, secret: S) -> Self {
        self.config.auth.jwt.secret = secret.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
