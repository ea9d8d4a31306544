//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Behavioral constants are defined in `mystia_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "mystia.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "mystia";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "MYSTIA";

/// Separator for nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "MYSTIA_LOG";

// ============================================================================
// AUTHENTICATION CONSTANTS
// ============================================================================

/// JWT default expiration time in seconds (24 hours)
pub const JWT_DEFAULT_EXPIRATION_SECS: i64 = 86400;

/// Recommended minimum JWT secret length in bytes
pub const JWT_RECOMMENDED_SECRET_LEN: usize = 32;

/// Default bcrypt cost for password hashing
pub const BCRYPT_DEFAULT_COST: u32 = bcrypt::DEFAULT_COST;

// ============================================================================
// MEDIA SERVER CONSTANTS
// ============================================================================

/// Development API key of the media server
pub const MEDIA_DEFAULT_API_KEY: &str = "devkey";

/// Development API secret of the media server
pub const MEDIA_DEFAULT_API_SECRET: &str = "secret";

/// Default media server address
pub const MEDIA_DEFAULT_URL: &str = "http://127.0.0.1:7880";

/// Capability grant lifetime in seconds (1 hour)
pub const MEDIA_GRANT_TTL_SECS: i64 = 3600;

// ============================================================================
// SERVER CONSTANTS
// ============================================================================

/// Default RPC server port
pub const DEFAULT_SERVER_PORT: u16 = 50051;

/// Default server host
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";
