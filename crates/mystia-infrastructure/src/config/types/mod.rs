//! Configuration types module

pub mod app;
pub mod auth;
pub mod logging;
pub mod media;
mod scalar;
pub mod server;

// Re-export main types
pub use app::AppConfig;
pub use auth::{AuthConfig, JwtConfig};
pub use logging::LoggingConfig;
pub use media::MediaConfig;
pub use server::ServerConfig;
