//! # Mystia Server
//!
//! RPC surface of the Mystia voice backend: account registration and login,
//! channel management, and join grants for the external media server.
//!
//! ## Call path
//!
//! ```text
//! HTTP POST /<service>/<method>
//!   → AuthInterceptor (public allow-list, bearer token)
//!   → RpcHandlers (decode request, call service)
//!   → JSON response or { code, message } error
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mystia_server::{ServerOverrides, run};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     run(None, ServerOverrides::default()).await
//! }
//! ```
//!
//! | Type | Description |
//! |------|-------------|
//! | [`AuthInterceptor`] | Single enforcement point for protected methods |
//! | [`RpcHandlers`] | Method table and dispatch |
//! | [`HttpTransport`] | Rocket application serving the method table |

pub mod constants;
pub mod handlers;
pub mod init;
pub mod interceptor;
pub mod transport;

pub use handlers::RpcHandlers;
pub use init::{ServerOverrides, run};
pub use interceptor::AuthInterceptor;
pub use transport::HttpTransport;
