// Clippy allows for complex patterns in infrastructure code
#![allow(clippy::collapsible_if)]

//! # Infrastructure Layer
//!
//! Adapters behind the domain ports, plus the cross-cutting concerns the
//! server needs at startup.
//!
//! ## Module Categories
//!
//! ### Security & Authentication
//! | Module | Description |
//! |--------|-------------|
//! | [`crypto`] | bcrypt credential hashing, HS256 session tokens |
//! | [`media`] | Capability grants for the external media server |
//!
//! ### Data & Storage
//! | Module | Description |
//! |--------|-------------|
//! | [`storage`] | In-memory account and channel store |
//!
//! ### Configuration & Composition
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-layered TOML + environment configuration |
//! | [`di`] | Composition root wiring ports into services |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod crypto;
pub mod di;
pub mod error_ext;
pub mod logging;
pub mod media;
pub mod storage;

// Re-export commonly used types
pub use error_ext::ErrorContext;
