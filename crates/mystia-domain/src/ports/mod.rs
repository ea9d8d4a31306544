//! Domain Port Interfaces
//!
//! Synchronous, CPU-bound contracts used by the application layer. They
//! have no suspension points; implementations live in
//! `mystia-infrastructure`.
//!
//! - **crypto** - one-way password hashing
//! - **token** - session token encoding and verification
//! - **grant** - capability grants for the media server

mod crypto;
mod grant;
mod token;

pub use crypto::PasswordHasher;
pub use grant::GrantIssuer;
pub use token::TokenCodec;
