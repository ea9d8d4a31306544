//! Cryptographic services module
//!
//! This module provides the adapters behind the credential ports:
//! - Password hashing with bcrypt
//! - HS256 session token signing and verification

mod jwt;
mod password;

pub use jwt::JwtTokenCodec;
pub use password::BcryptPasswordHasher;
