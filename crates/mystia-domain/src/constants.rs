//! Domain-level constants
//!
//! Values that are part of observable behavior rather than deployment
//! tuning. Tunable defaults live in `mystia_infrastructure::constants`.

/// Lifetime of a session token issued at login (24 hours)
pub const SESSION_TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// Lifetime of a capability grant handed to the media server (1 hour)
pub const CAPABILITY_GRANT_TTL_SECS: i64 = 60 * 60;

/// Registration message for ordinary accounts
pub const REGISTER_MESSAGE: &str = "Registration successful";

/// Registration message when the bootstrap role was granted
pub const REGISTER_BOOTSTRAP_MESSAGE: &str =
    "Registration successful. You are the first user and have been granted SUPER_ADMIN privileges.";

/// Generic login failure text, shared by unknown handle and wrong password
pub const INVALID_CREDENTIALS: &str = "invalid credentials";
