//! Credential Hasher Port

use crate::error::Result;

/// One-way password hashing
pub trait PasswordHasher: Send + Sync {
    /// Produce a salted, one-way representation of `password`
    fn hash(&self, password: &str) -> Result<String>;

    /// Check `password` against a stored hash
    ///
    /// Returns `Ok(false)` on mismatch. Fails only when `hash` itself is
    /// malformed, which points at corrupted storage.
    fn verify(&self, hash: &str, password: &str) -> Result<bool>;
}
