//! Password hashing service using bcrypt

use crate::error_ext::ErrorContext;
use mystia_domain::error::Result;
use mystia_domain::ports::PasswordHasher;

/// Password hashing service using bcrypt
///
/// Each hash carries its own random salt and cost, so two hashes of the same
/// password differ and stay verifiable after the configured cost changes.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    /// bcrypt work factor
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with an explicit work factor
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> Result<String> {
        bcrypt::hash(password, self.cost).context("password hashing failed")
    }

    fn verify(&self, hash: &str, password: &str) -> Result<bool> {
        bcrypt::verify(password, hash).context("password verification failed")
    }
}
