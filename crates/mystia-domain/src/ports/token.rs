//! Token Codec Port

use crate::error::Result;
use crate::value_objects::Claims;

/// Signed, self-contained session tokens
pub trait TokenCodec: Send + Sync {
    /// Sign `claims` into a compact token string
    fn encode(&self, claims: &Claims) -> Result<String>;

    /// Verify a token and return its claims
    ///
    /// Fails when the signature does not match, the token is malformed or
    /// the current time is past its expiry.
    fn decode(&self, token: &str) -> Result<Claims>;
}
