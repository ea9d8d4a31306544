//! External media server integration
//!
//! The media server runs out of process; this backend only mints the
//! signed join grants clients present to it.

mod grant;

pub use grant::{GrantClaims, MediaGrantIssuer};
