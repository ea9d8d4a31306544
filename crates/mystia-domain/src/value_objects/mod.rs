//! Value objects
//!
//! Immutable values that carry identity and authority through a call.

mod claims;
mod context;
mod grant;
mod role;

pub use claims::Claims;
pub use context::CallContext;
pub use grant::{CapabilityGrant, VideoGrant};
pub use role::Role;
