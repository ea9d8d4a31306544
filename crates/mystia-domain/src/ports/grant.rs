//! Capability Grant Port

use crate::error::Result;
use crate::value_objects::CapabilityGrant;

/// Mints short-lived join grants for the external media server
pub trait GrantIssuer: Send + Sync {
    /// Grant `identity` (shown as `display_name`) permission to join `room`
    fn issue_join_grant(
        &self,
        room: &str,
        identity: &str,
        display_name: &str,
    ) -> Result<CapabilityGrant>;
}
