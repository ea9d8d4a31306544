//! Role Policy
//!
//! Pure decision logic. Nothing here touches storage or tokens; handlers
//! call these functions before any mutating side effect.

mod role_policy;

pub use role_policy::{
    Operation, authorize, can_perform, ensure_role_mutable, role_for_new_account,
};
