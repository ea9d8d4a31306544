//! Per-operation role checks and the first-account bootstrap rule

use mystia_domain::error::{Error, Result};
use mystia_domain::value_objects::Role;
use std::fmt;

/// Protected operations subject to a role decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// List every registered account
    ListAccounts,
    /// Change another account's role
    ChangeAccountRole,
    /// Create a shared channel
    CreateChannel,
    /// List channels
    ListChannels,
    /// Join an existing channel
    JoinChannel,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ListAccounts => "list_accounts",
            Self::ChangeAccountRole => "change_account_role",
            Self::CreateChannel => "create_channel",
            Self::ListChannels => "list_channels",
            Self::JoinChannel => "join_channel",
        };
        f.write_str(name)
    }
}

/// Whether `role` may perform `operation`
pub fn can_perform(role: Role, operation: Operation) -> bool {
    match operation {
        Operation::ListAccounts | Operation::ChangeAccountRole | Operation::CreateChannel => {
            role.is_elevated()
        }
        Operation::ListChannels | Operation::JoinChannel => true,
    }
}

/// [`can_perform`] as a `Result`, failing with a permission error
pub fn authorize(role: Role, operation: Operation) -> Result<()> {
    if can_perform(role, operation) {
        Ok(())
    } else {
        tracing::debug!(%role, %operation, "operation denied by role policy");
        Err(Error::permission_denied("admin only"))
    }
}

/// Reject role changes that target the top-level account
///
/// Applies regardless of the caller's own role.
pub fn ensure_role_mutable(target: Role) -> Result<()> {
    if target == Role::SuperAdmin {
        return Err(Error::permission_denied("cannot modify SUPER_ADMIN status"));
    }
    Ok(())
}

/// Role for an account registered while `existing_accounts` already exist
///
/// The count is observed before the insert, outside any transaction; two
/// concurrent first registrations can both see zero.
pub fn role_for_new_account(existing_accounts: usize) -> Role {
    if existing_accounts == 0 {
        Role::SuperAdmin
    } else {
        Role::User
    }
}
