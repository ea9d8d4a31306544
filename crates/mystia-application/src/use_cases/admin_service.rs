//! Admin Service Use Case
//!
//! Account listing and role changes for `ADMIN` and `SUPER_ADMIN` callers.

use super::internal;
use crate::domain_services::admin::AdminServiceInterface;
use crate::policy::{Operation, authorize, ensure_role_mutable};
use async_trait::async_trait;
use mystia_domain::entities::AccountView;
use mystia_domain::error::{Error, Result};
use mystia_domain::repositories::AccountRepository;
use mystia_domain::value_objects::{Claims, Role};
use std::sync::Arc;
use tracing::info;

/// Admin service implementation
pub struct AdminServiceImpl {
    accounts: Arc<dyn AccountRepository>,
}

impl AdminServiceImpl {
    /// Create new admin service with injected dependencies
    pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
        Self { accounts }
    }
}

#[async_trait]
impl AdminServiceInterface for AdminServiceImpl {
    async fn list_users(&self, caller: &Claims) -> Result<Vec<AccountView>> {
        authorize(caller.role, Operation::ListAccounts)?;

        let accounts = self
            .accounts
            .list_accounts()
            .await
            .map_err(internal("failed to list users"))?;
        Ok(accounts.iter().map(AccountView::from).collect())
    }

    async fn set_admin_status(
        &self,
        caller: &Claims,
        user_id: &str,
        is_admin: bool,
    ) -> Result<()> {
        authorize(caller.role, Operation::ChangeAccountRole)?;

        let target = self
            .accounts
            .get_account_by_id(user_id)
            .await
            .map_err(internal("failed to fetch target user"))?
            .ok_or_else(|| Error::not_found("user not found"))?;

        ensure_role_mutable(target.role)?;

        let role = if is_admin { Role::Admin } else { Role::User };
        self.accounts
            .update_account_role(&target.id, role)
            .await
            .map_err(internal("failed to update user role"))?;

        info!(
            actor = %caller.user_id,
            target = %target.id,
            from = %target.role,
            to = %role,
            "account role changed"
        );
        Ok(())
    }
}
