//! Account administration service interface

use async_trait::async_trait;
use mystia_domain::entities::AccountView;
use mystia_domain::error::Result;
use mystia_domain::value_objects::Claims;

/// Account administration, restricted to elevated roles
#[async_trait]
pub trait AdminServiceInterface: Send + Sync {
    /// Public records of every account
    async fn list_users(&self, caller: &Claims) -> Result<Vec<AccountView>>;

    /// Grant (`is_admin = true`) or revoke the `ADMIN` role
    async fn set_admin_status(&self, caller: &Claims, user_id: &str, is_admin: bool)
    -> Result<()>;
}
