//! Account Repository Interface

use crate::entities::Account;
use crate::error::Result;
use crate::value_objects::Role;
use async_trait::async_trait;

/// Repository: account storage
///
/// # Example
///
/// ```ignore
/// use mystia_domain::repositories::AccountRepository;
///
/// if repo.count_accounts().await? == 0 {
///     println!("first boot");
/// }
/// let alice = repo.get_account_by_handle("alice").await?;
/// ```
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Persist a new account
    ///
    /// Fails with [`Error::AlreadyExists`](crate::Error::AlreadyExists) when
    /// the handle is taken; the existing account is left untouched.
    async fn create_account(&self, account: Account) -> Result<()>;

    /// Look up an account by its handle
    async fn get_account_by_handle(&self, username: &str) -> Result<Option<Account>>;

    /// Look up an account by its identity
    async fn get_account_by_id(&self, id: &str) -> Result<Option<Account>>;

    /// Number of registered accounts
    async fn count_accounts(&self) -> Result<usize>;

    /// Replace the role of an account
    async fn update_account_role(&self, id: &str, role: Role) -> Result<()>;

    /// All accounts in creation order
    async fn list_accounts(&self) -> Result<Vec<Account>>;
}
