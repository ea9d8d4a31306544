//! In-memory account and channel store
//!
//! Provides a concurrent, non-persistent backend for the repository ports.
//! Data is lost on restart.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use mystia_domain::entities::{Account, Channel};
use mystia_domain::error::{Error, Result};
use mystia_domain::repositories::{AccountRepository, ChannelRepository};
use mystia_domain::value_objects::Role;

/// Stored record tagged with its insertion sequence number
type Sequenced<T> = (u64, T);

/// In-memory store implementing both repository ports
///
/// Handles are reserved through a separate index whose entry lock makes
/// the uniqueness check and the insert a single step.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    accounts: Arc<DashMap<String, Sequenced<Account>>>,
    handles: Arc<DashMap<String, String>>,
    channels: Arc<DashMap<String, Sequenced<Channel>>>,
    sequence: Arc<AtomicU64>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn next_sequence(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::Relaxed)
    }
}

/// Collect values sorted by insertion sequence
fn in_creation_order<T: Clone>(map: &DashMap<String, Sequenced<T>>) -> Vec<T> {
    let mut entries: Vec<Sequenced<T>> = map.iter().map(|entry| entry.value().clone()).collect();
    entries.sort_by_key(|(seq, _)| *seq);
    entries.into_iter().map(|(_, value)| value).collect()
}

#[async_trait]
impl AccountRepository for InMemoryStore {
    async fn create_account(&self, account: Account) -> Result<()> {
        match self.handles.entry(account.username.clone()) {
            Entry::Occupied(_) => Err(Error::already_exists("username already taken")),
            Entry::Vacant(slot) => {
                let seq = self.next_sequence();
                self.accounts
                    .insert(account.id.clone(), (seq, account.clone()));
                slot.insert(account.id);
                Ok(())
            }
        }
    }

    async fn get_account_by_handle(&self, username: &str) -> Result<Option<Account>> {
        let Some(id) = self.handles.get(username).map(|id| id.value().clone()) else {
            return Ok(None);
        };
        Ok(self.accounts.get(&id).map(|entry| entry.value().1.clone()))
    }

    async fn get_account_by_id(&self, id: &str) -> Result<Option<Account>> {
        Ok(self.accounts.get(id).map(|entry| entry.value().1.clone()))
    }

    async fn count_accounts(&self) -> Result<usize> {
        Ok(self.accounts.len())
    }

    async fn update_account_role(&self, id: &str, role: Role) -> Result<()> {
        let mut entry = self
            .accounts
            .get_mut(id)
            .ok_or_else(|| Error::not_found("user not found"))?;
        entry.value_mut().1.role = role;
        Ok(())
    }

    async fn list_accounts(&self) -> Result<Vec<Account>> {
        Ok(in_creation_order(&self.accounts))
    }
}

#[async_trait]
impl ChannelRepository for InMemoryStore {
    async fn create_channel(&self, channel: Channel) -> Result<()> {
        let seq = self.next_sequence();
        self.channels.insert(channel.id.clone(), (seq, channel));
        Ok(())
    }

    async fn list_channels(&self) -> Result<Vec<Channel>> {
        Ok(in_creation_order(&self.channels))
    }
}
