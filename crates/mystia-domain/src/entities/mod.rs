//! Domain entities
//!
//! Records owned by the storage collaborator.

mod account;
mod channel;

pub use account::{Account, AccountView};
pub use channel::Channel;
