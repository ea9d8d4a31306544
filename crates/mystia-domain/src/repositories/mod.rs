//! Repository Interfaces
//!
//! Contracts for the storage collaborator. Every call is return-or-error;
//! no transactions are exposed, so read-then-write sequences built on top
//! of these traits are not atomic.

mod account_repository;
mod channel_repository;

pub use account_repository::AccountRepository;
pub use channel_repository::ChannelRepository;
