//! Service interfaces
//!
//! Contracts the transport layer dispatches calls to. Implementations are
//! in [`crate::use_cases`].

pub mod account;
pub mod admin;
pub mod channel;

pub use account::{AccountServiceInterface, LoginOutcome, RegisterOutcome};
pub use admin::AdminServiceInterface;
pub use channel::ChannelServiceInterface;
