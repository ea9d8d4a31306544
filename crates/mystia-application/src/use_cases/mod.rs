//! Use case implementations
//!
//! Each service composes the domain ports (storage, hashing, tokens,
//! grants) and consults the role policy before any mutation.

pub mod account_service;
pub mod admin_service;
pub mod channel_service;

pub use account_service::AccountServiceImpl;
pub use admin_service::AdminServiceImpl;
pub use channel_service::ChannelServiceImpl;

use mystia_domain::error::Error;

/// Log a collaborator failure and replace it with a generic internal error
///
/// The original error is kept as the source for server-side diagnostics;
/// callers only ever see `message`.
pub(crate) fn internal(message: &'static str) -> impl FnOnce(Error) -> Error {
    move |err| {
        tracing::error!(error = %err, "{message}");
        Error::internal_with_source(message, err)
    }
}
