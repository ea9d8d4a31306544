//! # Domain Layer
//!
//! Core types and contracts for the Mystia voice backend.
//!
//! The domain answers two questions for every call: who the caller is
//! (`Claims`, decoded from a signed token) and what the caller may do
//! (`Role`). Everything that touches the outside world is expressed as a
//! port trait and implemented in `mystia-infrastructure`.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | Stored records: accounts and channels |
//! | [`value_objects`] | Roles, claims, capability grants, per-call context |
//! | [`repositories`] | Storage collaborator contracts |
//! | [`ports`] | Credential hashing, token codec and grant minting contracts |
//! | [`error`] | Closed error taxonomy and boundary status mapping |

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod repositories;
pub mod value_objects;

pub use entities::{Account, AccountView, Channel};
pub use error::{Error, Result, StatusCode};
pub use value_objects::{CallContext, CapabilityGrant, Claims, Role};
