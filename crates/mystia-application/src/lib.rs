//! Application Layer - Mystia
//!
//! Use cases and authorization decisions for the voice backend.
//!
//! ## Architecture
//!
//! The application layer:
//! - Holds the role policy as pure functions ([`policy`])
//! - Defines service interfaces consumed by the transport ([`domain_services`])
//! - Implements them by composing the domain ports ([`use_cases`])
//! - Has no dependencies on infrastructure or external frameworks
//!
//! ## Use Cases
//!
//! - Account registration with first-user bootstrap, and login
//! - Account administration (list users, grant or revoke admin)
//! - Channel listing, creation and joining

pub mod domain_services;
pub mod policy;
pub mod use_cases;

pub use domain_services::*;
pub use policy::Operation;
pub use use_cases::*;
