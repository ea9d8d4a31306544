//! Transport layer
//!
//! Carries RPC calls over HTTP: each call is `POST /<service>/<method>` with
//! a JSON body, and the `authorization` header as call metadata.

pub mod http;
pub mod types;

pub use http::{HttpTransport, HttpTransportConfig};
