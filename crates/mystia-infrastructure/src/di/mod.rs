//! Composition root
//!
//! Wires the infrastructure adapters into the application services. All
//! dependencies are injected as `Arc<dyn Trait>`; nothing downstream names a
//! concrete adapter.

pub mod bootstrap;

pub use bootstrap::*;
