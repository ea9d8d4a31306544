//! Storage adapters
//!
//! Only an in-memory store ships today; anything implementing the
//! repository traits can replace it.

mod memory;

pub use memory::InMemoryStore;
