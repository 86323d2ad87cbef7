// Adapters layer: concrete store implementations.

pub mod memory;

pub use memory::{InMemoryMemberStore, InMemoryUserStore};
