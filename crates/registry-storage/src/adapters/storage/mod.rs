//! Storage Adapters
//!
//! Implementations of the `TableStore` trait.

mod memory;

pub use memory::InMemoryTableStore;
