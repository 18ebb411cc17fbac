//! # Adapters Module
//!
//! Adapter implementations for the registry storage layer.
//!
//! ## Modules
//!
//! - `storage`: `TableStore` implementations

pub mod storage;

pub use storage::InMemoryTableStore;
