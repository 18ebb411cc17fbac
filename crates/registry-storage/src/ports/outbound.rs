//! # Outbound Ports (Driven Ports)
//!
//! The storage-engine contract this library requires the host application
//! to implement.
//!
//! ## Engine Requirements
//!
//! - Point reads by primary key
//! - Partition queries on any index with EQ, BEGINS_WITH or BETWEEN on the
//!   sort key, results ordered by that index's sort key ascending
//! - Per-item conditional puts
//! - Multi-item transactions that commit all puts or none
//!
//! Retries, timeouts and pagination are the engine client's concern.

use crate::domain::errors::StoreError;
use crate::domain::item::Item;
use crate::domain::keys::KeyPair;
use crate::domain::query::QueryDescriptor;
use crate::domain::write::ConditionalPut;
use std::sync::Arc;

/// Abstract interface for the wide-column table.
///
/// Production: a document-store client owned by the host application.
/// Testing: `InMemoryTableStore` (adapters/storage/memory.rs)
///
/// Receivers are `&self`: concurrent writers race inside the engine, and
/// the engine's conditional writes decide the winner.
pub trait TableStore: Send + Sync {
    /// Get an item by primary key.
    fn get(&self, key: &KeyPair) -> Result<Option<Item>, StoreError>;

    /// Every item in one index partition that matches the sort-key condition,
    /// ordered by the index sort key.
    fn query(&self, query: &QueryDescriptor) -> Result<Vec<Item>, StoreError>;

    /// Put one item.
    ///
    /// A failed condition is `ConditionFailed { failed_items: [0] }`.
    fn put_item(&self, put: ConditionalPut) -> Result<(), StoreError>;

    /// Put several items atomically.
    ///
    /// ## Atomicity
    ///
    /// Either every put is applied or none is. If any condition fails the
    /// error lists the positions of the failed puts.
    fn transact_write(&self, puts: Vec<ConditionalPut>) -> Result<(), StoreError>;
}

impl<T: TableStore + ?Sized> TableStore for Arc<T> {
    fn get(&self, key: &KeyPair) -> Result<Option<Item>, StoreError> {
        (**self).get(key)
    }

    fn query(&self, query: &QueryDescriptor) -> Result<Vec<Item>, StoreError> {
        (**self).query(query)
    }

    fn put_item(&self, put: ConditionalPut) -> Result<(), StoreError> {
        (**self).put_item(put)
    }

    fn transact_write(&self, puts: Vec<ConditionalPut>) -> Result<(), StoreError> {
        (**self).transact_write(puts)
    }
}
