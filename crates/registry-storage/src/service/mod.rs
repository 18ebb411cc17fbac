//! # Record Repository Service
//!
//! The application service implementing `RecordRepositoryApi`.
//!
//! ## Write Path
//!
//! 1. Derive every key (fails before any I/O)
//! 2. Encode the payload through the codec
//! 3. Wrap uniqueness-constrained inserts in the two-item transaction
//! 4. Hand the operations to the `TableStore`
//! 5. Map the engine's outcome to a typed result
//!
//! Reads reverse this: fetch or query, then decode by discriminant.

mod repository;

use crate::adapters::InMemoryTableStore;
use crate::domain::codec::PayloadCodec;
use crate::domain::types::StorageConfig;
use crate::ports::outbound::TableStore;

/// The record repository.
///
/// Stateless apart from its configuration: every call is a function of
/// its arguments and the engine's contents.
pub struct RecordRepository<S: TableStore> {
    /// The storage engine.
    pub(crate) store: S,
    /// Payload codec, built once from the configuration.
    pub(crate) codec: PayloadCodec,
    /// Service configuration.
    pub(crate) config: StorageConfig,
}

impl<S: TableStore> RecordRepository<S> {
    pub fn new(store: S, config: StorageConfig) -> Self {
        Self {
            store,
            codec: PayloadCodec::new(config.codec.clone()),
            config,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn codec(&self) -> &PayloadCodec {
        &self.codec
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }
}

impl RecordRepository<InMemoryTableStore> {
    /// Repository over a fresh in-memory table.
    pub fn new_in_memory(config: StorageConfig) -> Self {
        Self::new(InMemoryTableStore::new(), config)
    }
}
