//! # Registry Storage
//!
//! Persistence layer for a multi-tenant research-publication registry.
//! Every entity (publications, tickets, messages, files, channel claims,
//! audit entries) lives in one wide-column table with a primary key and
//! three secondary indexes.
//!
//! ## Architecture
//!
//! ```text
//! Dao ──→ Key Composer ──→ Payload Codec ──→ Uniqueness ──→ TableStore
//!  ↑        (PK0..SK3)      (raw DEFLATE)    (record +        (engine)
//!  │                                          marker txn)        │
//!  └──────────── decode by discriminant ←── inflate / legacy ←───┘
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | One Identifier | Every record has exactly one identifier, unique within its type |
//! | 2 | Derived Keys | Index keys are pure functions of record attributes, recomputed on every encode |
//! | 3 | Fail Before I/O | A missing key attribute is an error before the engine is called |
//! | 4 | Lossless Payloads | `decode(encode(r)) == r` through both payload formats |
//! | 5 | At Most One | One uniqueness-constrained record per (type, resource) |
//! | 6 | Atomic Writes | Record and marker commit together or not at all |
//! | 7 | Join Order | Resource joins return (order prefix, type, identifier) ascending |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Pure domain logic (keys, records, codec, uniqueness, queries)
//! - `ports/` - Port traits (inbound API, outbound storage engine)
//! - `adapters/` - In-memory storage engine
//! - `service/` - Application service implementing the API
//!
//! ## Usage
//!
//! ```ignore
//! use registry_storage::{Dao, RecordRepository, RecordRepositoryApi, StorageConfig};
//!
//! let repository = RecordRepository::new_in_memory(StorageConfig::default());
//!
//! // Insert a publishing request; a second one for the same resource
//! // fails with StorageError::UniquenessConflict.
//! repository.create(&ticket)?;
//!
//! // The resource and everything attached to it, in join order.
//! let records = repository.fetch_resource_with_children(&customer, &resource_id)?;
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

#[cfg(test)]
mod test_utils;

// Re-export key types for convenience
pub use adapters::InMemoryTableStore;
pub use domain::codec::{CodecConfig, PayloadCodec, PayloadFormat};
pub use domain::errors::{DecodeError, EncodeError, KeyDerivationError, StorageError, StoreError};
pub use domain::identifiers::{CustomerId, IdentifierError, Owner, SortableIdentifier};
pub use domain::item::{AttributeValue, Item};
pub use domain::keys::{IndexKeys, IndexName, KeyPair};
pub use domain::query::{QueryBuilder, QueryDescriptor, SortKeyCondition};
pub use domain::record::{
    Dao, FilePayload, LogEntryPayload, MessagePayload, PublicationChannelPayload,
    PublicationStatus, Record, RecordHeader, RecordType, RecordVersion, ResourcePayload,
    TicketDao, TicketKind, TicketPayload, TicketStatus,
};
pub use domain::types::StorageConfig;
pub use domain::uniqueness::{build_unique_insert, UniqueInsert, UniquenessKey};
pub use domain::write::{ConditionalPut, PutCondition};
pub use ports::inbound::RecordRepositoryApi;
pub use ports::outbound::TableStore;
pub use service::RecordRepository;
