//! # Domain Layer
//!
//! Pure domain logic for the registry storage layer. Nothing here performs
//! I/O; every operation is a deterministic function of its inputs apart
//! from identifier, version and timestamp generation.
//!
//! ## Modules
//!
//! - `identifiers` - Record identifiers, customer URIs, owners
//! - `keys` - Key Composer: primary and secondary index keys
//! - `record` - Record Envelope: the `Dao` tagged union and item encoding
//! - `codec` - Payload Codec: raw DEFLATE with legacy map fallback
//! - `item` - Flat attribute map exchanged with the storage engine
//! - `write` - Conditional puts
//! - `uniqueness` - Uniqueness markers and the two-item atomic insert
//! - `query` - Range-query descriptors
//! - `types` - Storage configuration
//! - `errors` - Domain error types

pub mod codec;
pub mod errors;
pub mod identifiers;
pub mod item;
pub mod keys;
pub mod query;
pub mod record;
pub mod types;
pub mod uniqueness;
pub mod write;
