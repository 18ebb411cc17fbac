//! # Domain Errors
//!
//! Error types for the registry storage layer.
//!
//! ## Design Principles
//!
//! - Key derivation failures are raised before any I/O is attempted
//! - Decode failures mean corrupt data and are never retried here
//! - A uniqueness guard failure is its own variant, never a generic store error
//! - Transport failures from the engine are propagated unchanged

use crate::domain::record::RecordType;
use thiserror::Error;

/// A key could not be derived from a record's attributes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyDerivationError {
    /// An attribute required by the variant's key scheme is absent.
    #[error("cannot derive key for {record_type}: missing {attribute}")]
    MissingAttribute {
        record_type: RecordType,
        attribute: &'static str,
    },

    /// A key component is empty or contains the key delimiter.
    #[error("invalid key component {attribute}: {value:?}")]
    InvalidComponent {
        attribute: &'static str,
        value: String,
    },

    /// The variant has no position in the resource join index.
    #[error("{record_type} is not joined to resources")]
    NotJoinable { record_type: RecordType },

    /// The variant has no status index projection.
    #[error("{record_type} carries no status")]
    NoStatus { record_type: RecordType },

    /// The variant has no `Type:Identifier` key to look it up by.
    #[error("{record_type} cannot be looked up by identifier alone")]
    NoIdentifierKey { record_type: RecordType },

    /// The lower bound of a type range sorts after the upper bound.
    #[error("inverted type range: {low} sorts after {high}")]
    InvertedTypeRange { low: RecordType, high: RecordType },
}

/// A stored item could not be turned back into a record.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A required attribute is absent from the stored item.
    #[error("stored item has no {attribute} attribute")]
    MissingAttribute { attribute: &'static str },

    /// The type discriminant does not name a known variant.
    #[error("unknown record type: {discriminant:?}")]
    UnknownRecordType { discriminant: String },

    /// An attribute holds a different kind of value than expected.
    #[error("attribute {attribute} holds {found}, expected {expected}")]
    UnexpectedAttributeKind {
        attribute: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// The compressed payload is not a valid raw DEFLATE stream.
    #[error("payload inflate failed: {0}")]
    Inflate(#[source] std::io::Error),

    /// The inflated payload is not UTF-8.
    #[error("payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The payload JSON does not match the variant's schema.
    #[error("payload JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),

    /// The inflated payload exceeds the configured size limit.
    #[error("inflated payload exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },
}

/// A record could not be turned into a storable item.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The payload could not be serialized to JSON.
    #[error("payload serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The DEFLATE encoder failed.
    #[error("payload compression failed: {0}")]
    Compression(#[source] std::io::Error),

    /// Legacy map format requires a JSON object payload.
    #[error("legacy payload format requires a JSON object")]
    NotAnObject,

    /// An untyped attribute reuses the name of a typed payload field.
    #[error("attribute {attribute:?} collides with a typed payload field")]
    ReservedAttribute { attribute: String },
}

/// Errors reported by the external storage engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A conditional write was rejected.
    ///
    /// `failed_items` holds the positions of the operations whose condition
    /// did not hold. For a single put it is `[0]`. Engines that cannot tell
    /// which operation failed report an empty list.
    #[error("condition check failed on operations {failed_items:?}")]
    ConditionFailed { failed_items: Vec<usize> },

    /// Transport failure or engine outage.
    #[error("store unavailable: {message}")]
    Unavailable { message: String },

    /// Request rate exceeded the engine's capacity.
    #[error("store throttled: {message}")]
    Throttled { message: String },
}

/// Errors surfaced by the registry storage layer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Key derivation failed; no I/O was attempted.
    #[error("key derivation failed: {0}")]
    KeyDerivation(#[from] KeyDerivationError),

    /// Stored data is corrupt.
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),

    /// Record could not be encoded for storage.
    #[error("encode failed: {0}")]
    Encode(#[from] EncodeError),

    /// Another record already holds this uniqueness key.
    #[error("uniqueness conflict on {uniqueness_key}")]
    UniquenessConflict { uniqueness_key: String },

    /// A record with this primary key already exists.
    #[error("record already exists: {partition_key} / {sort_key}")]
    RecordExists {
        partition_key: String,
        sort_key: String,
    },

    /// No record with this primary key exists.
    #[error("record not found: {partition_key} / {sort_key}")]
    NotFound {
        partition_key: String,
        sort_key: String,
    },

    /// Transport or throttling failure from the storage engine.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(StoreError),
}

impl StorageError {
    /// True when the failure is a uniqueness or primary-key collision.
    ///
    /// Callers use this to branch between "already exists" and "unavailable".
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            StorageError::UniquenessConflict { .. } | StorageError::RecordExists { .. }
        )
    }
}

impl From<StoreError> for StorageError {
    fn from(err: StoreError) -> Self {
        StorageError::StorageUnavailable(err)
    }
}
