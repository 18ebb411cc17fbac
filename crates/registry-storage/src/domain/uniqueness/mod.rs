//! # Uniqueness Enforcement
//!
//! Emulates a unique index on a non-key attribute with a second item whose
//! primary key *is* the unique value.
//!
//! ## Protocol
//!
//! 1. Derive `UniquenessKey = Type:DefiningIdentifier`
//! 2. Build two inserts conditioned on "key does not exist": the record at
//!    position 0 and a marker item keyed `PK0 = SK0 = UniquenessKey` at
//!    position 1
//! 3. Submit both as one transaction
//! 4. Map the engine's outcome: a failed marker condition is a
//!    [`StorageError::UniquenessConflict`], a failed record condition alone
//!    is [`StorageError::RecordExists`]
//!
//! The marker carries only its key and a type attribute. Nothing queries it.

use crate::domain::errors::{KeyDerivationError, StorageError, StoreError};
use crate::domain::item::{AttributeValue, Item};
use crate::domain::keys::composer::type_value_key;
use crate::domain::keys::{IndexKeys, KeyPair, TYPE_ATTRIBUTE};
use crate::domain::record::{Dao, RecordType};
use crate::domain::write::ConditionalPut;
use std::fmt;


/// Type attribute of marker items.
pub const UNIQUENESS_MARKER_TYPE: &str = "UniquenessMarker";

/// `Type:DefiningIdentifier`, occupied by at most one record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UniquenessKey(String);

impl UniquenessKey {
    pub fn new(record_type: RecordType, defining_value: &str) -> Result<Self, KeyDerivationError> {
        type_value_key(record_type, "uniquenessKey", defining_value).map(Self)
    }

    /// The key of a uniqueness-constrained record, `None` for other variants.
    ///
    /// Constrained variants allow one record per resource.
    pub fn for_record(record: &Dao) -> Result<Option<Self>, KeyDerivationError> {
        let record_type = record.record_type();
        if !record_type.is_uniqueness_constrained() {
            return Ok(None);
        }
        Self::new(record_type, record.resource_identifier().as_str()).map(Some)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary key of the marker item.
    pub fn marker_key(&self) -> KeyPair {
        KeyPair::new(self.0.clone(), self.0.clone())
    }

    /// The marker item occupying this key.
    pub fn marker_item(&self) -> Item {
        let keys = IndexKeys {
            primary: self.marker_key(),
            by_type_customer_status: None,
            by_type_and_identifier: None,
            by_customer_resource: None,
        };
        let mut item = Item::new();
        item.insert(
            TYPE_ATTRIBUTE.to_string(),
            AttributeValue::S(UNIQUENESS_MARKER_TYPE.to_string()),
        );
        keys.write_into(&mut item);
        item
    }
}

impl fmt::Display for UniquenessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The two-item atomic insert for one record and its uniqueness key.
#[derive(Debug, Clone, PartialEq)]
pub struct UniqueInsert {
    pub uniqueness_key: UniquenessKey,
    pub record_key: KeyPair,
    pub operations: Vec<ConditionalPut>,
}

impl UniqueInsert {
    /// Position of the record put in the transaction.
    pub const RECORD_POSITION: usize = 0;
    /// Position of the marker put in the transaction.
    pub const MARKER_POSITION: usize = 1;

    /// Map the engine's transaction outcome to a typed result.
    ///
    /// An engine that cannot name the failed operation reports an empty
    /// list; that is treated as a uniqueness conflict.
    pub fn interpret(
        uniqueness_key: &UniquenessKey,
        record_key: &KeyPair,
        outcome: Result<(), StoreError>,
    ) -> Result<(), StorageError> {
        match outcome {
            Ok(()) => Ok(()),
            Err(StoreError::ConditionFailed { failed_items })
                if failed_items.is_empty() || failed_items.contains(&Self::MARKER_POSITION) =>
            {
                Err(StorageError::UniquenessConflict {
                    uniqueness_key: uniqueness_key.to_string(),
                })
            }
            Err(StoreError::ConditionFailed { .. }) => Err(StorageError::RecordExists {
                partition_key: record_key.partition_key.clone(),
                sort_key: record_key.sort_key.clone(),
            }),
            Err(other) => Err(StorageError::StorageUnavailable(other)),
        }
    }
}

/// Build the atomic two-item insert for `(record, uniqueness_key)`.
///
/// `record_key` and `record_item` are the encoded record; the caller
/// derives them before calling so key failures surface before this point.
pub fn build_unique_insert(
    record_key: KeyPair,
    record_item: Item,
    uniqueness_key: UniquenessKey,
) -> UniqueInsert {
    let marker = ConditionalPut::insert(uniqueness_key.marker_key(), uniqueness_key.marker_item());
    let record = ConditionalPut::insert(record_key.clone(), record_item);
    UniqueInsert {
        uniqueness_key,
        record_key,
        operations: vec![record, marker],
    }
}
