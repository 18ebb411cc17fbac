//! # Inbound Ports (Driving Ports)
//!
//! The API the REST layer, event handlers and import pipeline use to
//! persist and read records.

use crate::domain::errors::StorageError;
use crate::domain::identifiers::{CustomerId, Owner, SortableIdentifier};
use crate::domain::keys::KeyPair;
use crate::domain::query::QueryDescriptor;
use crate::domain::record::{Dao, RecordType};

/// Primary API of the registry storage layer.
///
/// Every write replaces a whole item; there are no partial updates.
pub trait RecordRepositoryApi {
    /// Insert a new record.
    ///
    /// Uniqueness-constrained variants are inserted together with their
    /// marker in one transaction.
    ///
    /// ## Errors
    ///
    /// - `KeyDerivation`: a key attribute is missing; nothing was written
    /// - `UniquenessConflict`: another record holds the uniqueness key
    /// - `RecordExists`: the primary key is taken
    /// - `StorageUnavailable`: the engine failed
    fn create(&self, record: &Dao) -> Result<(), StorageError>;

    /// Write a record, replacing whatever is stored under its key.
    ///
    /// Uniqueness-constrained variants are only replaced, never inserted:
    /// a new one must come through `create`.
    ///
    /// ## Errors
    ///
    /// - `NotFound`: a constrained record is not stored yet
    fn put(&self, record: &Dao) -> Result<(), StorageError>;

    /// Replace an existing record.
    ///
    /// ## Errors
    ///
    /// - `NotFound`: nothing is stored under the record's key
    fn update(&self, record: &Dao) -> Result<(), StorageError>;

    /// Read a record by primary key.
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no item under this key
    /// - `Decode`: the stored item is corrupt
    fn fetch(&self, key: &KeyPair) -> Result<Dao, StorageError>;

    /// Read an owner-scoped record.
    fn fetch_owned(
        &self,
        record_type: RecordType,
        customer: &CustomerId,
        owner: &Owner,
        identifier: &SortableIdentifier,
    ) -> Result<Dao, StorageError>;

    /// Read a record keyed `Type:Identifier` (files).
    ///
    /// ## Errors
    ///
    /// - `KeyDerivation(NoIdentifierKey)`: the type is not keyed by
    ///   identifier; nothing was read
    /// - `NotFound`: no record with this identifier
    fn fetch_by_identifier(
        &self,
        record_type: RecordType,
        identifier: &SortableIdentifier,
    ) -> Result<Dao, StorageError>;

    /// Run a query and decode every returned item, in index order.
    fn query(&self, query: &QueryDescriptor) -> Result<Vec<Dao>, StorageError>;

    /// A resource followed by every record attached to it, in join order.
    fn fetch_resource_with_children(
        &self,
        customer: &CustomerId,
        resource_identifier: &SortableIdentifier,
    ) -> Result<Vec<Dao>, StorageError>;

    /// Records of one type and status within a customer.
    fn list_by_status(
        &self,
        record_type: RecordType,
        customer: &CustomerId,
        status: &str,
    ) -> Result<Vec<Dao>, StorageError>;

    /// Records of one type owned by one user.
    fn list_by_owner(
        &self,
        record_type: RecordType,
        customer: &CustomerId,
        owner: &Owner,
    ) -> Result<Vec<Dao>, StorageError>;
}
