//! # Query Builder
//!
//! Builds range-query descriptors for the table's indexes. Descriptors are
//! plain data; execution and pagination belong to the storage engine.
//!
//! ## Join Queries
//!
//! `by_resource(low, high)` targets the ByCustomerResource partition of one
//! resource with
//!
//! ```text
//! SK3 BETWEEN "<prefix(low)>:<low>" AND "<prefix(high)>:<high>~"
//! ```
//!
//! `~` is the largest printable ASCII character, so every identifier under
//! `high` falls inside the range. A single type uses `BEGINS_WITH`.

use crate::domain::errors::KeyDerivationError;
use crate::domain::identifiers::{CustomerId, Owner, SortableIdentifier};
use crate::domain::keys::composer::{
    join_fields, ordered_type_prefix, owner_partition_key, resource_pairing_key,
    resource_partition_key, status_partition_key, type_identifier_key, type_value_key,
};
use crate::domain::keys::{IndexName, KEY_FIELDS_DELIMITER, MAX_PRINTABLE_ASCII};
use crate::domain::record::RecordType;


/// Condition on the sort key of a range query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortKeyCondition {
    Equals(String),
    BeginsWith(String),
    /// Inclusive on both ends.
    Between { low: String, high: String },
}

impl SortKeyCondition {
    pub fn matches(&self, sort_key: &str) -> bool {
        match self {
            SortKeyCondition::Equals(value) => sort_key == value,
            SortKeyCondition::BeginsWith(prefix) => sort_key.starts_with(prefix.as_str()),
            SortKeyCondition::Between { low, high } => {
                low.as_str() <= sort_key && sort_key <= high.as_str()
            }
        }
    }
}

/// A query against one partition of one index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDescriptor {
    pub index: IndexName,
    pub partition_key: String,
    pub sort_key_condition: Option<SortKeyCondition>,
}

impl QueryDescriptor {
    pub fn new(index: IndexName, partition_key: impl Into<String>) -> Self {
        Self {
            index,
            partition_key: partition_key.into(),
            sort_key_condition: None,
        }
    }

    pub fn with_condition(mut self, condition: SortKeyCondition) -> Self {
        self.sort_key_condition = Some(condition);
        self
    }

    /// Whether an item with these key values belongs to the result.
    pub fn matches(&self, partition_key: &str, sort_key: &str) -> bool {
        partition_key == self.partition_key
            && self
                .sort_key_condition
                .as_ref()
                .map_or(true, |condition| condition.matches(sort_key))
    }
}

/// Query descriptor constructors.
pub struct QueryBuilder;

impl QueryBuilder {
    /// All records of types `low..=high` (join order) attached to a resource.
    pub fn by_resource(
        customer: &CustomerId,
        resource_identifier: &SortableIdentifier,
        low: RecordType,
        high: RecordType,
    ) -> Result<QueryDescriptor, KeyDerivationError> {
        let partition_key = resource_partition_key(low, Some(customer), resource_identifier)?;
        let low_bound = ordered_type_prefix(low)?;
        let mut high_bound = ordered_type_prefix(high)?;
        if low_bound > high_bound {
            return Err(KeyDerivationError::InvertedTypeRange { low, high });
        }
        high_bound.push(MAX_PRINTABLE_ASCII);

        Ok(
            QueryDescriptor::new(IndexName::ByCustomerResource, partition_key).with_condition(
                SortKeyCondition::Between {
                    low: low_bound,
                    high: high_bound,
                },
            ),
        )
    }

    /// All records of one type attached to a resource.
    pub fn by_resource_type(
        customer: &CustomerId,
        resource_identifier: &SortableIdentifier,
        record_type: RecordType,
    ) -> Result<QueryDescriptor, KeyDerivationError> {
        let partition_key = resource_partition_key(record_type, Some(customer), resource_identifier)?;
        let mut prefix = ordered_type_prefix(record_type)?;
        prefix.push(KEY_FIELDS_DELIMITER);

        Ok(QueryDescriptor::new(IndexName::ByCustomerResource, partition_key)
            .with_condition(SortKeyCondition::BeginsWith(prefix)))
    }

    /// Records of one type and status within a customer.
    pub fn by_type_customer_status(
        record_type: RecordType,
        customer: &CustomerId,
        status: &str,
    ) -> Result<QueryDescriptor, KeyDerivationError> {
        if !record_type.has_status() {
            return Err(KeyDerivationError::NoStatus { record_type });
        }
        let partition_key = status_partition_key(record_type, Some(customer), status)?;
        Ok(QueryDescriptor::new(IndexName::ByTypeCustomerStatus, partition_key))
    }

    /// Records of one type owned by one user.
    pub fn by_owner(
        record_type: RecordType,
        customer: &CustomerId,
        owner: &Owner,
    ) -> Result<QueryDescriptor, KeyDerivationError> {
        let partition_key = owner_partition_key(record_type, Some(customer), Some(owner))?;
        let prefix = join_fields(&[record_type.discriminant(), ""]);

        Ok(QueryDescriptor::new(IndexName::Primary, partition_key)
            .with_condition(SortKeyCondition::BeginsWith(prefix)))
    }

    /// The record keyed `PK = SK = Type:Identifier` (files).
    ///
    /// Other variants have no such key: owner-scoped records need their
    /// owner, channel claims are found by claim and log entries by resource.
    pub fn by_type_and_identifier(
        record_type: RecordType,
        identifier: &SortableIdentifier,
    ) -> Result<QueryDescriptor, KeyDerivationError> {
        if !record_type.keyed_by_type_identifier() {
            return Err(KeyDerivationError::NoIdentifierKey { record_type });
        }
        let key = type_identifier_key(record_type, identifier);
        Ok(QueryDescriptor::new(IndexName::ByTypeAndIdentifier, key.clone())
            .with_condition(SortKeyCondition::Equals(key)))
    }

    /// Every channel claim of one channel, across resources.
    pub fn by_channel_claim(channel_claim_id: &str) -> Result<QueryDescriptor, KeyDerivationError> {
        let partition_key =
            type_value_key(RecordType::PublicationChannel, "channelClaimId", channel_claim_id)?;
        Ok(QueryDescriptor::new(IndexName::ByTypeAndIdentifier, partition_key))
    }

    /// Audit log of one resource, oldest first.
    pub fn log_entries(resource_identifier: &SortableIdentifier) -> QueryDescriptor {
        let prefix = join_fields(&[RecordType::LogEntry.discriminant(), ""]);
        QueryDescriptor::new(
            IndexName::ByTypeAndIdentifier,
            resource_pairing_key(resource_identifier),
        )
        .with_condition(SortKeyCondition::BeginsWith(prefix))
    }
}
