//! # Index Descriptors
//!
//! The primary key and the three secondary indexes of the table, and the
//! key pairs a record projects into them.

use super::constants::*;
use crate::domain::item::{AttributeValue, Item};
use std::fmt;

/// The table's primary index and its secondary indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexName {
    /// `PK0 = Type:CustomerIdentifier:Owner`, `SK0 = Type:Identifier`
    Primary,
    /// `PK1 = Type:Customer:CustomerIdentifier:Status:Status`, `SK1 = Type:Identifier`
    ByTypeCustomerStatus,
    /// `PK2 = Type:Identifier` (or a pairing key), `SK2 = Type:Identifier`
    ByTypeAndIdentifier,
    /// `PK3 = Customer:CustomerIdentifier:Resource:ResourceIdentifier`,
    /// `SK3 = OrderPrefix:Type:Identifier`
    ByCustomerResource,
}

impl IndexName {
    /// All indexes, primary first.
    pub const ALL: [IndexName; 4] = [
        IndexName::Primary,
        IndexName::ByTypeCustomerStatus,
        IndexName::ByTypeAndIdentifier,
        IndexName::ByCustomerResource,
    ];

    /// Index name as known to the storage engine. `None` for the table itself.
    pub fn index_name(&self) -> Option<&'static str> {
        match self {
            IndexName::Primary => None,
            IndexName::ByTypeCustomerStatus => Some(BY_TYPE_CUSTOMER_STATUS_INDEX_NAME),
            IndexName::ByTypeAndIdentifier => Some(BY_TYPE_AND_IDENTIFIER_INDEX_NAME),
            IndexName::ByCustomerResource => Some(BY_CUSTOMER_RESOURCE_INDEX_NAME),
        }
    }

    pub fn partition_key_attribute(&self) -> &'static str {
        match self {
            IndexName::Primary => PRIMARY_KEY_PARTITION_KEY_NAME,
            IndexName::ByTypeCustomerStatus => BY_TYPE_CUSTOMER_STATUS_PARTITION_KEY_NAME,
            IndexName::ByTypeAndIdentifier => BY_TYPE_AND_IDENTIFIER_PARTITION_KEY_NAME,
            IndexName::ByCustomerResource => BY_CUSTOMER_RESOURCE_PARTITION_KEY_NAME,
        }
    }

    pub fn sort_key_attribute(&self) -> &'static str {
        match self {
            IndexName::Primary => PRIMARY_KEY_SORT_KEY_NAME,
            IndexName::ByTypeCustomerStatus => BY_TYPE_CUSTOMER_STATUS_SORT_KEY_NAME,
            IndexName::ByTypeAndIdentifier => BY_TYPE_AND_IDENTIFIER_SORT_KEY_NAME,
            IndexName::ByCustomerResource => BY_CUSTOMER_RESOURCE_SORT_KEY_NAME,
        }
    }
}

impl fmt::Display for IndexName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.index_name().unwrap_or("Primary"))
    }
}

/// A partition key and sort key pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyPair {
    pub partition_key: String,
    pub sort_key: String,
}

impl KeyPair {
    pub fn new(partition_key: impl Into<String>, sort_key: impl Into<String>) -> Self {
        Self {
            partition_key: partition_key.into(),
            sort_key: sort_key.into(),
        }
    }

    /// Read the pair an item carries for `index`, if both attributes are strings.
    pub fn from_item(item: &Item, index: IndexName) -> Option<Self> {
        let partition_key = item.get(index.partition_key_attribute())?.as_string()?;
        let sort_key = item.get(index.sort_key_attribute())?.as_string()?;
        Some(Self::new(partition_key, sort_key))
    }
}

impl fmt::Display for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.partition_key, self.sort_key)
    }
}

/// Every key a record projects into the table.
///
/// Computed from the record on each encode; never stored on the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexKeys {
    pub primary: KeyPair,
    pub by_type_customer_status: Option<KeyPair>,
    pub by_type_and_identifier: Option<KeyPair>,
    pub by_customer_resource: Option<KeyPair>,
}

impl IndexKeys {
    /// The pair for `index`, if this record is projected into it.
    pub fn get(&self, index: IndexName) -> Option<&KeyPair> {
        match index {
            IndexName::Primary => Some(&self.primary),
            IndexName::ByTypeCustomerStatus => self.by_type_customer_status.as_ref(),
            IndexName::ByTypeAndIdentifier => self.by_type_and_identifier.as_ref(),
            IndexName::ByCustomerResource => self.by_customer_resource.as_ref(),
        }
    }

    /// Write all present key pairs as string attributes.
    pub fn write_into(&self, item: &mut Item) {
        for index in IndexName::ALL {
            if let Some(pair) = self.get(index) {
                item.insert(
                    index.partition_key_attribute().to_string(),
                    AttributeValue::S(pair.partition_key.clone()),
                );
                item.insert(
                    index.sort_key_attribute().to_string(),
                    AttributeValue::S(pair.sort_key.clone()),
                );
            }
        }
    }
}
