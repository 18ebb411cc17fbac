//! # Key Composer
//!
//! Pure functions deriving primary and secondary index keys from record
//! attributes. Every function either returns a complete key or a
//! [`KeyDerivationError`]; a partial key is never produced.

use super::constants::*;
use super::order::order_prefix;
use crate::domain::errors::KeyDerivationError;
use crate::domain::identifiers::{CustomerId, Owner, SortableIdentifier};
use crate::domain::record::RecordType;

/// Join fields with the key delimiter.
pub fn join_fields(fields: &[&str]) -> String {
    let mut key = String::new();
    for (position, field) in fields.iter().enumerate() {
        if position > 0 {
            key.push(KEY_FIELDS_DELIMITER);
        }
        key.push_str(field);
    }
    key
}

/// Validate one key field: non-empty and free of the delimiter.
pub fn key_component<'a>(
    attribute: &'static str,
    value: &'a str,
) -> Result<&'a str, KeyDerivationError> {
    if value.is_empty() || value.contains(KEY_FIELDS_DELIMITER) {
        return Err(KeyDerivationError::InvalidComponent {
            attribute,
            value: value.to_string(),
        });
    }
    Ok(value)
}

/// Short customer identifier, required by every customer-scoped key.
pub fn customer_identifier(
    record_type: RecordType,
    customer: Option<&CustomerId>,
) -> Result<&str, KeyDerivationError> {
    let customer = customer.ok_or(KeyDerivationError::MissingAttribute {
        record_type,
        attribute: "customerId",
    })?;
    let identifier =
        customer
            .customer_identifier()
            .ok_or_else(|| KeyDerivationError::InvalidComponent {
                attribute: "customerId",
                value: customer.to_string(),
            })?;
    key_component("customerIdentifier", identifier)
}

/// `Type:Identifier`, the sort key shared by the primary and status indexes.
pub fn type_identifier_key(record_type: RecordType, identifier: &SortableIdentifier) -> String {
    join_fields(&[record_type.discriminant(), identifier.as_str()])
}

/// `Type:CustomerIdentifier:Owner`, the primary partition key of owner-scoped variants.
pub fn owner_partition_key(
    record_type: RecordType,
    customer: Option<&CustomerId>,
    owner: Option<&Owner>,
) -> Result<String, KeyDerivationError> {
    let customer = customer_identifier(record_type, customer)?;
    let owner = owner.ok_or(KeyDerivationError::MissingAttribute {
        record_type,
        attribute: "owner",
    })?;
    let owner = key_component("owner", owner.as_str())?;
    Ok(join_fields(&[record_type.discriminant(), customer, owner]))
}

/// `Type:Customer:CustomerIdentifier:Status:Status`.
pub fn status_partition_key(
    record_type: RecordType,
    customer: Option<&CustomerId>,
    status: &str,
) -> Result<String, KeyDerivationError> {
    let customer = customer_identifier(record_type, customer)?;
    let status = key_component("status", status)?;
    Ok(join_fields(&[
        record_type.discriminant(),
        CUSTOMER_INDEX_FIELD_PREFIX,
        customer,
        STATUS_INDEX_FIELD_PREFIX,
        status,
    ]))
}

/// `Customer:CustomerIdentifier:Resource:ResourceIdentifier`.
///
/// `record_type` only names the variant in error messages.
pub fn resource_partition_key(
    record_type: RecordType,
    customer: Option<&CustomerId>,
    resource_identifier: &SortableIdentifier,
) -> Result<String, KeyDerivationError> {
    let customer = customer_identifier(record_type, customer)?;
    Ok(join_fields(&[
        CUSTOMER_INDEX_FIELD_PREFIX,
        customer,
        RESOURCE_INDEX_FIELD_PREFIX,
        resource_identifier.as_str(),
    ]))
}

/// `OrderPrefix:Type`, the sort-key prefix of one variant in the join index.
pub fn ordered_type_prefix(record_type: RecordType) -> Result<String, KeyDerivationError> {
    let prefix = order_prefix(record_type).ok_or(KeyDerivationError::NotJoinable { record_type })?;
    let mut key = String::with_capacity(2 + record_type.discriminant().len());
    key.push(prefix);
    key.push(KEY_FIELDS_DELIMITER);
    key.push_str(record_type.discriminant());
    Ok(key)
}

/// `OrderPrefix:Type:Identifier`.
pub fn resource_sort_key(
    record_type: RecordType,
    identifier: &SortableIdentifier,
) -> Result<String, KeyDerivationError> {
    let prefix = ordered_type_prefix(record_type)?;
    Ok(join_fields(&[&prefix, identifier.as_str()]))
}

/// `Resource:ResourceIdentifier`, the pairing key of resource-keyed relationship records.
pub fn resource_pairing_key(resource_identifier: &SortableIdentifier) -> String {
    join_fields(&[RESOURCE_INDEX_FIELD_PREFIX, resource_identifier.as_str()])
}

/// `Type:Value` for an arbitrary identifying value, validated as a key field.
pub fn type_value_key(
    record_type: RecordType,
    attribute: &'static str,
    value: &str,
) -> Result<String, KeyDerivationError> {
    let value = key_component(attribute, value)?;
    Ok(join_fields(&[record_type.discriminant(), value]))
}
