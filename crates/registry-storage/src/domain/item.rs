//! # Item Shape
//!
//! The flat attribute map exchanged with the storage engine.
//!
//! Values are strings, binary blobs or maps. Binary is only used for the
//! compressed payload; maps only for the legacy uncompressed payload.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A stored item: attribute name to value.
pub type Item = BTreeMap<String, AttributeValue>;

/// One attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// String scalar (keys, discriminant, version).
    S(String),
    /// Binary blob (compressed payload).
    B(Vec<u8>),
    /// Map (legacy uncompressed payload).
    M(Map<String, Value>),
}

impl AttributeValue {
    pub fn as_string(&self) -> Option<&str> {
        match self {
            AttributeValue::S(value) => Some(value),
            _ => None,
        }
    }

    /// Kind name used in decode error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            AttributeValue::S(_) => "string",
            AttributeValue::B(_) => "binary",
            AttributeValue::M(_) => "map",
        }
    }
}

/// Declared kind of a stored payload attribute.
///
/// Selects the decode path on read: blobs are inflated, maps are the
/// pre-compression format and are parsed directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoredPayloadKind {
    Compressed,
    Legacy,
}

impl StoredPayloadKind {
    /// Tag the stored attribute by its declared kind. Strings carry no payload.
    pub fn of(value: &AttributeValue) -> Option<Self> {
        match value {
            AttributeValue::B(_) => Some(StoredPayloadKind::Compressed),
            AttributeValue::M(_) => Some(StoredPayloadKind::Legacy),
            AttributeValue::S(_) => None,
        }
    }
}
