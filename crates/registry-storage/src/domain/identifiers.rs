//! # Identifiers
//!
//! Value types that feed the key composer: record identifiers, customer
//! URIs and owners.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;
use uuid::Uuid;

/// Errors raised when parsing identifier values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    #[error("identifier is empty")]
    Empty,

    #[error("identifier {0:?} contains the key delimiter")]
    ContainsDelimiter(String),

    #[error("customer id {value:?} is not an absolute URI: {reason}")]
    InvalidCustomerUri { value: String, reason: String },
}

/// Time-sortable unique record identifier.
///
/// New identifiers are UUIDv7 in hyphenated lowercase form. The leading
/// 48 bits are a millisecond timestamp, so lexicographic order on the
/// string is chronological order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SortableIdentifier(String);

impl SortableIdentifier {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::now_v7().hyphenated().to_string())
    }

    /// Wrap an existing identifier value.
    pub fn parse(value: impl Into<String>) -> Result<Self, IdentifierError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(IdentifierError::Empty);
        }
        if value.contains(crate::domain::keys::KEY_FIELDS_DELIMITER) {
            return Err(IdentifierError::ContainsDelimiter(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SortableIdentifier {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SortableIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SortableIdentifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SortableIdentifier {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<SortableIdentifier> for String {
    fn from(id: SortableIdentifier) -> Self {
        id.0
    }
}

/// URI of the owning organization.
///
/// The key composer only uses the short [`CustomerId::customer_identifier`],
/// the last non-empty path segment of the URI. The URI is stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CustomerId {
    value: String,
    uri: Url,
}

impl CustomerId {
    pub fn parse(value: impl Into<String>) -> Result<Self, IdentifierError> {
        let value = value.into();
        let uri = Url::parse(&value).map_err(|e| IdentifierError::InvalidCustomerUri {
            value: value.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self { value, uri })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Last non-empty path segment, ignoring query, fragment and trailing slashes.
    ///
    /// `https://x.org/42`, `https://x.org/42/` and `https://x.org/42#frag`
    /// all yield `42`. Returns `None` when the path has no segments.
    pub fn customer_identifier(&self) -> Option<&str> {
        self.uri
            .path_segments()?
            .rev()
            .find(|segment| !segment.is_empty())
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl TryFrom<String> for CustomerId {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<CustomerId> for String {
    fn from(id: CustomerId) -> Self {
        id.value
    }
}

/// User id owning a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Owner(String);

impl Owner {
    pub fn new(user: impl Into<String>) -> Self {
        Self(user.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
