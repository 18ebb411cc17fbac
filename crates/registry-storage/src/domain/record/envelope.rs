//! # Record Envelope
//!
//! Header fields shared by every variant, the opaque version, and the
//! generic `Record<P>` pairing a header with a variant payload.
//!
//! Each concrete record implements the key capability traits it takes
//! part in. Key attributes are derived through those traits on every
//! encode and have no setter.

use super::payloads::{
    FilePayload, LogEntryPayload, MessagePayload, PublicationChannelPayload, ResourcePayload,
    TicketPayload,
};
use super::record_type::{RecordType, TicketKind};
use crate::domain::errors::KeyDerivationError;
use crate::domain::identifiers::{CustomerId, Owner, SortableIdentifier};
use crate::domain::keys::composer::{resource_pairing_key, type_identifier_key, type_value_key};
use crate::domain::keys::{
    IdentifiedByType, JoinWithResource, KeyPair, Keyed, OwnerScoped, WithStatus,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Fields every stored record carries inside its payload envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordHeader {
    pub identifier: SortableIdentifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<CustomerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
    pub created_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
}

impl RecordHeader {
    /// Header for a new record: fresh identifier, both dates set to now.
    pub fn new(customer_id: Option<CustomerId>, owner: Option<Owner>) -> Self {
        let now = Utc::now();
        Self {
            identifier: SortableIdentifier::new(),
            customer_id,
            owner,
            created_date: now,
            modified_date: now,
        }
    }

    /// Replace the generated identifier.
    pub fn with_identifier(mut self, identifier: SortableIdentifier) -> Self {
        self.identifier = identifier;
        self
    }
}

/// Opaque version token, regenerated whenever a record is built from a
/// domain object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordVersion(String);

impl RecordVersion {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap a version read from storage.
    pub fn from_stored(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A header, a variant payload and a version.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<P> {
    pub header: RecordHeader,
    pub payload: P,
    version: RecordVersion,
}

impl<P> Record<P> {
    /// Build a record from a domain payload with a fresh version.
    pub fn new(header: RecordHeader, payload: P) -> Self {
        Self {
            header,
            payload,
            version: RecordVersion::generate(),
        }
    }

    /// Rebuild a record read from storage, keeping its version.
    pub fn restore(header: RecordHeader, payload: P, version: RecordVersion) -> Self {
        Self {
            header,
            payload,
            version,
        }
    }

    pub fn version(&self) -> &RecordVersion {
        &self.version
    }

    pub fn refresh_version(&mut self) {
        self.version = RecordVersion::generate();
    }
}

pub type ResourceDao = Record<ResourcePayload>;
pub type MessageDao = Record<MessagePayload>;
pub type FileDao = Record<FilePayload>;
pub type PublicationChannelDao = Record<PublicationChannelPayload>;
pub type LogEntryDao = Record<LogEntryPayload>;

/// A ticket record. The kind selects the type discriminant.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketDao {
    pub kind: TicketKind,
    pub record: Record<TicketPayload>,
}

// Resource

impl Keyed for ResourceDao {
    fn record_type(&self) -> RecordType {
        RecordType::Resource
    }

    fn identifier(&self) -> &SortableIdentifier {
        &self.header.identifier
    }
}

impl OwnerScoped for ResourceDao {
    fn customer_id(&self) -> Option<&CustomerId> {
        self.header.customer_id.as_ref()
    }

    fn owner(&self) -> Option<&Owner> {
        self.header.owner.as_ref()
    }
}

impl WithStatus for ResourceDao {
    fn status(&self) -> &'static str {
        self.payload.status.as_str()
    }
}

impl JoinWithResource for ResourceDao {
    fn join_customer_id(&self) -> Option<&CustomerId> {
        self.header.customer_id.as_ref()
    }

    /// A resource joins under its own identifier.
    fn resource_identifier(&self) -> &SortableIdentifier {
        &self.header.identifier
    }
}

// Tickets

impl Keyed for TicketDao {
    fn record_type(&self) -> RecordType {
        self.kind.record_type()
    }

    fn identifier(&self) -> &SortableIdentifier {
        &self.record.header.identifier
    }
}

impl OwnerScoped for TicketDao {
    fn customer_id(&self) -> Option<&CustomerId> {
        self.record.header.customer_id.as_ref()
    }

    fn owner(&self) -> Option<&Owner> {
        self.record.header.owner.as_ref()
    }
}

impl WithStatus for TicketDao {
    fn status(&self) -> &'static str {
        self.record.payload.status.as_str()
    }
}

impl JoinWithResource for TicketDao {
    fn join_customer_id(&self) -> Option<&CustomerId> {
        self.record.header.customer_id.as_ref()
    }

    fn resource_identifier(&self) -> &SortableIdentifier {
        &self.record.payload.resource_identifier
    }
}

// Message

impl Keyed for MessageDao {
    fn record_type(&self) -> RecordType {
        RecordType::Message
    }

    fn identifier(&self) -> &SortableIdentifier {
        &self.header.identifier
    }
}

impl OwnerScoped for MessageDao {
    fn customer_id(&self) -> Option<&CustomerId> {
        self.header.customer_id.as_ref()
    }

    fn owner(&self) -> Option<&Owner> {
        self.header.owner.as_ref()
    }
}

impl JoinWithResource for MessageDao {
    fn join_customer_id(&self) -> Option<&CustomerId> {
        self.header.customer_id.as_ref()
    }

    fn resource_identifier(&self) -> &SortableIdentifier {
        &self.payload.resource_identifier
    }
}

// File

impl Keyed for FileDao {
    fn record_type(&self) -> RecordType {
        RecordType::File
    }

    fn identifier(&self) -> &SortableIdentifier {
        &self.header.identifier
    }
}

impl JoinWithResource for FileDao {
    fn join_customer_id(&self) -> Option<&CustomerId> {
        self.header.customer_id.as_ref()
    }

    fn resource_identifier(&self) -> &SortableIdentifier {
        &self.payload.resource_identifier
    }
}

impl IdentifiedByType for FileDao {}

// Publication channel

impl Keyed for PublicationChannelDao {
    fn record_type(&self) -> RecordType {
        RecordType::PublicationChannel
    }

    fn identifier(&self) -> &SortableIdentifier {
        &self.header.identifier
    }
}

impl IdentifiedByType for PublicationChannelDao {
    /// `PK = PublicationChannel:ChannelClaimId`, `SK = Resource:ResourceIdentifier`.
    fn by_type_and_identifier_key(&self) -> Result<KeyPair, KeyDerivationError> {
        let partition_key = type_value_key(
            RecordType::PublicationChannel,
            "channelClaimId",
            &self.payload.channel_claim_id,
        )?;
        let sort_key = resource_pairing_key(&self.payload.resource_identifier);
        Ok(KeyPair::new(partition_key, sort_key))
    }
}

// Log entry

impl Keyed for LogEntryDao {
    fn record_type(&self) -> RecordType {
        RecordType::LogEntry
    }

    fn identifier(&self) -> &SortableIdentifier {
        &self.header.identifier
    }
}

impl IdentifiedByType for LogEntryDao {
    /// `PK = Resource:ResourceIdentifier`, `SK = LogEntry:Identifier`.
    fn by_type_and_identifier_key(&self) -> Result<KeyPair, KeyDerivationError> {
        Ok(KeyPair::new(
            resource_pairing_key(&self.payload.resource_identifier),
            type_identifier_key(RecordType::LogEntry, &self.header.identifier),
        ))
    }
}
