//! # Record Payloads
//!
//! Entity data carried inside the compressed payload attribute.
//!
//! Field semantics belong to the domain model; only the attributes the key
//! composer reads are typed. Everything else travels in `attributes` so
//! that schema changes in the domain model never touch the storage layer.

use crate::domain::errors::EncodeError;
use crate::domain::identifiers::SortableIdentifier;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Untyped domain fields, kept in canonical key order.
pub type Attributes = BTreeMap<String, Value>;

/// JSON names of a payload's typed fields.
///
/// `attributes` is flattened into the same JSON object as the typed fields,
/// so an attribute may not reuse one of these names.
pub trait TypedFields {
    const FIELDS: &'static [&'static str];

    fn attributes(&self) -> Option<&Attributes> {
        None
    }

    /// Reject attributes that would shadow a typed field on decode.
    fn check_attributes(&self) -> Result<(), EncodeError> {
        let reserved = self.attributes().and_then(|attributes| {
            attributes
                .keys()
                .find(|name| Self::FIELDS.contains(&name.as_str()))
        });
        match reserved {
            Some(attribute) => Err(EncodeError::ReservedAttribute {
                attribute: attribute.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// Lifecycle status of a publication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PublicationStatus {
    New,
    Draft,
    PublishedMetadata,
    Published,
    Unpublished,
    Deleted,
    DraftForDeletion,
}

impl PublicationStatus {
    /// Value written into the status index key.
    pub fn as_str(&self) -> &'static str {
        match self {
            PublicationStatus::New => "NEW",
            PublicationStatus::Draft => "DRAFT",
            PublicationStatus::PublishedMetadata => "PUBLISHED_METADATA",
            PublicationStatus::Published => "PUBLISHED",
            PublicationStatus::Unpublished => "UNPUBLISHED",
            PublicationStatus::Deleted => "DELETED",
            PublicationStatus::DraftForDeletion => "DRAFT_FOR_DELETION",
        }
    }
}

/// Workflow status of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    New,
    Pending,
    Completed,
    NotApplicable,
    Closed,
}

impl TicketStatus {
    /// Value written into the status index key.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::New => "NEW",
            TicketStatus::Pending => "PENDING",
            TicketStatus::Completed => "COMPLETED",
            TicketStatus::NotApplicable => "NOT_APPLICABLE",
            TicketStatus::Closed => "CLOSED",
        }
    }
}

/// A publication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePayload {
    pub status: PublicationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_title: Option<String>,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl ResourcePayload {
    pub fn new(status: PublicationStatus) -> Self {
        Self {
            status,
            main_title: None,
            attributes: Attributes::new(),
        }
    }
}

/// A ticket attached to exactly one resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketPayload {
    pub resource_identifier: SortableIdentifier,
    pub status: TicketStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub viewed_by: BTreeSet<String>,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl TicketPayload {
    pub fn new(resource_identifier: SortableIdentifier, status: TicketStatus) -> Self {
        Self {
            resource_identifier,
            status,
            assignee: None,
            viewed_by: BTreeSet::new(),
            attributes: Attributes::new(),
        }
    }
}

/// A message on a ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePayload {
    pub ticket_identifier: SortableIdentifier,
    pub resource_identifier: SortableIdentifier,
    pub sender: String,
    pub text: String,
}

/// A file attached to a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilePayload {
    pub resource_identifier: SortableIdentifier,
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    pub size: u64,
    #[serde(flatten)]
    pub attributes: Attributes,
}

/// A claim of a publication channel by a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationChannelPayload {
    pub channel_claim_id: String,
    pub resource_identifier: SortableIdentifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub attributes: Attributes,
}

/// An audit entry for a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntryPayload {
    pub resource_identifier: SortableIdentifier,
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performed_by: Option<String>,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl TypedFields for ResourcePayload {
    const FIELDS: &'static [&'static str] = &["status", "mainTitle"];

    fn attributes(&self) -> Option<&Attributes> {
        Some(&self.attributes)
    }
}

impl TypedFields for TicketPayload {
    const FIELDS: &'static [&'static str] = &["resourceIdentifier", "status", "assignee", "viewedBy"];

    fn attributes(&self) -> Option<&Attributes> {
        Some(&self.attributes)
    }
}

impl TypedFields for FilePayload {
    const FIELDS: &'static [&'static str] = &["resourceIdentifier", "fileName", "mimeType", "size"];

    fn attributes(&self) -> Option<&Attributes> {
        Some(&self.attributes)
    }
}

impl TypedFields for PublicationChannelPayload {
    const FIELDS: &'static [&'static str] = &["channelClaimId", "resourceIdentifier", "name"];

    fn attributes(&self) -> Option<&Attributes> {
        Some(&self.attributes)
    }
}

impl TypedFields for LogEntryPayload {
    const FIELDS: &'static [&'static str] = &["resourceIdentifier", "topic", "performedBy"];

    fn attributes(&self) -> Option<&Attributes> {
        Some(&self.attributes)
    }
}

impl TypedFields for MessagePayload {
    const FIELDS: &'static [&'static str] =
        &["ticketIdentifier", "resourceIdentifier", "sender", "text"];
}
