//! # Dao
//!
//! The closed tagged union over every stored variant.
//!
//! Key derivation and payload dispatch match exhaustively on the variant,
//! so adding a variant is a compile error until every scheme handles it.

use super::envelope::{
    FileDao, LogEntryDao, MessageDao, PublicationChannelDao, Record, RecordHeader, RecordVersion,
    ResourceDao, TicketDao,
};
use super::payloads::{
    FilePayload, LogEntryPayload, MessagePayload, PublicationChannelPayload, ResourcePayload,
    TicketPayload,
};
use super::record_type::{RecordType, TicketKind};
use crate::domain::errors::KeyDerivationError;
use crate::domain::identifiers::{CustomerId, Owner, SortableIdentifier};
use crate::domain::keys::{
    IdentifiedByType, IndexKeys, JoinWithResource, KeyPair, Keyed, OwnerScoped, WithStatus,
};

/// A stored record of any variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Dao {
    Resource(ResourceDao),
    Ticket(TicketDao),
    Message(MessageDao),
    File(FileDao),
    PublicationChannel(PublicationChannelDao),
    LogEntry(LogEntryDao),
}

impl Dao {
    pub fn resource(customer_id: CustomerId, owner: Owner, payload: ResourcePayload) -> Self {
        Dao::Resource(Record::new(
            RecordHeader::new(Some(customer_id), Some(owner)),
            payload,
        ))
    }

    pub fn ticket(
        kind: TicketKind,
        customer_id: CustomerId,
        owner: Owner,
        payload: TicketPayload,
    ) -> Self {
        Dao::Ticket(TicketDao {
            kind,
            record: Record::new(RecordHeader::new(Some(customer_id), Some(owner)), payload),
        })
    }

    pub fn message(customer_id: CustomerId, owner: Owner, payload: MessagePayload) -> Self {
        Dao::Message(Record::new(
            RecordHeader::new(Some(customer_id), Some(owner)),
            payload,
        ))
    }

    /// Files join their resource, so the customer is required.
    pub fn file(customer_id: CustomerId, payload: FilePayload) -> Self {
        Dao::File(Record::new(RecordHeader::new(Some(customer_id), None), payload))
    }

    pub fn publication_channel(
        customer_id: Option<CustomerId>,
        payload: PublicationChannelPayload,
    ) -> Self {
        Dao::PublicationChannel(Record::new(RecordHeader::new(customer_id, None), payload))
    }

    pub fn log_entry(customer_id: Option<CustomerId>, payload: LogEntryPayload) -> Self {
        Dao::LogEntry(Record::new(RecordHeader::new(customer_id, None), payload))
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            Dao::Resource(r) => r.record_type(),
            Dao::Ticket(t) => t.record_type(),
            Dao::Message(m) => m.record_type(),
            Dao::File(f) => f.record_type(),
            Dao::PublicationChannel(c) => c.record_type(),
            Dao::LogEntry(l) => l.record_type(),
        }
    }

    pub fn header(&self) -> &RecordHeader {
        match self {
            Dao::Resource(r) => &r.header,
            Dao::Ticket(t) => &t.record.header,
            Dao::Message(m) => &m.header,
            Dao::File(f) => &f.header,
            Dao::PublicationChannel(c) => &c.header,
            Dao::LogEntry(l) => &l.header,
        }
    }

    pub fn identifier(&self) -> &SortableIdentifier {
        &self.header().identifier
    }

    pub fn customer_id(&self) -> Option<&CustomerId> {
        self.header().customer_id.as_ref()
    }

    pub fn owner(&self) -> Option<&Owner> {
        self.header().owner.as_ref()
    }

    /// The resource this record belongs to. A resource belongs to itself.
    pub fn resource_identifier(&self) -> &SortableIdentifier {
        match self {
            Dao::Resource(r) => &r.header.identifier,
            Dao::Ticket(t) => &t.record.payload.resource_identifier,
            Dao::Message(m) => &m.payload.resource_identifier,
            Dao::File(f) => &f.payload.resource_identifier,
            Dao::PublicationChannel(c) => &c.payload.resource_identifier,
            Dao::LogEntry(l) => &l.payload.resource_identifier,
        }
    }

    pub fn version(&self) -> &RecordVersion {
        match self {
            Dao::Resource(r) => r.version(),
            Dao::Ticket(t) => t.record.version(),
            Dao::Message(m) => m.version(),
            Dao::File(f) => f.version(),
            Dao::PublicationChannel(c) => c.version(),
            Dao::LogEntry(l) => l.version(),
        }
    }

    pub fn refresh_version(&mut self) {
        match self {
            Dao::Resource(r) => r.refresh_version(),
            Dao::Ticket(t) => t.record.refresh_version(),
            Dao::Message(m) => m.refresh_version(),
            Dao::File(f) => f.refresh_version(),
            Dao::PublicationChannel(c) => c.refresh_version(),
            Dao::LogEntry(l) => l.refresh_version(),
        }
    }

    /// The primary key pair. Fails before any I/O when an attribute the
    /// variant's scheme needs is missing.
    pub fn primary_key(&self) -> Result<KeyPair, KeyDerivationError> {
        match self {
            Dao::Resource(r) => r.owner_primary_key(),
            Dao::Ticket(t) => t.owner_primary_key(),
            Dao::Message(m) => m.owner_primary_key(),
            Dao::File(f) => f.by_type_and_identifier_key(),
            Dao::PublicationChannel(c) => c.by_type_and_identifier_key(),
            Dao::LogEntry(l) => l.by_type_and_identifier_key(),
        }
    }

    /// Every key pair this record projects into the table.
    pub fn index_keys(&self) -> Result<IndexKeys, KeyDerivationError> {
        match self {
            Dao::Resource(r) => status_and_join_keys(r),
            Dao::Ticket(t) => status_and_join_keys(t),
            Dao::Message(m) => Ok(IndexKeys {
                primary: m.owner_primary_key()?,
                by_type_customer_status: None,
                by_type_and_identifier: None,
                by_customer_resource: Some(m.by_customer_resource_key()?),
            }),
            Dao::File(f) => {
                let pair = f.by_type_and_identifier_key()?;
                Ok(IndexKeys {
                    primary: pair.clone(),
                    by_type_customer_status: None,
                    by_type_and_identifier: Some(pair),
                    by_customer_resource: Some(f.by_customer_resource_key()?),
                })
            }
            Dao::PublicationChannel(c) => identifier_only_keys(c),
            Dao::LogEntry(l) => identifier_only_keys(l),
        }
    }
}

fn status_and_join_keys<T>(record: &T) -> Result<IndexKeys, KeyDerivationError>
where
    T: WithStatus + JoinWithResource,
{
    Ok(IndexKeys {
        primary: record.owner_primary_key()?,
        by_type_customer_status: Some(record.by_type_customer_status_key()?),
        by_type_and_identifier: None,
        by_customer_resource: Some(record.by_customer_resource_key()?),
    })
}

fn identifier_only_keys<T: IdentifiedByType>(record: &T) -> Result<IndexKeys, KeyDerivationError> {
    let pair = record.by_type_and_identifier_key()?;
    Ok(IndexKeys {
        primary: pair.clone(),
        by_type_customer_status: None,
        by_type_and_identifier: Some(pair),
        by_customer_resource: None,
    })
}

impl From<ResourceDao> for Dao {
    fn from(record: ResourceDao) -> Self {
        Dao::Resource(record)
    }
}

impl From<TicketDao> for Dao {
    fn from(record: TicketDao) -> Self {
        Dao::Ticket(record)
    }
}
