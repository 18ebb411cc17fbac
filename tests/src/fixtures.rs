//! # Fixtures
//!
//! Record builders for integration scenarios. Everything hangs off one
//! customer, `https://x.org/42`, and one owner, `alice`.

use registry_storage::{
    CustomerId, Dao, FilePayload, MessagePayload, Owner, PublicationStatus, RecordRepository,
    ResourcePayload, SortableIdentifier, StorageConfig, TicketKind, TicketPayload, TicketStatus,
};
use registry_storage::adapters::InMemoryTableStore;
use std::sync::Arc;

pub type SharedRepository = Arc<RecordRepository<Arc<InMemoryTableStore>>>;

pub fn customer() -> CustomerId {
    CustomerId::parse("https://x.org/42").expect("valid customer uri")
}

pub fn alice() -> Owner {
    Owner::new("alice")
}

pub fn id(value: &str) -> SortableIdentifier {
    SortableIdentifier::parse(value).expect("valid identifier")
}

/// Repository over a table the caller can also inspect directly.
pub fn repository(config: StorageConfig) -> (SharedRepository, Arc<InMemoryTableStore>) {
    let table = Arc::new(InMemoryTableStore::new());
    let repository = Arc::new(RecordRepository::new(Arc::clone(&table), config));
    (repository, table)
}

pub fn resource(status: PublicationStatus) -> Dao {
    let mut payload = ResourcePayload::new(status);
    payload.main_title = Some("On wide-column registries".to_string());
    Dao::resource(customer(), alice(), payload)
}

pub fn ticket(kind: TicketKind, resource: &SortableIdentifier) -> Dao {
    Dao::ticket(
        kind,
        customer(),
        alice(),
        TicketPayload::new(resource.clone(), TicketStatus::Pending),
    )
}

pub fn message(ticket: &SortableIdentifier, resource: &SortableIdentifier, text: &str) -> Dao {
    Dao::message(
        customer(),
        alice(),
        MessagePayload {
            ticket_identifier: ticket.clone(),
            resource_identifier: resource.clone(),
            sender: "alice".to_string(),
            text: text.to_string(),
        },
    )
}

pub fn file(resource: &SortableIdentifier, name: &str) -> Dao {
    Dao::file(
        customer(),
        FilePayload {
            resource_identifier: resource.clone(),
            file_name: name.to_string(),
            mime_type: None,
            size: 1024,
            attributes: Default::default(),
        },
    )
}
