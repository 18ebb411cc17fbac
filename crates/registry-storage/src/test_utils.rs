use crate::domain::identifiers::{CustomerId, Owner, SortableIdentifier};
use crate::domain::record::{
    Dao, FilePayload, LogEntryPayload, MessagePayload, PublicationChannelPayload,
    PublicationStatus, ResourcePayload, TicketKind, TicketPayload, TicketStatus,
};
use serde_json::json;

pub const CUSTOMER_URI: &str = "https://x.org/42";

pub fn customer() -> CustomerId {
    CustomerId::parse(CUSTOMER_URI).unwrap()
}

pub fn alice() -> Owner {
    Owner::new("alice")
}

pub fn id(value: &str) -> SortableIdentifier {
    SortableIdentifier::parse(value).unwrap()
}

pub fn make_resource() -> Dao {
    let mut payload = ResourcePayload::new(PublicationStatus::Draft);
    payload.main_title = Some("Storage layouts for registries".to_string());
    payload.attributes.insert(
        "entityDescription".to_string(),
        json!({ "abstract": "A study.", "tags": ["storage", "indexes"] }),
    );
    Dao::resource(customer(), alice(), payload)
}

pub fn make_ticket(kind: TicketKind, resource: &SortableIdentifier) -> Dao {
    let mut payload = TicketPayload::new(resource.clone(), TicketStatus::Pending);
    payload.viewed_by.insert("alice".to_string());
    Dao::ticket(kind, customer(), alice(), payload)
}

pub fn make_message(ticket: &SortableIdentifier, resource: &SortableIdentifier) -> Dao {
    Dao::message(
        customer(),
        alice(),
        MessagePayload {
            ticket_identifier: ticket.clone(),
            resource_identifier: resource.clone(),
            sender: "alice".to_string(),
            text: "Please review.".to_string(),
        },
    )
}

pub fn make_file(resource: &SortableIdentifier) -> Dao {
    Dao::file(
        customer(),
        FilePayload {
            resource_identifier: resource.clone(),
            file_name: "article.pdf".to_string(),
            mime_type: Some("application/pdf".to_string()),
            size: 52_431,
            attributes: Default::default(),
        },
    )
}

pub fn make_channel(claim: &str, resource: &SortableIdentifier) -> Dao {
    Dao::publication_channel(
        Some(customer()),
        PublicationChannelPayload {
            channel_claim_id: claim.to_string(),
            resource_identifier: resource.clone(),
            name: Some("Journal of Storage".to_string()),
            attributes: Default::default(),
        },
    )
}

pub fn make_log_entry(resource: &SortableIdentifier) -> Dao {
    Dao::log_entry(
        Some(customer()),
        LogEntryPayload {
            resource_identifier: resource.clone(),
            topic: "PublicationPublished".to_string(),
            performed_by: Some("alice".to_string()),
            attributes: Default::default(),
        },
    )
}

/// One record of every variant, all attached to one resource.
pub fn make_all_variants() -> Vec<Dao> {
    let resource = make_resource();
    let rid = resource.identifier().clone();
    let mut records = vec![resource];
    for kind in TicketKind::ALL {
        records.push(make_ticket(kind, &rid));
    }
    let ticket_id = records[1].identifier().clone();
    records.push(make_message(&ticket_id, &rid));
    records.push(make_file(&rid));
    records.push(make_channel("channel-7", &rid));
    records.push(make_log_entry(&rid));
    records
}
