//! # Record Envelope
//!
//! The closed set of stored variants and their polymorphic encode/decode.
//!
//! ## Variants
//!
//! | Variant | Primary key | Status index | Join index | By identifier |
//! |---------|-------------|--------------|------------|---------------|
//! | Resource | owner | yes | yes (own id) | no |
//! | Tickets (5 kinds) | owner | yes | yes | no |
//! | Message | owner | no | yes | no |
//! | File | by identifier | no | yes | yes |
//! | PublicationChannel | by identifier | no | no | yes (claim / resource) |
//! | LogEntry | by identifier | no | no | yes (resource / entry) |
//!
//! ## Module Structure
//!
//! - `record_type` - Type discriminants and capability flags
//! - `payloads` - Variant payloads
//! - `envelope` - Header, version and per-variant key capabilities
//! - `dao` - The `Dao` tagged union
//! - `encoding` - Item encode/decode

mod dao;
mod encoding;
mod envelope;
pub mod payloads;
mod record_type;


pub use dao::Dao;
pub use envelope::{
    FileDao, LogEntryDao, MessageDao, PublicationChannelDao, Record, RecordHeader, RecordVersion,
    ResourceDao, TicketDao,
};
pub use payloads::{
    Attributes, FilePayload, LogEntryPayload, MessagePayload, PublicationChannelPayload,
    PublicationStatus, ResourcePayload, TicketPayload, TicketStatus, TypedFields,
};
pub use record_type::{RecordType, TicketKind};
