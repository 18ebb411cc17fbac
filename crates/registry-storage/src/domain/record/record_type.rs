//! # Record Types
//!
//! The closed set of variants stored in the table, their discriminants and
//! the key schemes each one takes part in.

use std::fmt;
use std::str::FromStr;

/// Type discriminant of a stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordType {
    Resource,
    DoiRequest,
    PublishingRequest,
    GeneralSupportRequest,
    UnpublishRequest,
    FilesApprovalThesis,
    Message,
    File,
    PublicationChannel,
    LogEntry,
}

impl RecordType {
    pub const ALL: [RecordType; 10] = [
        RecordType::Resource,
        RecordType::DoiRequest,
        RecordType::PublishingRequest,
        RecordType::GeneralSupportRequest,
        RecordType::UnpublishRequest,
        RecordType::FilesApprovalThesis,
        RecordType::Message,
        RecordType::File,
        RecordType::PublicationChannel,
        RecordType::LogEntry,
    ];

    /// Value of the stored `type` attribute.
    pub fn discriminant(&self) -> &'static str {
        match self {
            RecordType::Resource => "Resource",
            RecordType::DoiRequest => "DoiRequest",
            RecordType::PublishingRequest => "PublishingRequest",
            RecordType::GeneralSupportRequest => "GeneralSupportRequest",
            RecordType::UnpublishRequest => "UnpublishRequest",
            RecordType::FilesApprovalThesis => "FilesApprovalThesis",
            RecordType::Message => "Message",
            RecordType::File => "File",
            RecordType::PublicationChannel => "PublicationChannel",
            RecordType::LogEntry => "LogEntry",
        }
    }

    pub fn from_discriminant(discriminant: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|record_type| record_type.discriminant() == discriminant)
    }

    /// Member of the ticket family.
    pub fn is_ticket(&self) -> bool {
        matches!(
            self,
            RecordType::DoiRequest
                | RecordType::PublishingRequest
                | RecordType::GeneralSupportRequest
                | RecordType::UnpublishRequest
                | RecordType::FilesApprovalThesis
        )
    }

    /// Primary key partitioned by customer and owner.
    pub fn is_owner_scoped(&self) -> bool {
        matches!(self, RecordType::Resource | RecordType::Message) || self.is_ticket()
    }

    /// Carries the ByCustomerResource pair.
    pub fn joins_resource(&self) -> bool {
        matches!(
            self,
            RecordType::Resource | RecordType::Message | RecordType::File
        ) || self.is_ticket()
    }

    /// Carries the ByTypeAndIdentifier pair; primary key equals that pair.
    pub fn indexed_by_identifier(&self) -> bool {
        !self.is_owner_scoped()
    }

    /// Stored under `PK = SK = Type:Identifier`, so the identifier alone
    /// finds it. Channel claims and log entries pair two entities instead.
    pub fn keyed_by_type_identifier(&self) -> bool {
        matches!(self, RecordType::File)
    }

    /// Carries the ByTypeCustomerStatus pair.
    pub fn has_status(&self) -> bool {
        matches!(self, RecordType::Resource) || self.is_ticket()
    }

    /// At most one record per (type, resource) pair.
    pub fn is_uniqueness_constrained(&self) -> bool {
        matches!(
            self,
            RecordType::PublishingRequest
                | RecordType::DoiRequest
                | RecordType::GeneralSupportRequest
                | RecordType::UnpublishRequest
        )
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.discriminant())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_discriminant(s).ok_or_else(|| s.to_string())
    }
}

/// The ticket family: workflow requests attached to one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketKind {
    DoiRequest,
    PublishingRequest,
    GeneralSupportRequest,
    UnpublishRequest,
    FilesApprovalThesis,
}

impl TicketKind {
    pub const ALL: [TicketKind; 5] = [
        TicketKind::DoiRequest,
        TicketKind::PublishingRequest,
        TicketKind::GeneralSupportRequest,
        TicketKind::UnpublishRequest,
        TicketKind::FilesApprovalThesis,
    ];

    pub fn record_type(&self) -> RecordType {
        match self {
            TicketKind::DoiRequest => RecordType::DoiRequest,
            TicketKind::PublishingRequest => RecordType::PublishingRequest,
            TicketKind::GeneralSupportRequest => RecordType::GeneralSupportRequest,
            TicketKind::UnpublishRequest => RecordType::UnpublishRequest,
            TicketKind::FilesApprovalThesis => RecordType::FilesApprovalThesis,
        }
    }
}

impl TryFrom<RecordType> for TicketKind {
    type Error = RecordType;

    fn try_from(record_type: RecordType) -> Result<Self, Self::Error> {
        TicketKind::ALL
            .into_iter()
            .find(|kind| kind.record_type() == record_type)
            .ok_or(record_type)
    }
}
