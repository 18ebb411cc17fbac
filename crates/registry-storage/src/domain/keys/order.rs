//! # Join Order Prefixes
//!
//! Single-letter ranks that fix the cross-type order of a resource join
//! query. The table is maintained by hand: a new joined variant needs a
//! new entry here, placed where its rows should appear.
//!
//! | Prefix | Type |
//! |--------|------|
//! | `A` | Resource |
//! | `a` | DoiRequest |
//! | `b` | PublishingRequest |
//! | `c` | GeneralSupportRequest |
//! | `d` | UnpublishRequest |
//! | `e` | FilesApprovalThesis |
//! | `f` | File |
//! | `z` | Message |
//!
//! `A` sorts before every lowercase letter in ASCII, so the resource row
//! always comes first.

use crate::domain::record::RecordType;

/// Order prefix of a joined variant, `None` for variants outside the join index.
pub fn order_prefix(record_type: RecordType) -> Option<char> {
    match record_type {
        RecordType::Resource => Some('A'),
        RecordType::DoiRequest => Some('a'),
        RecordType::PublishingRequest => Some('b'),
        RecordType::GeneralSupportRequest => Some('c'),
        RecordType::UnpublishRequest => Some('d'),
        RecordType::FilesApprovalThesis => Some('e'),
        RecordType::File => Some('f'),
        RecordType::Message => Some('z'),
        RecordType::PublicationChannel | RecordType::LogEntry => None,
    }
}

/// Joined variants in join order.
pub fn joined_types_in_order() -> Vec<RecordType> {
    let mut joined: Vec<(char, RecordType)> = RecordType::ALL
        .iter()
        .filter_map(|t| order_prefix(*t).map(|p| (p, *t)))
        .collect();
    joined.sort();
    joined.into_iter().map(|(_, t)| t).collect()
}
