//! # Integration Scenarios
//!
//! End-to-end behaviour of the record repository over the in-memory table.

pub mod join_ordering;
pub mod large_payload;
pub mod legacy_payloads;
pub mod uniqueness_race;
