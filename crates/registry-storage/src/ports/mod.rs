//! # Ports Layer
//!
//! Defines the port traits for the registry storage layer.
//!
//! ## Hexagonal Architecture
//!
//! - `inbound.rs` - Driving ports (API exposed to callers)
//! - `outbound.rs` - Driven ports (the storage engine)

pub mod inbound;
pub mod outbound;
