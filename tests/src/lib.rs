//! # Publication Registry Test Suite
//!
//! Unified test crate: cross-component scenarios and benchmarks.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Record builders shared by every scenario
//! └── integration/      # End-to-end scenarios over the in-memory table
//!     ├── uniqueness_race.rs
//!     ├── join_ordering.rs
//!     ├── legacy_payloads.rs
//!     └── large_payload.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p registry-tests
//!
//! # By scenario
//! cargo test -p registry-tests integration::uniqueness_race::
//!
//! # Benchmarks
//! cargo bench -p registry-tests
//! ```

#![allow(dead_code)]

pub mod fixtures;
pub mod integration;
