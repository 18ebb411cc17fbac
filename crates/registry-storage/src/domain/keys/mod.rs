//! # Key Composer
//!
//! Deterministic key derivation for the primary key and the three
//! secondary indexes.
//!
//! ## Key Formats
//!
//! | Index | Partition key | Sort key |
//! |-------|---------------|----------|
//! | Primary | `Type:CustomerIdentifier:Owner` | `Type:Identifier` |
//! | ByTypeCustomerStatus | `Type:Customer:CustomerIdentifier:Status:Status` | `Type:Identifier` |
//! | ByCustomerResource | `Customer:CustomerIdentifier:Resource:ResourceIdentifier` | `OrderPrefix:Type:Identifier` |
//! | ByTypeAndIdentifier | `Type:Identifier` | `Type:Identifier` |
//!
//! ## Module Structure
//!
//! - `constants` - Attribute names and key fragments
//! - `index` - Index descriptors and key pairs
//! - `order` - Join order prefixes
//! - `composer` - Key derivation functions
//! - `capabilities` - Per-variant key traits

pub mod capabilities;
pub mod composer;
pub mod constants;
mod index;
pub mod order;


pub use capabilities::{IdentifiedByType, JoinWithResource, Keyed, OwnerScoped, WithStatus};
pub use constants::*;
pub use index::{IndexKeys, IndexName, KeyPair};
pub use order::order_prefix;
