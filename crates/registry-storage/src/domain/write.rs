//! # Write Operations
//!
//! Conditional puts handed to the storage engine, alone or as one
//! all-or-nothing transaction.

use crate::domain::item::Item;
use crate::domain::keys::KeyPair;

/// Condition evaluated against the item currently stored under a put's key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutCondition {
    /// Fails if any item is stored under the key.
    KeyNotExists,
    /// Fails unless an item is stored under the key.
    KeyExists,
}

/// A whole-item put under a primary key, optionally conditional.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalPut {
    pub key: KeyPair,
    pub item: Item,
    pub condition: Option<PutCondition>,
}

impl ConditionalPut {
    /// Unconditional replace.
    pub fn replace(key: KeyPair, item: Item) -> Self {
        Self {
            key,
            item,
            condition: None,
        }
    }

    /// Insert that fails if the key is taken.
    pub fn insert(key: KeyPair, item: Item) -> Self {
        Self {
            key,
            item,
            condition: Some(PutCondition::KeyNotExists),
        }
    }

    /// Replace that fails if nothing is stored under the key.
    pub fn update(key: KeyPair, item: Item) -> Self {
        Self {
            key,
            item,
            condition: Some(PutCondition::KeyExists),
        }
    }

    /// Whether the condition holds given whether the key is occupied.
    pub fn condition_holds(&self, key_exists: bool) -> bool {
        match self.condition {
            None => true,
            Some(PutCondition::KeyNotExists) => !key_exists,
            Some(PutCondition::KeyExists) => key_exists,
        }
    }
}
