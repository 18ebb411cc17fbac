use crate::domain::errors::StoreError;
use crate::domain::item::Item;
use crate::domain::keys::{IndexName, KeyPair};
use crate::domain::query::QueryDescriptor;
use crate::domain::write::ConditionalPut;
use crate::ports::outbound::TableStore;
use parking_lot::Mutex;
use std::collections::BTreeMap;

/// In-memory table for tests and local runs.
///
/// One mutex guards the whole table, so every conditional put and every
/// transaction is serializable: of two racing inserts on one key exactly
/// one commits.
#[derive(Default)]
pub struct InMemoryTableStore {
    items: Mutex<BTreeMap<KeyPair, Item>>,
    injected_failure: Mutex<Option<StoreError>>,
}

impl InMemoryTableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items, markers included.
    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    /// Copy of every stored item, in primary-key order.
    pub fn snapshot(&self) -> Vec<(KeyPair, Item)> {
        self.items
            .lock()
            .iter()
            .map(|(key, item)| (key.clone(), item.clone()))
            .collect()
    }

    /// Store an item without conditions or key checks, e.g. to seed
    /// items written by older code.
    pub fn insert_raw(&self, key: KeyPair, item: Item) {
        self.items.lock().insert(key, item);
    }

    /// Make the next operation fail with `error`.
    pub fn fail_next(&self, error: StoreError) {
        *self.injected_failure.lock() = Some(error);
    }

    fn take_failure(&self) -> Result<(), StoreError> {
        match self.injected_failure.lock().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl TableStore for InMemoryTableStore {
    fn get(&self, key: &KeyPair) -> Result<Option<Item>, StoreError> {
        self.take_failure()?;
        Ok(self.items.lock().get(key).cloned())
    }

    fn query(&self, query: &QueryDescriptor) -> Result<Vec<Item>, StoreError> {
        self.take_failure()?;
        let items = self.items.lock();
        let mut matched: Vec<(String, &KeyPair, &Item)> = items
            .iter()
            .filter_map(|(primary, item)| {
                let projected = match query.index {
                    IndexName::Primary => primary.clone(),
                    index => KeyPair::from_item(item, index)?,
                };
                query
                    .matches(&projected.partition_key, &projected.sort_key)
                    .then_some((projected.sort_key, primary, item))
            })
            .collect();
        matched.sort_by(|a, b| (&a.0, a.1).cmp(&(&b.0, b.1)));
        Ok(matched.into_iter().map(|(_, _, item)| item.clone()).collect())
    }

    fn put_item(&self, put: ConditionalPut) -> Result<(), StoreError> {
        self.take_failure()?;
        let mut items = self.items.lock();
        if !put.condition_holds(items.contains_key(&put.key)) {
            return Err(StoreError::ConditionFailed {
                failed_items: vec![0],
            });
        }
        items.insert(put.key, put.item);
        Ok(())
    }

    fn transact_write(&self, puts: Vec<ConditionalPut>) -> Result<(), StoreError> {
        self.take_failure()?;
        let mut items = self.items.lock();
        let failed_items: Vec<usize> = puts
            .iter()
            .enumerate()
            .filter(|(_, put)| !put.condition_holds(items.contains_key(&put.key)))
            .map(|(position, _)| position)
            .collect();
        if !failed_items.is_empty() {
            return Err(StoreError::ConditionFailed { failed_items });
        }
        for put in puts {
            items.insert(put.key, put.item);
        }
        Ok(())
    }
}
