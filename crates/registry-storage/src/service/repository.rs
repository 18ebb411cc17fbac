//! Record repository: `RecordRepositoryApi` implementation.

use super::RecordRepository;
use crate::domain::errors::{StorageError, StoreError};
use crate::domain::identifiers::{CustomerId, Owner, SortableIdentifier};
use crate::domain::keys::composer::{owner_partition_key, type_identifier_key};
use crate::domain::item::Item;
use crate::domain::keys::KeyPair;
use crate::domain::query::{QueryBuilder, QueryDescriptor};
use crate::domain::record::{Dao, RecordType};
use crate::domain::uniqueness::{build_unique_insert, UniqueInsert, UniquenessKey};
use crate::domain::write::ConditionalPut;
use crate::ports::inbound::RecordRepositoryApi;
use crate::ports::outbound::TableStore;

impl<S: TableStore> RecordRepository<S> {
    fn encode(&self, record: &Dao) -> Result<(KeyPair, Item), StorageError> {
        let key = record.primary_key()?;
        let item = record.to_item(&self.codec)?;
        Ok((key, item))
    }

    fn create_unique(
        &self,
        key: KeyPair,
        item: Item,
        uniqueness_key: UniquenessKey,
    ) -> Result<(), StorageError> {
        let UniqueInsert {
            uniqueness_key,
            record_key,
            operations,
        } = build_unique_insert(key, item, uniqueness_key);

        #[cfg(feature = "tracing-log")]
        tracing::debug!(
            "[registry] transact_write {} + marker {}",
            record_key,
            uniqueness_key
        );

        let outcome = self.store.transact_write(operations);
        let result = UniqueInsert::interpret(&uniqueness_key, &record_key, outcome);

        #[cfg(feature = "tracing-log")]
        {
            match &result {
                Ok(()) => {
                    tracing::info!("[registry] ✓ Created {} ({})", record_key, uniqueness_key)
                }
                Err(StorageError::UniquenessConflict { .. }) => {
                    tracing::warn!("[registry] Uniqueness conflict on {}", uniqueness_key)
                }
                Err(e) => tracing::warn!("[registry] Create of {} failed: {}", record_key, e),
            }
        }

        result
    }

    fn decode_all(&self, items: Vec<Item>) -> Result<Vec<Dao>, StorageError> {
        items
            .iter()
            .map(|item| Dao::from_item(item, &self.codec).map_err(StorageError::from))
            .collect()
    }
}

impl<S: TableStore> RecordRepositoryApi for RecordRepository<S> {
    fn create(&self, record: &Dao) -> Result<(), StorageError> {
        let (key, item) = self.encode(record)?;

        if let Some(uniqueness_key) = UniquenessKey::for_record(record)? {
            return self.create_unique(key, item, uniqueness_key);
        }

        #[cfg(feature = "tracing-log")]
        tracing::debug!("[registry] put_item (insert) {}", key);

        match self.store.put_item(ConditionalPut::insert(key.clone(), item)) {
            Ok(()) => Ok(()),
            Err(StoreError::ConditionFailed { .. }) => Err(StorageError::RecordExists {
                partition_key: key.partition_key,
                sort_key: key.sort_key,
            }),
            Err(e) => Err(StorageError::StorageUnavailable(e)),
        }
    }

    fn put(&self, record: &Dao) -> Result<(), StorageError> {
        // New constrained records must go through `create` and its marker.
        if record.record_type().is_uniqueness_constrained() {
            return self.update(record);
        }

        let (key, item) = self.encode(record)?;

        #[cfg(feature = "tracing-log")]
        tracing::debug!("[registry] put_item (replace) {}", key);

        Ok(self.store.put_item(ConditionalPut::replace(key, item))?)
    }

    fn update(&self, record: &Dao) -> Result<(), StorageError> {
        let (key, item) = self.encode(record)?;

        #[cfg(feature = "tracing-log")]
        tracing::debug!("[registry] put_item (update) {}", key);

        match self.store.put_item(ConditionalPut::update(key.clone(), item)) {
            Ok(()) => Ok(()),
            Err(StoreError::ConditionFailed { .. }) => Err(StorageError::NotFound {
                partition_key: key.partition_key,
                sort_key: key.sort_key,
            }),
            Err(e) => Err(StorageError::StorageUnavailable(e)),
        }
    }

    fn fetch(&self, key: &KeyPair) -> Result<Dao, StorageError> {
        #[cfg(feature = "tracing-log")]
        tracing::debug!("[registry] get {}", key);

        let item = self.store.get(key)?.ok_or_else(|| StorageError::NotFound {
            partition_key: key.partition_key.clone(),
            sort_key: key.sort_key.clone(),
        })?;
        Ok(Dao::from_item(&item, &self.codec)?)
    }

    fn fetch_owned(
        &self,
        record_type: RecordType,
        customer: &CustomerId,
        owner: &Owner,
        identifier: &SortableIdentifier,
    ) -> Result<Dao, StorageError> {
        let key = KeyPair::new(
            owner_partition_key(record_type, Some(customer), Some(owner))?,
            type_identifier_key(record_type, identifier),
        );
        self.fetch(&key)
    }

    fn fetch_by_identifier(
        &self,
        record_type: RecordType,
        identifier: &SortableIdentifier,
    ) -> Result<Dao, StorageError> {
        let query = QueryBuilder::by_type_and_identifier(record_type, identifier)?;
        self.query(&query)?
            .into_iter()
            .next()
            .ok_or_else(|| StorageError::NotFound {
                partition_key: query.partition_key.clone(),
                sort_key: query.partition_key,
            })
    }

    fn query(&self, query: &QueryDescriptor) -> Result<Vec<Dao>, StorageError> {
        #[cfg(feature = "tracing-log")]
        tracing::debug!(
            "[registry] query {} partition {} condition {:?}",
            query.index,
            query.partition_key,
            query.sort_key_condition
        );

        let items = self.store.query(query)?;
        self.decode_all(items)
    }

    fn fetch_resource_with_children(
        &self,
        customer: &CustomerId,
        resource_identifier: &SortableIdentifier,
    ) -> Result<Vec<Dao>, StorageError> {
        let query = QueryBuilder::by_resource(
            customer,
            resource_identifier,
            RecordType::Resource,
            RecordType::Message,
        )?;
        self.query(&query)
    }

    fn list_by_status(
        &self,
        record_type: RecordType,
        customer: &CustomerId,
        status: &str,
    ) -> Result<Vec<Dao>, StorageError> {
        let query = QueryBuilder::by_type_customer_status(record_type, customer, status)?;
        self.query(&query)
    }

    fn list_by_owner(
        &self,
        record_type: RecordType,
        customer: &CustomerId,
        owner: &Owner,
    ) -> Result<Vec<Dao>, StorageError> {
        let query = QueryBuilder::by_owner(record_type, customer, owner)?;
        self.query(&query)
    }
}
