//! # Large Payloads
//!
//! Payloads well past typical item sizes survive compression unchanged;
//! the configured inflate limit rejects oversized blobs on read.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use rand::distributions::Alphanumeric;
    use rand::Rng;
    use registry_storage::domain::keys::DATA_ATTRIBUTE;
    use registry_storage::{
        AttributeValue, Dao, DecodeError, PublicationStatus, RecordRepository, RecordRepositoryApi,
        StorageConfig, StorageError,
    };
    use serde_json::Value;
    use std::sync::Arc;

    const ABSTRACT_BYTES: usize = 50 * 1024;

    fn random_text(len: usize) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect()
    }

    fn resource_with_abstract(text: &str) -> Dao {
        let mut record = resource(PublicationStatus::Draft);
        if let Dao::Resource(inner) = &mut record {
            inner
                .payload
                .attributes
                .insert("abstract".to_string(), Value::String(text.to_string()));
        }
        record
    }

    fn stored_blob_len(table: &registry_storage::InMemoryTableStore) -> usize {
        table
            .snapshot()
            .iter()
            .find_map(|(_, item)| match item.get(DATA_ATTRIBUTE) {
                Some(AttributeValue::B(blob)) => Some(blob.len()),
                _ => None,
            })
            .expect("compressed payload")
    }

    #[test]
    fn test_fifty_kilobyte_attribute_survives_byte_identical() {
        let (repository, _table) = repository(StorageConfig::default());
        let text = random_text(ABSTRACT_BYTES);
        let record = resource_with_abstract(&text);

        repository.create(&record).expect("create");
        let fetched = repository
            .fetch(&record.primary_key().expect("key"))
            .expect("fetch");

        assert_eq!(fetched, record);
        match fetched {
            Dao::Resource(inner) => assert_eq!(
                inner.payload.attributes.get("abstract"),
                Some(&Value::String(text))
            ),
            other => panic!("Expected Resource, got {other:?}"),
        }
    }

    #[test]
    fn test_repetitive_payload_is_stored_compressed() {
        let (repository, table) = repository(StorageConfig::default());
        let record = resource_with_abstract(&"lorem ipsum ".repeat(ABSTRACT_BYTES / 12));

        repository.create(&record).expect("create");

        assert!(stored_blob_len(&table) < ABSTRACT_BYTES / 10);
    }

    #[test]
    fn test_inflate_limit_rejects_oversized_payload() {
        let (writer, table) = repository(StorageConfig::default());
        let record = resource_with_abstract(&random_text(ABSTRACT_BYTES));
        writer.create(&record).expect("create");

        let strict = RecordRepository::new(
            Arc::clone(&table),
            StorageConfig::default().with_max_payload_bytes(ABSTRACT_BYTES / 2),
        );
        let err = strict
            .fetch(&record.primary_key().expect("key"))
            .unwrap_err();

        assert!(matches!(
            err,
            StorageError::Decode(DecodeError::PayloadTooLarge { limit }) if limit == ABSTRACT_BYTES / 2
        ));
    }
}
