//! # Legacy Payloads
//!
//! Tables written before compression hold payloads as plain maps. A
//! repository writing compressed blobs reads both formats side by side.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use registry_storage::domain::item::StoredPayloadKind;
    use registry_storage::domain::keys::DATA_ATTRIBUTE;
    use registry_storage::{
        CodecConfig, Dao, PublicationStatus, RecordRepository, RecordRepositoryApi, RecordType,
        StorageConfig, TicketKind,
    };
    use std::sync::Arc;

    fn legacy_config() -> StorageConfig {
        StorageConfig::default().with_codec_config(CodecConfig::legacy())
    }

    fn stored_kind(table: &registry_storage::InMemoryTableStore, record: &Dao) -> StoredPayloadKind {
        let key = record.primary_key().expect("derivable key");
        table
            .snapshot()
            .into_iter()
            .find(|(stored_key, _)| stored_key == &key)
            .and_then(|(_, item)| item.get(DATA_ATTRIBUTE).and_then(StoredPayloadKind::of))
            .expect("stored payload")
    }

    // =========================================================================
    // Mixed tables
    // =========================================================================

    #[test]
    fn test_mixed_table_reads_transparently() {
        let (legacy, table) = repository(legacy_config());
        let current = RecordRepository::new(Arc::clone(&table), StorageConfig::default());

        let parent = resource(PublicationStatus::Draft);
        let old_ticket = ticket(TicketKind::DoiRequest, parent.identifier());
        let new_ticket = ticket(TicketKind::PublishingRequest, parent.identifier());
        let new_file = file(parent.identifier(), "thesis.pdf");

        legacy.create(&parent).expect("legacy create");
        legacy.create(&old_ticket).expect("legacy create");
        current.create(&new_ticket).expect("create");
        current.create(&new_file).expect("create");

        assert_eq!(stored_kind(&table, &parent), StoredPayloadKind::Legacy);
        assert_eq!(stored_kind(&table, &new_ticket), StoredPayloadKind::Compressed);

        let joined = current
            .fetch_resource_with_children(&customer(), parent.identifier())
            .expect("query");
        assert_eq!(joined, vec![parent, old_ticket, new_ticket, new_file]);
    }

    #[test]
    fn test_rewrite_migrates_to_compressed() {
        let (legacy, table) = repository(legacy_config());
        let current = RecordRepository::new(Arc::clone(&table), StorageConfig::default());

        let record = resource(PublicationStatus::Published);
        legacy.create(&record).expect("legacy create");

        let mut loaded = current
            .fetch(&record.primary_key().expect("key"))
            .expect("fetch");
        loaded.refresh_version();
        current.update(&loaded).expect("update");

        assert_eq!(stored_kind(&table, &record), StoredPayloadKind::Compressed);
        assert_eq!(
            current.fetch(&record.primary_key().expect("key")).expect("fetch"),
            loaded
        );
    }

    #[test]
    fn test_legacy_reader_sees_compressed_records() {
        let (current, table) = repository(StorageConfig::default());
        let legacy = RecordRepository::new(Arc::clone(&table), legacy_config());

        let record = ticket(TicketKind::UnpublishRequest, &id("R5"));
        current.create(&record).expect("create");

        let listed = legacy
            .list_by_status(RecordType::UnpublishRequest, &customer(), "PENDING")
            .expect("query");
        assert_eq!(listed, vec![record]);
    }
}
