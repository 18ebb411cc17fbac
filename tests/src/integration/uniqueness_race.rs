//! # Uniqueness Race
//!
//! N writers race to create a PublishingRequest for one resource. The
//! table's conditional transactions must let exactly one through.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use registry_storage::{
        Dao, Item, RecordRepositoryApi, RecordType, StorageConfig, StorageError, TicketKind,
    };
    use std::sync::{Arc, Barrier};
    use std::thread;

    const WRITERS: usize = 16;

    fn items_of_type(items: &[(registry_storage::KeyPair, Item)], type_name: &str) -> usize {
        items
            .iter()
            .filter(|(_, item)| item.get("type").and_then(|v| v.as_string()) == Some(type_name))
            .count()
    }

    #[test]
    fn test_parallel_publishing_requests_commit_once() {
        let (repository, table) = repository(StorageConfig::default());
        let resource_id = id("R1");
        let barrier = Arc::new(Barrier::new(WRITERS));

        let handles: Vec<_> = (0..WRITERS)
            .map(|_| {
                let repository = Arc::clone(&repository);
                let barrier = Arc::clone(&barrier);
                let resource_id = resource_id.clone();
                thread::spawn(move || {
                    let request = ticket(TicketKind::PublishingRequest, &resource_id);
                    barrier.wait();
                    repository.create(&request).map(|()| request)
                })
            })
            .collect();

        let results: Vec<Result<Dao, StorageError>> = handles
            .into_iter()
            .map(|handle| handle.join().expect("writer thread panicked"))
            .collect();

        let winners: Vec<&Dao> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
        assert_eq!(winners.len(), 1);
        for result in &results {
            if let Err(err) = result {
                assert!(
                    matches!(err, StorageError::UniquenessConflict { uniqueness_key } if uniqueness_key == "PublishingRequest:R1"),
                    "unexpected error: {err}"
                );
            }
        }

        let snapshot = table.snapshot();
        assert_eq!(items_of_type(&snapshot, "PublishingRequest"), 1);
        assert_eq!(items_of_type(&snapshot, "UniquenessMarker"), 1);
        assert_eq!(snapshot.len(), 2);

        let stored = repository
            .fetch(&winners[0].primary_key().expect("derivable key"))
            .expect("winner is stored");
        assert_eq!(&stored, winners[0]);
        assert_eq!(stored.record_type(), RecordType::PublishingRequest);
    }

    #[test]
    fn test_parallel_requests_for_different_resources_all_commit() {
        let (repository, table) = repository(StorageConfig::default());

        let handles: Vec<_> = (0..WRITERS)
            .map(|n| {
                let repository = Arc::clone(&repository);
                thread::spawn(move || {
                    let request = ticket(TicketKind::DoiRequest, &id(&format!("R{n}")));
                    repository.create(&request)
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("writer thread panicked").expect("create");
        }
        assert_eq!(table.len(), WRITERS * 2);
    }

    #[test]
    fn test_conflict_is_distinguishable_from_outage() {
        let (repository, table) = repository(StorageConfig::default());
        repository
            .create(&ticket(TicketKind::UnpublishRequest, &id("R9")))
            .expect("first create");

        let conflict = repository
            .create(&ticket(TicketKind::UnpublishRequest, &id("R9")))
            .unwrap_err();
        assert!(conflict.is_conflict());

        table.fail_next(registry_storage::StoreError::Unavailable {
            message: "connection reset".to_string(),
        });
        let outage = repository
            .create(&ticket(TicketKind::UnpublishRequest, &id("R10")))
            .unwrap_err();
        assert!(!outage.is_conflict());
        assert!(matches!(outage, StorageError::StorageUnavailable(_)));
    }
}
