//! # Join Ordering
//!
//! A resource with children of mixed types, written in random order, is
//! read back by one range query ordered by (order prefix, type, identifier).

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use rand::seq::SliceRandom;
    use registry_storage::{
        Dao, PublicationStatus, QueryBuilder, RecordRepositoryApi, RecordType, SortableIdentifier,
        StorageConfig, TicketKind,
    };

    fn populated() -> (SharedRepository, Dao, Vec<Dao>) {
        let (repository, _table) = repository(StorageConfig::default());
        let parent = resource(PublicationStatus::Draft);
        let rid = parent.identifier().clone();

        let doi = ticket(TicketKind::DoiRequest, &rid);
        let doi_id = doi.identifier().clone();
        let mut records = vec![
            parent.clone(),
            ticket(TicketKind::PublishingRequest, &rid),
            ticket(TicketKind::FilesApprovalThesis, &rid),
            ticket(TicketKind::FilesApprovalThesis, &rid),
            ticket(TicketKind::GeneralSupportRequest, &rid),
            message(&doi_id, &rid, "first"),
            message(&doi_id, &rid, "second"),
            file_with_id("F03", &rid, "c.pdf"),
            file_with_id("F01", &rid, "a.pdf"),
            file_with_id("F02", &rid, "b.pdf"),
            doi,
        ];
        records.shuffle(&mut rand::thread_rng());
        for record in &records {
            repository.create(record).expect("create");
        }
        (repository, parent, records)
    }

    fn file_with_id(identifier: &str, rid: &SortableIdentifier, name: &str) -> Dao {
        let mut record = file(rid, name);
        if let Dao::File(inner) = &mut record {
            inner.header.identifier = id(identifier);
        }
        record
    }

    fn join_rank(record: &Dao) -> (RecordType, String) {
        (record.record_type(), record.identifier().to_string())
    }

    #[test]
    fn test_full_range_is_ordered_resource_first_message_last() {
        let (repository, parent, records) = populated();

        let joined = repository
            .fetch_resource_with_children(&customer(), parent.identifier())
            .expect("query");

        assert_eq!(joined.len(), records.len());
        assert_eq!(joined.first().map(Dao::record_type), Some(RecordType::Resource));
        assert_eq!(joined.last().map(Dao::record_type), Some(RecordType::Message));

        let sort_keys: Vec<String> = joined
            .iter()
            .map(|record| {
                record
                    .index_keys()
                    .expect("keys")
                    .by_customer_resource
                    .expect("joined")
                    .sort_key
            })
            .collect();
        let mut sorted = sort_keys.clone();
        sorted.sort();
        assert_eq!(sort_keys, sorted);
    }

    #[test]
    fn test_identifiers_within_type_are_ascending() {
        let (repository, parent, _records) = populated();

        let files = repository
            .query(
                &QueryBuilder::by_resource_type(&customer(), parent.identifier(), RecordType::File)
                    .expect("descriptor"),
            )
            .expect("query");

        let names: Vec<String> = files
            .iter()
            .filter_map(|record| match record {
                Dao::File(file) => Some(file.payload.file_name.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(names, vec!["a.pdf", "b.pdf", "c.pdf"]);
    }

    #[test]
    fn test_sub_range_selects_ticket_types_only() {
        let (repository, parent, _records) = populated();

        let tickets = repository
            .query(
                &QueryBuilder::by_resource(
                    &customer(),
                    parent.identifier(),
                    RecordType::DoiRequest,
                    RecordType::FilesApprovalThesis,
                )
                .expect("descriptor"),
            )
            .expect("query");

        assert_eq!(tickets.len(), 5);
        assert!(tickets.iter().all(|record| record.record_type().is_ticket()));
        let ranks: Vec<_> = tickets.iter().map(join_rank).collect();
        assert_eq!(ranks[0].0, RecordType::DoiRequest);
        assert_eq!(ranks[4].0, RecordType::FilesApprovalThesis);
    }

    #[test]
    fn test_other_resources_are_not_joined() {
        let (repository, parent, _records) = populated();
        let other = resource(PublicationStatus::Published);
        repository.create(&other).expect("create");

        let joined = repository
            .fetch_resource_with_children(&customer(), other.identifier())
            .expect("query");
        assert_eq!(joined, vec![other]);

        let parent_join = repository
            .fetch_resource_with_children(&customer(), parent.identifier())
            .expect("query");
        assert!(parent_join.iter().all(|r| r.resource_identifier() == parent.identifier()));
    }
}
