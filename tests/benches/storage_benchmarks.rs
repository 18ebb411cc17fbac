//! # Registry Storage Benchmarks
//!
//! | Area | Operation | Expectation |
//! |------|-----------|-------------|
//! | Payload codec | encode + decode | linear in payload size |
//! | Key composer | derive all index keys | independent of payload size |
//! | Repository | unique insert | one transaction per create |
//! | Repository | resource join | one range query |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::distributions::Alphanumeric;
use rand::Rng;
use registry_storage::{
    CodecConfig, CustomerId, Dao, Owner, PayloadCodec, PublicationStatus, RecordRepository,
    RecordRepositoryApi, ResourcePayload, SortableIdentifier, StorageConfig, TicketKind,
    TicketPayload, TicketStatus,
};
use serde_json::Value;
use std::time::Duration;

fn customer() -> CustomerId {
    CustomerId::parse("https://x.org/42").expect("valid customer uri")
}

fn resource_with_text(len: usize) -> Dao {
    let text: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect();
    let mut payload = ResourcePayload::new(PublicationStatus::Draft);
    payload
        .attributes
        .insert("abstract".to_string(), Value::String(text));
    Dao::resource(customer(), Owner::new("alice"), payload)
}

fn ticket(kind: TicketKind, resource: &SortableIdentifier) -> Dao {
    Dao::ticket(
        kind,
        customer(),
        Owner::new("alice"),
        TicketPayload::new(resource.clone(), TicketStatus::Pending),
    )
}

// ============================================================================
// Payload codec
// ============================================================================

fn bench_payload_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("payload-codec");
    group.measurement_time(Duration::from_secs(5));

    let codec = PayloadCodec::new(CodecConfig::default());
    for size in [1024usize, 16 * 1024, 64 * 1024] {
        let record = resource_with_text(size);
        let item = record.to_item(&codec).expect("encode");

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("encode", size), &record, |b, record| {
            b.iter(|| black_box(record.to_item(&codec).expect("encode")))
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &item, |b, item| {
            b.iter(|| black_box(Dao::from_item(item, &codec).expect("decode")))
        });
    }

    group.finish();
}

// ============================================================================
// Key composer
// ============================================================================

fn bench_key_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("key-composer");

    let resource = resource_with_text(64);
    let request = ticket(TicketKind::PublishingRequest, resource.identifier());

    group.bench_function("resource_index_keys", |b| {
        b.iter(|| black_box(resource.index_keys().expect("keys")))
    });
    group.bench_function("ticket_index_keys", |b| {
        b.iter(|| black_box(request.index_keys().expect("keys")))
    });

    group.finish();
}

// ============================================================================
// Repository
// ============================================================================

fn bench_repository(c: &mut Criterion) {
    let mut group = c.benchmark_group("repository");

    group.bench_function("unique_insert", |b| {
        let repository = RecordRepository::new_in_memory(StorageConfig::default());
        b.iter(|| {
            let request = ticket(TicketKind::DoiRequest, &SortableIdentifier::new());
            black_box(repository.create(&request).expect("create"))
        })
    });

    for children in [10usize, 100] {
        let repository = RecordRepository::new_in_memory(StorageConfig::default());
        let parent = resource_with_text(256);
        repository.create(&parent).expect("create");
        for _ in 0..children {
            repository
                .create(&ticket(TicketKind::FilesApprovalThesis, parent.identifier()))
                .expect("create");
        }

        group.throughput(Throughput::Elements(children as u64 + 1));
        group.bench_with_input(
            BenchmarkId::new("resource_join", children),
            &parent,
            |b, parent| {
                b.iter(|| {
                    black_box(
                        repository
                            .fetch_resource_with_children(&customer(), parent.identifier())
                            .expect("query"),
                    )
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_payload_codec,
    bench_key_derivation,
    bench_repository
);

criterion_main!(benches);
