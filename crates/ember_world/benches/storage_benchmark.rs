//! # Storage Performance Benchmark
//!
//! The contract under test:
//! - create / remove are O(1) amortized
//! - removal never pays for compaction
//! - one `clean_unused` pass amortizes a whole frame of removals
//!
//! Run with: `cargo bench --package ember_world`

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ember_world::{Component, ComponentStorage, Entity, EntityRegistry};

#[derive(Default)]
struct Placement {
    slot: u64,
}

impl Component for Placement {}

fn filled_storage(count: usize) -> (ComponentStorage<Placement>, Vec<Entity>) {
    let mut storage = ComponentStorage::new();
    let entities: Vec<Entity> = (0..count).map(|_| EntityRegistry::create()).collect();
    for &entity in &entities {
        storage.create(entity).slot = u64::from(entity.raw());
    }
    (storage, entities)
}

/// Benchmark: create components for fresh entities.
fn bench_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_components");

    for count in [10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let (storage, _entities) = filled_storage(count);
                black_box(storage.count())
            });
        });
    }

    group.finish();
}

/// Benchmark: lookup by entity across a populated storage.
fn bench_get(c: &mut Criterion) {
    let (storage, entities) = filled_storage(100_000);

    c.bench_function("get_100k", |b| {
        b.iter(|| {
            let mut total = 0_u64;
            for &entity in &entities {
                if let Some(placement) = storage.get(entity) {
                    total = total.wrapping_add(placement.slot);
                }
            }
            black_box(total)
        });
    });
}

/// Benchmark: a frame of removals followed by one compaction pass.
fn bench_remove_then_clean(c: &mut Criterion) {
    c.bench_function("remove_tenth_then_clean_100k", |b| {
        b.iter_with_setup(
            || filled_storage(100_000),
            |(mut storage, entities)| {
                for &entity in &entities[..10_000] {
                    storage.remove(entity);
                }
                storage.clean_unused();
                black_box(storage.capacity())
            },
        );
    });
}

criterion_group!(benches, bench_create, bench_get, bench_remove_then_clean);
criterion_main!(benches);
