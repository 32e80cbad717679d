use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};

use chrono::{TimeZone, Utc};
use orderdesk_catalog::Catalog;
use orderdesk_core::ProductId;
use orderdesk_orders::{place_order, Ledger, OrderRequest};

const CATALOG_SIZE: u32 = 1_000;

fn seeded_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    for n in 0..CATALOG_SIZE {
        catalog.add(format!("product-{n}"), 1_000 + u64::from(n), u32::MAX / 2);
    }
    catalog
}

fn bench_place_order(c: &mut Criterion) {
    let placed_at = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();

    let mut group = c.benchmark_group("place_order");
    group.throughput(Throughput::Elements(1));

    group.bench_function("single_line", |b| {
        b.iter_batched(
            || (seeded_catalog(), Ledger::new()),
            |(mut catalog, mut ledger)| {
                let mut request = OrderRequest::new();
                request.push(ProductId::new(1), 1);
                black_box(place_order(&mut catalog, &mut ledger, &request, placed_at)).unwrap();
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("ten_lines", |b| {
        b.iter_batched(
            || (seeded_catalog(), Ledger::new()),
            |(mut catalog, mut ledger)| {
                let mut request = OrderRequest::new();
                for n in 1..=10 {
                    request.push(ProductId::new(n), 2);
                }
                black_box(place_order(&mut catalog, &mut ledger, &request, placed_at)).unwrap();
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_place_order);
criterion_main!(benches);
