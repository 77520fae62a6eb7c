use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::{DateTime, Duration, TimeZone, Utc};
use stockpilot_core::ProductId;
use stockpilot_inventory::{InventoryAnalytics, Product, SaleEvent};

fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap()
}

/// `products` products with `sales_per_product` sales each, spread over 60 days.
fn snapshot(products: usize, sales_per_product: usize) -> (Vec<Product>, Vec<SaleEvent>) {
    let now = reference_time();
    let catalog: Vec<Product> = (0..products)
        .map(|i| {
            Product::new(
                ProductId::new(format!("p{i}")).unwrap(),
                format!("Product {i}"),
                (i % 40) as i64,
                9.99,
            )
            .unwrap()
        })
        .collect();

    let mut sales = Vec::with_capacity(products * sales_per_product);
    for n in 0..sales_per_product {
        for p in &catalog {
            sales.push(SaleEvent::new(
                p.id_typed().clone(),
                p.name(),
                1 + (n % 3) as u64,
                now - Duration::hours((n * 7 % (60 * 24)) as i64),
            ));
        }
    }
    (catalog, sales)
}

fn bench_reorder_suggestions(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder_suggestions");
    let analytics = InventoryAnalytics::default();
    let now = reference_time();

    for &(products, per_product) in &[(100usize, 10usize), (1_000, 10), (1_000, 100)] {
        let (catalog, sales) = snapshot(products, per_product);
        group.throughput(Throughput::Elements(sales.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{products}x{per_product}")),
            &(catalog, sales),
            |b, (catalog, sales)| {
                b.iter(|| analytics.reorder_suggestions(black_box(catalog), black_box(sales), now));
            },
        );
    }

    group.finish();
}

fn bench_dashboard_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard_metrics");
    let analytics = InventoryAnalytics::default();
    let now = reference_time();
    let (catalog, sales) = snapshot(1_000, 100);

    group.throughput(Throughput::Elements(sales.len() as u64));
    group.bench_function("1000x100", |b| {
        b.iter(|| analytics.dashboard_metrics(black_box(&catalog), black_box(&sales), now));
    });

    group.finish();
}

criterion_group!(benches, bench_reorder_suggestions, bench_dashboard_metrics);
criterion_main!(benches);
