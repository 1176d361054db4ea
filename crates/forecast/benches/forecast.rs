use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{NaiveDate, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use stockwise_forecast::{ForecastSeries, ForecastSummary};
use stockwise_inventory::{
    ComponentUpdate, InventorySnapshot, InventoryStore, StockThresholds, classify, classify_with,
};

fn start_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 22).unwrap_or_default()
}

fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");
    group.throughput(Throughput::Elements(1_000));

    group.bench_function("classify_1000", |b| {
        b.iter(|| {
            for stock in 0..1_000u32 {
                black_box(classify(black_box(stock), 500));
            }
        })
    });

    let strict = StockThresholds {
        critical_pct: 20,
        low_pct: 50,
        overstock_pct: 110,
    };
    group.bench_function("classify_with_custom_thresholds_1000", |b| {
        b.iter(|| {
            for stock in 0..1_000u32 {
                black_box(classify_with(strict, black_box(stock), 500));
            }
        })
    });

    group.finish();
}

fn bench_series_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("forecast_series");
    let snapshot = InventorySnapshot::seeded(Utc::now());

    for component in snapshot.components() {
        group.bench_with_input(
            BenchmarkId::new("generate_30_days", &component.name),
            component,
            |b, component| {
                let mut rng = StdRng::seed_from_u64(17);
                b.iter(|| {
                    let points: Vec<_> = ForecastSeries::new(component, start_day(), &mut rng).collect();
                    black_box(ForecastSummary::from_forecast(component, &points))
                })
            },
        );
    }

    group.finish();
}

fn bench_store_updates(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_stock_updates");

    for updates in [10u32, 100, 1_000].iter() {
        group.throughput(Throughput::Elements(u64::from(*updates)));
        group.bench_with_input(BenchmarkId::from_parameter(updates), updates, |b, &updates| {
            b.iter(|| {
                let mut store = InventoryStore::new(InventorySnapshot::seeded(Utc::now()));
                let id = store.snapshot().components()[0].id;
                for n in 0..updates {
                    let _ = store.update_component(id, ComponentUpdate::stock(n), Utc::now());
                }
                black_box(store.snapshot())
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_classification,
    bench_series_generation,
    bench_store_updates
);
criterion_main!(benches);
