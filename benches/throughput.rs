use chrono::{DateTime, Duration, FixedOffset, TimeZone};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rust_decimal::Decimal;

use saleslog::{
    core::{repository::SaleRepository, store::SaleStore},
    engine::revenue::sum_revenue,
    sale::SaleDraft,
    service::query::SalesService,
};

fn base() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .expect("offset")
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("base date")
}

fn draft(i: u64) -> SaleDraft {
    SaleDraft {
        product_id: format!("P{i}"),
        store_id: format!("S{}", i % 16),
        quantity_sold: u32::try_from(i % 50).expect("small"),
        sale_price: Decimal::new(i64::try_from(i % 10_000).expect("small"), 2),
        sale_date: base() + Duration::minutes(i64::try_from(i).expect("small")),
    }
}

fn bench_inserts(c: &mut Criterion) {
    c.bench_function("store_insert_50k", |b| {
        b.iter(|| {
            let store = SaleStore::new();
            for i in 0..50_000u64 {
                let _ = store.insert(draft(i)).expect("insert");
            }
        });
    });
}

fn bench_sum(c: &mut Criterion) {
    let store = SaleStore::new();
    for i in 0..50_000u64 {
        let _ = store.insert(draft(i)).expect("insert");
    }
    let all = store.scan_all().expect("scan");

    c.bench_function("sum_revenue_50k", |b| {
        b.iter(|| sum_revenue(&all).expect("sum"));
    });
}

fn bench_total_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("total_query");
    let service = SalesService::in_memory();
    for i in 0..50_000u64 {
        let _ = service.record(draft(i)).expect("record");
    }

    for hours in [1i64, 24, 24 * 30] {
        let start = base();
        let end = base() + Duration::hours(hours);
        group.bench_with_input(BenchmarkId::from_parameter(hours), &hours, |b, _| {
            b.iter(|| service.total(Some(start), Some(end), "S3").expect("total"));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_inserts, bench_sum, bench_total_query);
criterion_main!(benches);
