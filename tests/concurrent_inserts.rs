use std::{collections::HashSet, sync::Arc, thread};

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use saleslog::{
    core::{
        repository::SaleRepository,
        store::{SaleStore, StoreConfig},
    },
    sale::SaleDraft,
    service::query::SalesService,
};

fn draft(worker: usize, n: usize) -> SaleDraft {
    SaleDraft {
        product_id: format!("P{worker}-{n}"),
        store_id: format!("S{}", worker % 4),
        quantity_sold: u32::try_from(n).expect("small n"),
        sale_price: dec!(1.25),
        sale_date: "2024-06-15T14:30:00Z".parse::<DateTime<FixedOffset>>().expect("timestamp"),
    }
}

#[test]
fn threaded_inserts_lose_nothing() {
    const WORKERS: usize = 8;
    const PER_WORKER: usize = 250;

    let store = Arc::new(SaleStore::with_config(StoreConfig {
        shard_count: 4,
        ..StoreConfig::default()
    }));

    let ids: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..WORKERS)
            .map(|w| {
                let store = Arc::clone(&store);
                s.spawn(move || {
                    (0..PER_WORKER)
                        .map(|n| store.insert(draft(w, n)).expect("insert"))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().expect("join"))
            .collect()
    });

    let unique: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(unique.len(), WORKERS * PER_WORKER);

    let all = store.scan_all().expect("scan");
    assert_eq!(all.len(), WORKERS * PER_WORKER);
    let stored: HashSet<_> = all.iter().map(|r| r.id).collect();
    assert_eq!(stored, unique);
}

#[test]
fn scans_during_inserts_only_see_complete_records() {
    let store = Arc::new(SaleStore::new());

    thread::scope(|s| {
        for w in 0..4 {
            let store = Arc::clone(&store);
            s.spawn(move || {
                for n in 0..500 {
                    store.insert(draft(w, n)).expect("insert");
                }
            });
        }

        let reader = Arc::clone(&store);
        s.spawn(move || {
            let mut last = 0;
            for _ in 0..50 {
                let seen = reader.scan_all().expect("scan");
                assert!(seen.len() >= last);
                last = seen.len();
                for rec in &seen {
                    assert!(!rec.id.is_nil());
                    assert_eq!(rec.sale_price, dec!(1.25));
                    assert_eq!(
                        rec.product_id,
                        format!("P{}-{}", &rec.store_id[1..], rec.quantity_sold)
                    );
                }
            }
        });
    });

    assert_eq!(store.len().expect("len"), 2_000);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn one_task_per_request_records_every_sale() {
    let service = SalesService::in_memory();

    let mut tasks = Vec::new();
    for n in 0..200usize {
        let service = service.clone();
        tasks.push(tokio::spawn(async move { service.record(draft(n % 7, n)) }));
    }

    let mut ids = HashSet::new();
    for task in tasks {
        let id = task.await.expect("join").expect("record");
        assert!(ids.insert(id));
    }

    let all = service.list_all().expect("list");
    assert_eq!(all.len(), 200);

    let expected: Decimal = (0..200u32).map(|n| Decimal::from(n) * dec!(1.25)).sum();
    let mut total = Decimal::ZERO;
    for store in ["S0", "S1", "S2", "S3"] {
        total += service.total(None, None, store).expect("total");
    }
    assert_eq!(total, expected);
}
