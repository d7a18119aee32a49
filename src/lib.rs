//! Concurrency-safe in-memory sale log with exact revenue totals.
//!
//! # Examples
//!
//! Recording sales and totalling one store's revenue:
//! ```
//! use chrono::{DateTime, FixedOffset};
//! use rust_decimal::Decimal;
//! use saleslog::{sale::SaleDraft, service::query::SalesService};
//!
//! let ts = |s: &str| s.parse::<DateTime<FixedOffset>>().expect("timestamp");
//! let service = SalesService::in_memory();
//!
//! let id = service.record(SaleDraft {
//!     product_id: "12345".to_string(),
//!     store_id: "6789".to_string(),
//!     quantity_sold: 10,
//!     sale_price: Decimal::new(1999, 2),
//!     sale_date: ts("2024-06-15T14:30:00Z"),
//! }).expect("record");
//! assert!(!id.is_nil());
//!
//! let total = service
//!     .total(Some(ts("2024-06-01T14:30:00Z")), Some(ts("2024-06-16T14:30:00Z")), "6789")
//!     .expect("total");
//! assert_eq!(total.to_string(), "199.90");
//! ```
//!
//! Sharing one store between threads:
//! ```
//! use std::sync::Arc;
//!
//! use saleslog::{
//!     core::store::{SaleStore, StoreConfig},
//!     service::query::SalesService,
//! };
//!
//! let store = Arc::new(SaleStore::with_config(StoreConfig { shard_count: 4, ..StoreConfig::default() }));
//! let service = SalesService::new(store.clone());
//! let worker = service.clone();
//! std::thread::spawn(move || worker.list_all().expect("list")).join().expect("join");
//! assert_eq!(store.len().expect("len"), 0);
//! ```
#![deny(missing_docs)]

/// Record store, its capability trait, and date windows.
pub mod core;
/// Exact decimal revenue aggregation.
pub mod engine;
/// Sale domain records and drafts.
pub mod sale;
/// Validating query service and its errors.
pub mod service;
/// Shared identifier types.
pub mod types;
