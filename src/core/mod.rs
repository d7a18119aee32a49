//! In-memory record store and its range primitives.

/// Storage capability trait consumed by the query service.
pub mod repository;
/// Sharded, concurrency-safe sale store.
pub mod store;
/// Open date interval used by range scans.
pub mod window;
