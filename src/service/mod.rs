//! Validating query service in front of the record store.

/// Service handle and caller-facing errors.
pub mod query;
/// Serializable revenue report.
pub mod report;
