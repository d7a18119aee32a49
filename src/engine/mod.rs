//! Exact revenue aggregation over stored sales.

/// Decimal accumulator and summation helpers.
pub mod revenue;
