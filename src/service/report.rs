//! Revenue report payload.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{SaleTimestamp, StoreId};

/// Outcome of a revenue query, echoing the request alongside the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueReport {
    /// Store the total covers.
    pub store_id: StoreId,
    /// Exclusive lower bound, `None` when unbounded.
    pub start_date: Option<SaleTimestamp>,
    /// Exclusive upper bound, `None` when unbounded.
    pub end_date: Option<SaleTimestamp>,
    /// Exact sum of `quantity_sold × sale_price`.
    pub total_sales: Decimal,
    /// Sales that fell inside the window.
    pub sales_counted: usize,
}
