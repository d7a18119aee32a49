use std::sync::Arc;

use rust_decimal::Decimal;

use crate::{
    core::{
        repository::SaleRepository,
        store::{SaleStore, StoreError},
        window::DateWindow,
    },
    engine::revenue::{AggregateError, RevenueAccumulator},
    sale::{SaleDraft, SaleRecord},
    types::{SaleId, SaleTimestamp},
};

use super::report::RevenueReport;

/// Caller-facing failures of [`SalesService`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The store refused the insert because the identity is taken.
    #[error("sale {0} already exists")]
    DuplicateIdentity(SaleId),
    /// Both bounds were set and `start` is after `end`.
    #[error("start date {start} must be before end date {end}")]
    InvalidRange {
        /// Requested lower bound.
        start: SaleTimestamp,
        /// Requested upper bound.
        end: SaleTimestamp,
    },
    /// The draft was rejected before reaching the store.
    #[error("invalid sale: {0}")]
    InvalidSale(String),
    /// Reading from the store failed.
    #[error("couldn't get sales")]
    Retrieval(#[source] StoreError),
    /// Writing to the store failed for a reason other than a duplicate id.
    #[error("couldn't add sale")]
    Record(#[source] StoreError),
    /// The total cannot be represented exactly.
    #[error("couldn't calculate sales")]
    Aggregation(#[from] AggregateError),
}

impl ServiceError {
    /// True for outcomes a transport should report as a conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateIdentity(_))
    }
}

/// Validating entry point over a [`SaleRepository`].
///
/// Cheap to clone; clones share the same repository.
#[derive(Clone)]
pub struct SalesService {
    repo: Arc<dyn SaleRepository>,
}

impl SalesService {
    /// Wraps an existing repository.
    pub fn new(repo: Arc<dyn SaleRepository>) -> Self {
        Self { repo }
    }

    /// Service over a fresh [`SaleStore`] with default sizing.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(SaleStore::new()))
    }

    /// Every stored sale, in no particular order.
    #[tracing::instrument(skip(self))]
    pub fn list_all(&self) -> Result<Vec<SaleRecord>, ServiceError> {
        let sales = self.repo.scan_all().map_err(ServiceError::Retrieval)?;
        tracing::debug!(count = sales.len(), "listed sales");
        Ok(sales)
    }

    /// Stores `draft` and returns the identity the store assigned.
    #[tracing::instrument(
        skip(self, draft),
        fields(store_id = %draft.store_id, product_id = %draft.product_id)
    )]
    pub fn record(&self, draft: SaleDraft) -> Result<SaleId, ServiceError> {
        if draft.sale_price < Decimal::ZERO {
            return Err(ServiceError::InvalidSale(format!(
                "sale_price must not be negative, got {}",
                draft.sale_price
            )));
        }

        match self.repo.insert(draft) {
            Ok(id) => {
                tracing::debug!(%id, "sale recorded");
                Ok(id)
            }
            Err(StoreError::DuplicateIdentity(id)) => Err(ServiceError::DuplicateIdentity(id)),
            Err(err) => Err(ServiceError::Record(err)),
        }
    }

    /// Exact revenue of `store_id` strictly between `start` and `end`.
    ///
    /// `None` on either side leaves that side unbounded.
    pub fn total(
        &self,
        start: Option<SaleTimestamp>,
        end: Option<SaleTimestamp>,
        store_id: &str,
    ) -> Result<Decimal, ServiceError> {
        self.revenue_report(start, end, store_id)
            .map(|report| report.total_sales)
    }

    /// Same query as [`SalesService::total`], echoing the request.
    #[tracing::instrument(skip(self))]
    pub fn revenue_report(
        &self,
        start: Option<SaleTimestamp>,
        end: Option<SaleTimestamp>,
        store_id: &str,
    ) -> Result<RevenueReport, ServiceError> {
        let window = DateWindow::new(start, end);
        if let Some((start, end)) = window.inverted_bounds() {
            tracing::warn!(%start, %end, "rejected inverted date range");
            return Err(ServiceError::InvalidRange { start, end });
        }

        let sales = self
            .repo
            .scan_range(&window, store_id)
            .map_err(ServiceError::Retrieval)?;

        let acc = RevenueAccumulator::from_sales(&sales)?;

        tracing::debug!(
            matched = acc.sales_counted(),
            total = %acc.total(),
            "revenue computed"
        );

        Ok(RevenueReport {
            store_id: store_id.to_string(),
            start_date: window.start,
            end_date: window.end,
            total_sales: acc.total(),
            sales_counted: acc.sales_counted(),
        })
    }
}
