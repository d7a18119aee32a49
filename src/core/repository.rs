use crate::{
    core::{store::StoreError, window::DateWindow},
    sale::{SaleDraft, SaleRecord},
    types::SaleId,
};

/// Storage capability the query service is written against.
///
/// [`crate::core::store::SaleStore`] is the production implementation. Every
/// method takes `&self`; implementations do their own synchronization.
pub trait SaleRepository: Send + Sync {
    /// Assigns a fresh identity to `draft` and stores it.
    fn insert(&self, draft: SaleDraft) -> Result<SaleId, StoreError>;

    /// Returns every stored sale in no particular order.
    fn scan_all(&self) -> Result<Vec<SaleRecord>, StoreError>;

    /// Returns sales of `store_id` dated strictly inside `window`.
    fn scan_range(&self, window: &DateWindow, store_id: &str) -> Result<Vec<SaleRecord>, StoreError>;
}
