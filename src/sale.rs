//! Sale domain record and insert draft.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{ProductId, SaleId, SaleTimestamp, StoreId};

/// Stored sale, as owned by the store and returned by scans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Store-assigned identity.
    pub id: SaleId,
    /// Product sold.
    pub product_id: ProductId,
    /// Store that made the sale.
    pub store_id: StoreId,
    /// Units sold.
    pub quantity_sold: u32,
    /// Unit price.
    pub sale_price: Decimal,
    /// When the sale happened.
    pub sale_date: SaleTimestamp,
}

impl SaleRecord {
    pub(crate) fn from_draft(id: SaleId, draft: SaleDraft) -> Self {
        Self {
            id,
            product_id: draft.product_id,
            store_id: draft.store_id,
            quantity_sold: draft.quantity_sold,
            sale_price: draft.sale_price,
            sale_date: draft.sale_date,
        }
    }

    /// Copies every field except the identity.
    ///
    /// Submitting the result again records a new sale with a new id.
    pub fn to_draft(&self) -> SaleDraft {
        SaleDraft {
            product_id: self.product_id.clone(),
            store_id: self.store_id.clone(),
            quantity_sold: self.quantity_sold,
            sale_price: self.sale_price,
            sale_date: self.sale_date,
        }
    }
}

/// Insert payload used to create a new [`SaleRecord`].
///
/// Carries no identity; an `id` key in serialized input is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleDraft {
    /// Product sold.
    pub product_id: ProductId,
    /// Store that made the sale.
    pub store_id: StoreId,
    /// Units sold.
    pub quantity_sold: u32,
    /// Unit price. Must not be negative.
    pub sale_price: Decimal,
    /// When the sale happened.
    pub sale_date: SaleTimestamp,
}
