//! Shared identifier types.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque product identifier, not checked against any catalog.
pub type ProductId = String;
/// Opaque store identifier, matched byte-for-byte in range queries.
pub type StoreId = String;
/// Sale and bound timestamp. Keeps the caller's offset; ordering compares instants.
pub type SaleTimestamp = DateTime<FixedOffset>;

/// Store-assigned sale identity.
///
/// Serializes as the hyphenated UUID string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaleId(Uuid);

impl SaleId {
    /// Generates a fresh random identity.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// True for the all-zero identity, which the store never assigns.
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    pub(crate) fn shard_index(&self, shard_count: usize) -> usize {
        // result < shard_count, so narrowing back to usize is lossless
        (self.0.as_u128() % shard_count as u128) as usize
    }
}

impl fmt::Display for SaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
