use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use hashbrown::{HashMap, hash_map::Entry};

use crate::{
    core::{repository::SaleRepository, window::DateWindow},
    sale::{SaleDraft, SaleRecord},
    types::SaleId,
};

/// Failures raised by the record store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The freshly generated identity is already held by another sale.
    #[error("sale {0} already exists")]
    DuplicateIdentity(SaleId),
    /// A writer panicked while holding a shard lock.
    #[error("sale store lock poisoned")]
    Poisoned,
}

/// Sizing knobs for [`SaleStore`].
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Number of independently locked shards. `0` is treated as `1`.
    pub shard_count: usize,
    /// Capacity pre-allocated in each shard.
    pub shard_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            shard_count: 16,
            shard_capacity: 0,
        }
    }
}

type IdGenerator = Box<dyn Fn() -> SaleId + Send + Sync>;
type Shard = RwLock<HashMap<SaleId, SaleRecord>>;

/// Concurrency-safe in-memory sale store.
///
/// Sales are spread over shards by identity. Inserts write-lock a single
/// shard; scans read-lock one shard at a time and clone records out, so a scan
/// racing with inserts sees each sale either fully or not at all.
pub struct SaleStore {
    shards: Box<[Shard]>,
    next_id: IdGenerator,
}

impl SaleStore {
    /// Store with [`StoreConfig::default`] and random v4 identities.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Store with explicit sizing and random v4 identities.
    pub fn with_config(config: StoreConfig) -> Self {
        Self::with_id_generator(config, SaleId::random)
    }

    /// Store whose identities come from `next_id`.
    ///
    /// Intended for tests that need collisions; production callers use
    /// [`SaleStore::with_config`].
    pub fn with_id_generator(
        config: StoreConfig,
        next_id: impl Fn() -> SaleId + Send + Sync + 'static,
    ) -> Self {
        let shard_count = config.shard_count.max(1);
        let shards = (0..shard_count)
            .map(|_| RwLock::new(HashMap::with_capacity(config.shard_capacity)))
            .collect();
        Self {
            shards,
            next_id: Box::new(next_id),
        }
    }

    /// Number of shards in use.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Number of stored sales.
    pub fn len(&self) -> Result<usize, StoreError> {
        let mut total = 0;
        for shard in self.shards.iter() {
            total += read(shard)?.len();
        }
        Ok(total)
    }

    /// True when nothing has been stored yet.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    fn shard_for(&self, id: &SaleId) -> &Shard {
        &self.shards[id.shard_index(self.shards.len())]
    }

    fn collect_matching(&self, keep: impl Fn(&SaleRecord) -> bool) -> Result<Vec<SaleRecord>, StoreError> {
        let mut out = Vec::new();
        for shard in self.shards.iter() {
            let guard = read(shard)?;
            out.extend(guard.values().filter(|rec| keep(*rec)).cloned());
        }
        Ok(out)
    }
}

impl Default for SaleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SaleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaleStore")
            .field("shard_count", &self.shards.len())
            .finish_non_exhaustive()
    }
}

impl SaleRepository for SaleStore {
    fn insert(&self, draft: SaleDraft) -> Result<SaleId, StoreError> {
        let id = (self.next_id)();
        let mut shard = write(self.shard_for(&id))?;
        match shard.entry(id) {
            Entry::Occupied(_) => {
                tracing::warn!(%id, "generated sale id collided with an existing sale");
                Err(StoreError::DuplicateIdentity(id))
            }
            Entry::Vacant(slot) => {
                slot.insert(SaleRecord::from_draft(id, draft));
                tracing::trace!(%id, "sale stored");
                Ok(id)
            }
        }
    }

    fn scan_all(&self) -> Result<Vec<SaleRecord>, StoreError> {
        self.collect_matching(|_| true)
    }

    fn scan_range(&self, window: &DateWindow, store_id: &str) -> Result<Vec<SaleRecord>, StoreError> {
        self.collect_matching(|rec| rec.store_id == store_id && window.contains(rec.sale_date))
    }
}

fn read(shard: &Shard) -> Result<RwLockReadGuard<'_, HashMap<SaleId, SaleRecord>>, StoreError> {
    shard.read().map_err(|_| StoreError::Poisoned)
}

fn write(shard: &Shard) -> Result<RwLockWriteGuard<'_, HashMap<SaleId, SaleRecord>>, StoreError> {
    shard.write().map_err(|_| StoreError::Poisoned)
}
