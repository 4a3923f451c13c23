use std::collections::BTreeMap;
use std::sync::Arc;

use hemo_store::{keys, KeyValueStore};
use hemo_types::BloodGroup;
use tracing::debug;

use crate::defaults::default_snapshot;
use crate::error::{InventoryError, InventoryResult};

/// A persisted inventory snapshot: blood group to unit count.
pub type Snapshot = BTreeMap<BloodGroup, u32>;

/// Inventory state keyed into a shared [`KeyValueStore`].
///
/// Reads self-seed: if no snapshot has been persisted yet, the fixed default
/// census is written and returned, so a bare read never fails. Startup code
/// should still call [`Self::initialize_if_absent`] once so the seeding
/// point is explicit rather than hidden in the first read.
pub struct InventoryStore<S> {
    store: Arc<S>,
    key: String,
}

impl<S> Clone for InventoryStore<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            key: self.key.clone(),
        }
    }
}

impl<S: KeyValueStore> InventoryStore<S> {
    /// Create an inventory view over the shared store, using the canonical
    /// storage key.
    pub fn new(store: Arc<S>) -> Self {
        Self::with_key(store, keys::INVENTORY)
    }

    /// Create an inventory view under a custom storage key.
    pub fn with_key(store: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Current snapshot. Seeds and persists the default census if no
    /// snapshot exists yet; idempotent on subsequent reads.
    pub fn snapshot(&self) -> InventoryResult<Snapshot> {
        match self.load()? {
            Some(snapshot) => Ok(snapshot),
            None => {
                let snapshot = default_snapshot();
                self.persist(&snapshot)?;
                debug!(key = %self.key, "seeded default inventory");
                Ok(snapshot)
            }
        }
    }

    /// Seed the default census if nothing is persisted yet.
    ///
    /// Returns `true` if this call wrote the seed.
    pub fn initialize_if_absent(&self) -> InventoryResult<bool> {
        if self.load()?.is_some() {
            return Ok(false);
        }
        self.persist(&default_snapshot())?;
        debug!(key = %self.key, "seeded default inventory");
        Ok(true)
    }

    /// Overwrite the entire snapshot.
    pub fn replace(&self, snapshot: &Snapshot) -> InventoryResult<()> {
        self.persist(snapshot)
    }

    /// Apply a signed delta to one group's count, clamped at zero, and
    /// persist the result. Returns the new count.
    ///
    /// Donations pass `+units`, requests `-units`. Rejecting an
    /// over-withdrawal is the caller's check; the floor-clamp here holds
    /// even if that check is bypassed.
    pub fn adjust(&self, group: BloodGroup, delta: i64) -> InventoryResult<u32> {
        let mut snapshot = self.snapshot()?;
        let current = i64::from(snapshot.get(&group).copied().unwrap_or(0));
        let next = current
            .saturating_add(delta)
            .clamp(0, i64::from(u32::MAX)) as u32;
        snapshot.insert(group, next);
        self.persist(&snapshot)?;
        debug!(%group, delta, next, "adjusted inventory");
        Ok(next)
    }

    /// Current count for one group (0 if the group is missing).
    pub fn available(&self, group: BloodGroup) -> InventoryResult<u32> {
        Ok(self.snapshot()?.get(&group).copied().unwrap_or(0))
    }

    fn load(&self) -> InventoryResult<Option<Snapshot>> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        let snapshot =
            serde_json::from_str(&raw).map_err(|e| InventoryError::Encoding(e.to_string()))?;
        Ok(Some(snapshot))
    }

    fn persist(&self, snapshot: &Snapshot) -> InventoryResult<()> {
        let encoded = serde_json::to_string(snapshot)
            .map_err(|e| InventoryError::Encoding(e.to_string()))?;
        self.store.set(&self.key, &encoded)?;
        Ok(())
    }
}
