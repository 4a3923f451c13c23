use std::sync::Arc;

use chrono::Utc;
use hemo_store::{keys, KeyValueStore};
use tracing::info;

use crate::error::{LedgerError, LedgerResult};
use crate::records::{TransactionDraft, TransactionRecord};

/// The append-only transaction ledger, keyed into a shared
/// [`KeyValueStore`].
///
/// The persisted form is a JSON array of records, newest first. All writes
/// go through [`Self::append`], which is the only place ids and timestamps
/// are assigned.
pub struct TransactionLedger<S> {
    store: Arc<S>,
    key: String,
}

impl<S> Clone for TransactionLedger<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            key: self.key.clone(),
        }
    }
}

impl<S: KeyValueStore> TransactionLedger<S> {
    /// Create a ledger view over the shared store, using the canonical
    /// storage key.
    pub fn new(store: Arc<S>) -> Self {
        Self::with_key(store, keys::TRANSACTIONS)
    }

    /// Create a ledger view under a custom storage key.
    pub fn with_key(store: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// All records, newest first. Empty if nothing has been persisted.
    pub fn all(&self) -> LedgerResult<Vec<TransactionRecord>> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|e| LedgerError::Encoding(e.to_string()))
    }

    /// Stamp a draft with a fresh id and timestamp, insert it at the front,
    /// and persist the full sequence. Returns the stored record.
    ///
    /// Ids are epoch milliseconds, bumped to `prev_max + 1` whenever the
    /// clock has not advanced past the previous maximum, so they are unique
    /// and strictly increasing even within one millisecond.
    pub fn append(&self, draft: TransactionDraft) -> LedgerResult<TransactionRecord> {
        let mut records = self.all()?;

        let ts = Utc::now();
        let now_ms = ts.timestamp_millis().max(0) as u64;
        let id = match records.iter().map(|r| r.id).max() {
            Some(prev_max) => now_ms.max(prev_max + 1),
            None => now_ms,
        };

        let record = TransactionRecord {
            id,
            email: draft.email,
            role: draft.role,
            kind: draft.kind,
            blood_group: draft.blood_group,
            units: draft.units,
            status: draft.status,
            ts,
        };

        records.insert(0, record.clone());
        self.persist(&records)?;
        info!(
            id,
            kind = %record.kind,
            group = %record.blood_group,
            units = record.units,
            "appended transaction"
        );
        Ok(record)
    }

    /// Records whose actor email equals `email` exactly (case-sensitive),
    /// preserving ledger order.
    pub fn by_actor(&self, email: &str) -> LedgerResult<Vec<TransactionRecord>> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|record| record.email == email)
            .collect())
    }

    /// Number of records in the ledger.
    pub fn len(&self) -> LedgerResult<usize> {
        Ok(self.all()?.len())
    }

    /// Returns `true` if no records have been persisted.
    pub fn is_empty(&self) -> LedgerResult<bool> {
        Ok(self.all()?.is_empty())
    }

    fn persist(&self, records: &[TransactionRecord]) -> LedgerResult<()> {
        let encoded =
            serde_json::to_string(records).map_err(|e| LedgerError::Encoding(e.to_string()))?;
        self.store.set(&self.key, &encoded)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hemo_store::MemoryStore;
    use hemo_types::{BloodGroup, TransactionStatus};

    fn test_ledger() -> TransactionLedger<MemoryStore> {
        TransactionLedger::new(Arc::new(MemoryStore::new()))
    }

    // -----------------------------------------------------------------------
    // Empty ledger
    // -----------------------------------------------------------------------

    #[test]
    fn empty_ledger_reads_empty() {
        let ledger = test_ledger();
        assert!(ledger.all().unwrap().is_empty());
        assert!(ledger.is_empty().unwrap());
        assert_eq!(ledger.len().unwrap(), 0);
    }

    // -----------------------------------------------------------------------
    // Append ordering and ids
    // -----------------------------------------------------------------------

    #[test]
    fn append_prepends_newest_first() {
        let ledger = test_ledger();
        ledger
            .append(TransactionDraft::donation("a@x", BloodGroup::APositive, 1))
            .unwrap();
        ledger
            .append(TransactionDraft::donation("b@x", BloodGroup::BPositive, 2))
            .unwrap();

        let all = ledger.all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].email, "b@x");
        assert_eq!(all[1].email, "a@x");
    }

    #[test]
    fn ids_are_unique_and_strictly_increasing() {
        let ledger = test_ledger();
        // Fast successive appends land within one clock millisecond; the
        // bump rule must still keep ids strictly increasing.
        for _ in 0..10 {
            ledger
                .append(TransactionDraft::donation("a@x", BloodGroup::OPositive, 1))
                .unwrap();
        }

        let ids: Vec<u64> = ledger.all().unwrap().iter().map(|r| r.id).collect();
        // Newest first, so ids read descending.
        for window in ids.windows(2) {
            assert!(window[0] > window[1]);
        }
    }

    #[test]
    fn append_returns_the_stored_record() {
        let ledger = test_ledger();
        let record = ledger
            .append(TransactionDraft::purchase("c@x", BloodGroup::AbNegative, 2))
            .unwrap();
        assert_eq!(record.status, TransactionStatus::Completed);
        assert_eq!(ledger.all().unwrap()[0], record);
    }

    #[test]
    fn ledger_survives_reload_through_store() {
        let store = Arc::new(MemoryStore::new());
        let ledger = TransactionLedger::new(Arc::clone(&store));
        ledger
            .append(TransactionDraft::donation("a@x", BloodGroup::ONegative, 5))
            .unwrap();

        // A second view over the same store sees the same records.
        let other = TransactionLedger::new(store);
        assert_eq!(other.len().unwrap(), 1);
        assert_eq!(other.all().unwrap()[0].email, "a@x");
    }

    // -----------------------------------------------------------------------
    // Actor filter
    // -----------------------------------------------------------------------

    #[test]
    fn by_actor_filters_exactly_preserving_order() {
        let ledger = test_ledger();
        ledger
            .append(TransactionDraft::donation("alice@x", BloodGroup::APositive, 1))
            .unwrap();
        ledger
            .append(TransactionDraft::donation("bob@x", BloodGroup::APositive, 2))
            .unwrap();
        ledger
            .append(TransactionDraft::purchase("alice@x", BloodGroup::BNegative, 3))
            .unwrap();

        let mine = ledger.by_actor("alice@x").unwrap();
        assert_eq!(mine.len(), 2);
        // Ledger order preserved: newest first.
        assert_eq!(mine[0].units, 3);
        assert_eq!(mine[1].units, 1);
    }

    #[test]
    fn by_actor_is_case_sensitive() {
        let ledger = test_ledger();
        ledger
            .append(TransactionDraft::donation("Alice@x", BloodGroup::APositive, 1))
            .unwrap();
        assert!(ledger.by_actor("alice@x").unwrap().is_empty());
        assert_eq!(ledger.by_actor("Alice@x").unwrap().len(), 1);
    }

    #[test]
    fn by_actor_unknown_email_is_empty() {
        let ledger = test_ledger();
        ledger
            .append(TransactionDraft::donation("a@x", BloodGroup::APositive, 1))
            .unwrap();
        assert!(ledger.by_actor("nobody@x").unwrap().is_empty());
    }
}
