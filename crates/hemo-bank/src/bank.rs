use std::sync::Arc;

use hemo_gate::{GateConfig, GateContext, GateResult, TransferGate, TransferProposal};
use hemo_inventory::{InventoryStore, Snapshot};
use hemo_ledger::{TransactionDraft, TransactionLedger, TransactionRecord};
use hemo_session::{Session, SessionGate, SessionStore};
use hemo_store::KeyValueStore;
use hemo_types::{BloodGroup, Decision, Role};
use tracing::info;

use crate::error::{BankError, BankResult};

/// High-level blood-bank API over one shared key-value store.
///
/// All user-level operations go through here: login/logout, inventory
/// reads, the gated donate/request workflows, and per-user history.
///
/// Donate and request adjust the inventory first and append the ledger
/// entry second; the two writes are not atomic. A persistence failure
/// between them leaves stock adjusted with no record. Accepted for a
/// local single-process store.
pub struct BloodBank<S> {
    inventory: InventoryStore<S>,
    ledger: TransactionLedger<S>,
    sessions: SessionStore<S>,
    session_gate: SessionGate<S>,
    donation_gate: TransferGate,
    request_gate: TransferGate,
}

impl<S: KeyValueStore> BloodBank<S> {
    /// Open a bank over the shared store with default gate limits.
    ///
    /// Seeds the default inventory census if none is persisted yet.
    pub fn open(store: Arc<S>) -> BankResult<Self> {
        Self::with_config(store, GateConfig::default())
    }

    /// Open a bank with custom gate limits.
    pub fn with_config(store: Arc<S>, config: GateConfig) -> BankResult<Self> {
        let inventory = InventoryStore::new(Arc::clone(&store));
        let ledger = TransactionLedger::new(Arc::clone(&store));
        let sessions = SessionStore::new(store);
        let session_gate = SessionGate::new(sessions.clone());
        let donation_gate = TransferGate::donation_pipeline(config.clone());
        let request_gate = TransferGate::request_pipeline(config);

        inventory.initialize_if_absent()?;

        Ok(Self {
            inventory,
            ledger,
            sessions,
            session_gate,
            donation_gate,
            request_gate,
        })
    }

    // ---- Session operations ----

    /// Start a session as the given role.
    pub fn login(&self, email: &str, role: Role) -> BankResult<Session> {
        Ok(self.sessions.login(email, role)?)
    }

    /// End the session. Returns `true` if one existed.
    pub fn logout(&self) -> BankResult<bool> {
        Ok(self.sessions.logout()?)
    }

    /// The active session, if any.
    pub fn current_session(&self) -> BankResult<Option<Session>> {
        Ok(self.sessions.current()?)
    }

    // ---- Inventory operations ----

    /// Current inventory snapshot (seeded on first read).
    pub fn inventory(&self) -> BankResult<Snapshot> {
        Ok(self.inventory.snapshot()?)
    }

    // ---- Workflows ----

    /// Donate `units` of `blood_group` as the current Donor session.
    ///
    /// Runs the donation pipeline; on acceptance the inventory is
    /// incremented and a completed "donate" record is appended.
    pub fn donate(&self, blood_group: BloodGroup, units: u32) -> BankResult<TransactionRecord> {
        let session = self.session_gate.require(Role::Donor)?;

        let proposal = TransferProposal::donation(&session.email, blood_group, units);
        let result = self.donation_gate.evaluate(&proposal)?;
        reject_if_failed(&result)?;

        self.inventory.adjust(blood_group, i64::from(units))?;
        let record = self
            .ledger
            .append(TransactionDraft::donation(session.email, blood_group, units))?;
        info!(%blood_group, units, "donation completed");
        Ok(record)
    }

    /// Request `units` of `blood_group` as the current Receiver session.
    ///
    /// `confirmed` is the explicit acknowledgment; without it the request
    /// is rejected before anything else is checked. On acceptance the
    /// inventory is decremented and a completed "purchase" record is
    /// appended.
    pub fn request(
        &self,
        blood_group: BloodGroup,
        units: u32,
        confirmed: bool,
    ) -> BankResult<TransactionRecord> {
        let session = self.session_gate.require(Role::Receiver)?;

        let proposal = TransferProposal::purchase(&session.email, blood_group, units, confirmed);
        let mut context = GateContext::with_stock(self.inventory.snapshot()?);
        let result = self
            .request_gate
            .evaluate_with_context(&proposal, &mut context)?;
        reject_if_failed(&result)?;

        self.inventory.adjust(blood_group, -i64::from(units))?;
        let record = self
            .ledger
            .append(TransactionDraft::purchase(session.email, blood_group, units))?;
        info!(%blood_group, units, "request completed");
        Ok(record)
    }

    /// The current user's transactions, newest first.
    pub fn history(&self) -> BankResult<Vec<TransactionRecord>> {
        let session = self.session_gate.require_any()?;
        Ok(self.ledger.by_actor(&session.email)?)
    }
}

/// Convert a rejecting gate result into the validation error.
fn reject_if_failed(result: &GateResult) -> BankResult<()> {
    if let Decision::Rejected { reason } = &result.decision {
        return Err(BankError::Rejected {
            stage: result.failed_stage().unwrap_or("gate").to_string(),
            reason: reason.clone(),
        });
    }
    Ok(())
}
