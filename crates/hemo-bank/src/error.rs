use hemo_gate::GateError;
use hemo_inventory::InventoryError;
use hemo_ledger::LedgerError;
use hemo_session::SessionError;

/// Errors from blood-bank workflows.
///
/// `Rejected` and `Session` are the validation taxonomy: the input or the
/// session was wrong and nothing was mutated. The remaining variants are
/// persistence failures propagated from the subsystems.
#[derive(Debug, thiserror::Error)]
pub enum BankError {
    /// The transfer gate rejected the proposal; no state was mutated.
    #[error("rejected at {stage}: {reason}")]
    Rejected { stage: String, reason: String },

    /// Session validation failed (not logged in, wrong role, bad login).
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Inventory persistence failed.
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// Ledger persistence failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// A gate stage errored (distinct from rejecting).
    #[error(transparent)]
    Gate(#[from] GateError),
}

impl BankError {
    /// Returns `true` for the validation taxonomy (nothing was mutated).
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Rejected { .. } | Self::Session(_))
    }
}

/// Result alias for bank workflows.
pub type BankResult<T> = Result<T, BankError>;
