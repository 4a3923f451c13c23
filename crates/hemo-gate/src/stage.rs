use std::collections::BTreeMap;
use std::time::Duration;

use hemo_types::{BloodGroup, Role, TransactionKind};

use crate::error::GateError;

// ---------------------------------------------------------------------------
// TransferProposal
// ---------------------------------------------------------------------------

/// A proposed transfer of units, evaluated by the gate pipeline.
///
/// Self-contained: carries everything the stages need to decide, so the
/// gate has no dependency on the inventory or ledger crates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferProposal {
    /// Who is proposing the transfer.
    pub email: String,
    /// Role the proposer holds.
    pub role: Role,
    /// Donate (stock in) or purchase (stock out).
    pub kind: TransactionKind,
    /// The blood group the units move through.
    pub blood_group: BloodGroup,
    /// Unit count requested.
    pub units: u32,
    /// Explicit acknowledgment; only purchases require it.
    pub confirmed: bool,
}

impl TransferProposal {
    /// A donation proposal (consent is implied by submitting).
    pub fn donation(email: impl Into<String>, blood_group: BloodGroup, units: u32) -> Self {
        Self {
            email: email.into(),
            role: Role::Donor,
            kind: TransactionKind::Donate,
            blood_group,
            units,
            confirmed: true,
        }
    }

    /// A purchase proposal with an explicit confirmation flag.
    pub fn purchase(
        email: impl Into<String>,
        blood_group: BloodGroup,
        units: u32,
        confirmed: bool,
    ) -> Self {
        Self {
            email: email.into(),
            role: Role::Receiver,
            kind: TransactionKind::Purchase,
            blood_group,
            units,
            confirmed,
        }
    }
}

// ---------------------------------------------------------------------------
// StageDecision
// ---------------------------------------------------------------------------

/// The outcome of a single gate stage evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StageDecision {
    /// The stage passed; proceed to the next stage.
    Pass,
    /// The stage failed; the proposal should be rejected.
    Fail { reason: String },
}

impl StageDecision {
    /// Returns `true` if the decision is `Pass`.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns `true` if the decision is `Fail`.
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail { .. })
    }
}

// ---------------------------------------------------------------------------
// StageResult
// ---------------------------------------------------------------------------

/// Recorded result from a completed stage evaluation.
#[derive(Clone, Debug)]
pub struct StageResult {
    /// Name of the stage that produced this result.
    pub stage_name: String,
    /// Whether the stage passed.
    pub passed: bool,
    /// Optional reason (populated on failure).
    pub reason: Option<String>,
    /// Wall-clock time the stage took to evaluate.
    pub elapsed: Duration,
}

// ---------------------------------------------------------------------------
// GateContext
// ---------------------------------------------------------------------------

/// Contextual information available to every gate stage.
pub struct GateContext {
    /// Available stock per group at evaluation time.
    pub available: BTreeMap<BloodGroup, u32>,
    /// Results from stages that have already run in this evaluation.
    pub previous_stages: Vec<StageResult>,
}

impl GateContext {
    /// An empty context (sufficient for donation pipelines, which never
    /// consult stock).
    pub fn minimal() -> Self {
        Self {
            available: BTreeMap::new(),
            previous_stages: Vec::new(),
        }
    }

    /// A context carrying the current stock snapshot.
    pub fn with_stock(available: BTreeMap<BloodGroup, u32>) -> Self {
        Self {
            available,
            previous_stages: Vec::new(),
        }
    }

    /// Available units for one group (0 if absent).
    pub fn available_for(&self, group: BloodGroup) -> u32 {
        self.available.get(&group).copied().unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// GateStage trait
// ---------------------------------------------------------------------------

/// A single evaluation stage in the gate pipeline.
///
/// Stages are evaluated in order. Each stage receives the proposal and a
/// shared context, and returns a pass/fail decision.
///
/// The trait is object-safe and `Send + Sync` so stages can be stored in
/// a `Vec<Box<dyn GateStage>>`.
pub trait GateStage: Send + Sync {
    /// Human-readable name of this stage (e.g., "consent", "stock").
    fn name(&self) -> &str;

    /// Evaluate the proposal and return a decision.
    fn evaluate(
        &self,
        proposal: &TransferProposal,
        context: &GateContext,
    ) -> Result<StageDecision, GateError>;
}
