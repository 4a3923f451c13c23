use hemo_types::TransactionKind;

use crate::error::GateError;
use crate::stage::{GateContext, GateStage, StageDecision, TransferProposal};

/// Consent stage.
///
/// Purchases require an explicit acknowledgment before anything else is
/// checked. Donations pass unconditionally (submitting is the consent).
pub struct ConsentStage;

impl GateStage for ConsentStage {
    fn name(&self) -> &str {
        "consent"
    }

    fn evaluate(
        &self,
        proposal: &TransferProposal,
        _context: &GateContext,
    ) -> Result<StageDecision, GateError> {
        if proposal.kind == TransactionKind::Purchase && !proposal.confirmed {
            return Ok(StageDecision::Fail {
                reason: "request must be confirmed before submitting".into(),
            });
        }
        Ok(StageDecision::Pass)
    }
}
