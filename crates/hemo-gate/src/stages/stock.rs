use hemo_types::TransactionKind;

use crate::error::GateError;
use crate::stage::{GateContext, GateStage, StageDecision, TransferProposal};

/// Stock stage.
///
/// Purchases must not draw more units than the group currently holds; the
/// failure reason names the available amount. Donations pass (stock only
/// grows). A group absent from the context snapshot counts as 0 available.
pub struct StockStage;

impl GateStage for StockStage {
    fn name(&self) -> &str {
        "stock"
    }

    fn evaluate(
        &self,
        proposal: &TransferProposal,
        context: &GateContext,
    ) -> Result<StageDecision, GateError> {
        if proposal.kind != TransactionKind::Purchase {
            return Ok(StageDecision::Pass);
        }

        let available = context.available_for(proposal.blood_group);
        if proposal.units > available {
            return Ok(StageDecision::Fail {
                reason: format!(
                    "insufficient stock: only {available} unit(s) of {} available",
                    proposal.blood_group
                ),
            });
        }
        Ok(StageDecision::Pass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hemo_types::BloodGroup;
    use std::collections::BTreeMap;

    fn context_with(group: BloodGroup, units: u32) -> GateContext {
        let mut available = BTreeMap::new();
        available.insert(group, units);
        GateContext::with_stock(available)
    }

    #[test]
    fn purchase_within_stock_passes() {
        let proposal = TransferProposal::purchase("a@x", BloodGroup::AbNegative, 5, true);
        let context = context_with(BloodGroup::AbNegative, 5);
        assert!(StockStage.evaluate(&proposal, &context).unwrap().is_pass());
    }

    #[test]
    fn purchase_beyond_stock_fails_naming_available() {
        let proposal = TransferProposal::purchase("a@x", BloodGroup::AbNegative, 10, true);
        let context = context_with(BloodGroup::AbNegative, 5);
        match StockStage.evaluate(&proposal, &context).unwrap() {
            StageDecision::Fail { reason } => {
                assert!(reason.contains("insufficient stock"));
                assert!(reason.contains("5"));
                assert!(reason.contains("AB-"));
            }
            StageDecision::Pass => panic!("10 units against 5 should not pass"),
        }
    }

    #[test]
    fn missing_group_counts_as_zero() {
        let proposal = TransferProposal::purchase("a@x", BloodGroup::ONegative, 1, true);
        let context = GateContext::minimal();
        assert!(StockStage.evaluate(&proposal, &context).unwrap().is_fail());
    }

    #[test]
    fn donation_ignores_stock() {
        let proposal = TransferProposal::donation("a@x", BloodGroup::ONegative, 5);
        let context = GateContext::minimal();
        assert!(StockStage.evaluate(&proposal, &context).unwrap().is_pass());
    }
}
