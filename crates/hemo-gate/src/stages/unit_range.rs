use crate::error::GateError;
use crate::stage::{GateContext, GateStage, StageDecision, TransferProposal};

/// Unit-range stage.
///
/// The unit count must lie in `[min, max]`. Donations and requests carry
/// different maxima, so each pipeline instantiates its own range.
pub struct UnitRangeStage {
    pub min: u32,
    pub max: u32,
}

impl UnitRangeStage {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

impl GateStage for UnitRangeStage {
    fn name(&self) -> &str {
        "unit-range"
    }

    fn evaluate(
        &self,
        proposal: &TransferProposal,
        _context: &GateContext,
    ) -> Result<StageDecision, GateError> {
        if proposal.units < self.min || proposal.units > self.max {
            return Ok(StageDecision::Fail {
                reason: format!("units must be between {} and {}", self.min, self.max),
            });
        }
        Ok(StageDecision::Pass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hemo_types::BloodGroup;

    fn proposal(units: u32) -> TransferProposal {
        TransferProposal::donation("a@x", BloodGroup::OPositive, units)
    }

    #[test]
    fn inside_range_passes() {
        let stage = UnitRangeStage::new(1, 5);
        for units in 1..=5 {
            assert!(stage
                .evaluate(&proposal(units), &GateContext::minimal())
                .unwrap()
                .is_pass());
        }
    }

    #[test]
    fn below_min_fails() {
        let stage = UnitRangeStage::new(1, 5);
        let decision = stage
            .evaluate(&proposal(0), &GateContext::minimal())
            .unwrap();
        assert!(decision.is_fail());
    }

    #[test]
    fn above_max_fails_with_limits_in_reason() {
        let stage = UnitRangeStage::new(1, 5);
        match stage.evaluate(&proposal(6), &GateContext::minimal()).unwrap() {
            StageDecision::Fail { reason } => {
                assert!(reason.contains("1"));
                assert!(reason.contains("5"));
            }
            StageDecision::Pass => panic!("6 units should not pass a 1..=5 range"),
        }
    }
}
