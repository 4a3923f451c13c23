use std::time::{Duration, Instant};

use hemo_types::Decision;
use tracing::warn;

use crate::config::GateConfig;
use crate::error::GateError;
use crate::stage::{GateContext, GateStage, StageDecision, StageResult, TransferProposal};
use crate::stages::{ConsentStage, StockStage, UnitRangeStage};

// ---------------------------------------------------------------------------
// GateResult
// ---------------------------------------------------------------------------

/// The outcome of running a proposal through the full gate pipeline.
#[derive(Debug)]
pub struct GateResult {
    /// The final decision: accepted or rejected.
    pub decision: Decision,
    /// Per-stage results in evaluation order.
    pub stage_results: Vec<StageResult>,
    /// Total wall-clock time for the pipeline evaluation.
    pub elapsed: Duration,
}

impl GateResult {
    /// Returns `true` if the proposal was accepted.
    pub fn is_accepted(&self) -> bool {
        self.decision.is_accepted()
    }

    /// The name of the stage that rejected, if any.
    pub fn failed_stage(&self) -> Option<&str> {
        self.stage_results
            .iter()
            .find(|r| !r.passed)
            .map(|r| r.stage_name.as_str())
    }
}

// ---------------------------------------------------------------------------
// TransferGate
// ---------------------------------------------------------------------------

/// The transfer gate: a pipeline of stages that every donate/request must
/// pass through before it may touch the inventory or the ledger.
pub struct TransferGate {
    stages: Vec<Box<dyn GateStage>>,
    config: GateConfig,
}

impl TransferGate {
    /// Create a new gate with the given configuration and an empty
    /// pipeline. Use [`Self::add_stage`], or one of the pipeline
    /// constructors for the standard stage sets.
    pub fn new(config: GateConfig) -> Self {
        Self {
            stages: Vec::new(),
            config,
        }
    }

    /// The pipeline donations run through: unit-range.
    pub fn donation_pipeline(config: GateConfig) -> Self {
        let range = UnitRangeStage::new(config.min_units, config.donation_max_units);
        let mut gate = Self::new(config);
        gate.add_stage(Box::new(range));
        gate
    }

    /// The pipeline requests run through: consent -> unit-range -> stock.
    /// Check order matches the submission form: consent is checked before
    /// anything else, stock last.
    pub fn request_pipeline(config: GateConfig) -> Self {
        let range = UnitRangeStage::new(config.min_units, config.request_max_units);
        let mut gate = Self::new(config);
        gate.add_stage(Box::new(ConsentStage));
        gate.add_stage(Box::new(range));
        gate.add_stage(Box::new(StockStage));
        gate
    }

    /// Append a stage to the end of the pipeline.
    pub fn add_stage(&mut self, stage: Box<dyn GateStage>) {
        self.stages.push(stage);
    }

    /// The current configuration.
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Number of stages in the pipeline.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Evaluate a proposal with an empty context (sufficient for pipelines
    /// that never consult stock).
    pub fn evaluate(&self, proposal: &TransferProposal) -> Result<GateResult, GateError> {
        let mut context = GateContext::minimal();
        self.evaluate_with_context(proposal, &mut context)
    }

    /// Evaluate a proposal through the full pipeline.
    ///
    /// The pipeline is **fail-fast**: the first stage that fails stops
    /// evaluation and produces a `Rejected` decision. If all stages pass
    /// the decision is `Accepted`.
    pub fn evaluate_with_context(
        &self,
        proposal: &TransferProposal,
        context: &mut GateContext,
    ) -> Result<GateResult, GateError> {
        let pipeline_start = Instant::now();
        let mut stage_results = Vec::with_capacity(self.stages.len());

        for stage in &self.stages {
            let stage_start = Instant::now();
            let decision = stage.evaluate(proposal, context)?;
            let elapsed = stage_start.elapsed();

            let (passed, reason) = match &decision {
                StageDecision::Pass => (true, None),
                StageDecision::Fail { reason } => (false, Some(reason.clone())),
            };

            let result = StageResult {
                stage_name: stage.name().to_string(),
                passed,
                reason,
                elapsed,
            };

            stage_results.push(result.clone());
            context.previous_stages.push(result);

            // Fail-fast: stop on first failure.
            if let StageDecision::Fail { reason } = decision {
                warn!(stage = stage.name(), %reason, "transfer rejected");
                return Ok(GateResult {
                    decision: Decision::Rejected { reason },
                    stage_results,
                    elapsed: pipeline_start.elapsed(),
                });
            }
        }

        Ok(GateResult {
            decision: Decision::Accepted,
            stage_results,
            elapsed: pipeline_start.elapsed(),
        })
    }
}
