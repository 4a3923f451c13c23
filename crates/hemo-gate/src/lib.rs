//! Transfer gate for HemoBank.
//!
//! Every donation or request must pass through the gate before it can touch
//! the inventory or the ledger. The gate runs a pipeline of stages and
//! produces a final accept/reject decision with a per-stage audit trail.
//!
//! # Quick Start
//!
//! ```rust
//! use hemo_gate::{GateConfig, TransferGate, TransferProposal};
//! use hemo_types::BloodGroup;
//!
//! let gate = TransferGate::donation_pipeline(GateConfig::default());
//! let proposal = TransferProposal::donation("donor@example.com", BloodGroup::OPositive, 3);
//! let result = gate.evaluate(&proposal).unwrap();
//! assert!(result.is_accepted());
//! ```

pub mod config;
pub mod error;
pub mod gate;
pub mod stage;
pub mod stages;

// Re-exports for convenience.
pub use config::GateConfig;
pub use error::GateError;
pub use gate::{GateResult, TransferGate};
pub use stage::{GateContext, GateStage, StageDecision, StageResult, TransferProposal};
pub use stages::{ConsentStage, StockStage, UnitRangeStage};
