//! High-level facade for HemoBank.
//!
//! [`BloodBank`] composes the session store, transfer gate, inventory, and
//! transaction ledger over one shared key-value store. This is the main
//! entry point for applications embedding the blood bank.

pub mod bank;
pub mod error;

pub use bank::BloodBank;
pub use error::{BankError, BankResult};

// Re-export key types
pub use hemo_gate::GateConfig;
pub use hemo_inventory::Snapshot;
pub use hemo_ledger::TransactionRecord;
pub use hemo_session::Session;
pub use hemo_types::{BloodGroup, Role, TransactionKind, TransactionStatus};
