//! Append-only transaction ledger for HemoBank.
//!
//! Every donate/request that clears validation lands here as an immutable
//! [`TransactionRecord`]. The ledger is reverse-chronological: new records
//! are prepended so the most recent is always first. Records are never
//! updated or removed.
//!
//! Ids are time-based (epoch milliseconds) and strictly increasing: when the
//! clock has not advanced past the previous maximum, the id is bumped to
//! `prev_max + 1` at the single append path.

pub mod error;
pub mod ledger;
pub mod records;

pub use error::{LedgerError, LedgerResult};
pub use ledger::TransactionLedger;
pub use records::{TransactionDraft, TransactionRecord};
