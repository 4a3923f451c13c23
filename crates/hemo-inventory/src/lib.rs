//! Blood-group inventory for HemoBank.
//!
//! The inventory is a single persisted snapshot mapping each of the eight
//! blood groups to a non-negative unit count. It is seeded from a fixed
//! default census on first access, incremented by donations, and drawn down
//! by requests.
//!
//! # Invariants
//!
//! - A count never goes below zero: [`InventoryStore::adjust`] clamps at the
//!   floor regardless of delta magnitude or sign.
//! - Groups are never deleted; the snapshot is only overwritten.
//! - A group missing from a stored snapshot reads as 0.

pub mod defaults;
pub mod error;
pub mod store;

pub use defaults::{default_snapshot, DEFAULT_STOCK};
pub use error::{InventoryError, InventoryResult};
pub use store::{InventoryStore, Snapshot};
