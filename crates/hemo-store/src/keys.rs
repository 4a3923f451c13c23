//! Canonical storage keys for the blood-bank namespace.
//!
//! Every subsystem addresses the shared store through these names, so the
//! full persisted state of one bank is exactly these four entries.

/// Inventory snapshot: JSON object mapping blood-group label to unit count.
pub const INVENTORY: &str = "bloodbank_inventory";

/// Transaction ledger: JSON array of records, newest first.
pub const TRANSACTIONS: &str = "bloodbank_transactions";

/// Current session email: plain string.
pub const USER_EMAIL: &str = "bloodbank_user_email";

/// Current session role: plain string ("Donor" or "Receiver").
pub const USER_ROLE: &str = "bloodbank_user_role";
