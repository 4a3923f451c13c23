//! Foundation types for HemoBank.
//!
//! This crate provides the core domain types used throughout the blood-bank
//! system. Every other HemoBank crate depends on `hemo-types`.
//!
//! # Key Types
//!
//! - [`BloodGroup`] — one of the eight fixed stock-keeping categories
//! - [`Role`] — the two mutually exclusive session roles (Donor / Receiver)
//! - [`TransactionKind`] — donate or purchase
//! - [`TransactionStatus`] — completed, failed, or pending
//! - [`Decision`] — gate evaluation result

pub mod decision;
pub mod error;
pub mod group;
pub mod role;
pub mod transfer;

pub use decision::Decision;
pub use error::TypeError;
pub use group::BloodGroup;
pub use role::Role;
pub use transfer::{TransactionKind, TransactionStatus};
