//! Key-value persistence for HemoBank.
//!
//! All blood-bank state (inventory snapshot, transaction ledger, session)
//! lives in a flat key-value namespace of string values, JSON-encoded where
//! structured. This crate defines that boundary so the domain crates depend
//! on an interface rather than a concrete global.
//!
//! # Storage Backends
//!
//! All backends implement the [`KeyValueStore`] trait:
//!
//! - [`MemoryStore`] — `HashMap`-based store for tests and embedding
//! - [`JsonFileStore`] — single JSON document on disk, write-through
//!
//! # Design Rules
//!
//! 1. Values are opaque strings; the store never interprets them.
//! 2. `get` on a missing key is `Ok(None)`, never an error.
//! 3. All I/O and serialization errors are propagated, never silently
//!    ignored.
//! 4. Handles are `Send + Sync` so one store can back every subsystem.

pub mod error;
pub mod file;
pub mod keys;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;
