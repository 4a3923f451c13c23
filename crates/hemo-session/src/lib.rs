//! Session state for HemoBank.
//!
//! One client holds at most one active session: an email plus a role, stored
//! under two plain string keys. Sessions are created at login, read by every
//! workflow, and cleared at logout. The [`SessionGate`] is the two-state
//! machine (unauthenticated / authenticated) that role-specific workflows
//! consult before doing anything.

pub mod error;
pub mod gate;
pub mod session;

pub use error::{SessionError, SessionResult};
pub use gate::SessionGate;
pub use session::{Session, SessionStore};
