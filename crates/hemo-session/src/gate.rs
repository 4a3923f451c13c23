use hemo_store::KeyValueStore;
use hemo_types::Role;
use tracing::warn;

use crate::error::{SessionError, SessionResult};
use crate::session::{Session, SessionStore};

/// Role gate for role-specific workflows.
///
/// Two states: unauthenticated (no session) and authenticated (email + role
/// present). Entering a role-specific workflow with no session, or with a
/// mismatching role, yields a typed error the caller surfaces by returning
/// to the unauthenticated entry point.
pub struct SessionGate<S> {
    sessions: SessionStore<S>,
}

impl<S: KeyValueStore> SessionGate<S> {
    /// Create a gate over the given session store.
    pub fn new(sessions: SessionStore<S>) -> Self {
        Self { sessions }
    }

    /// The active session if it holds `expected`; otherwise
    /// [`SessionError::NotAuthenticated`] or [`SessionError::RoleMismatch`].
    pub fn require(&self, expected: Role) -> SessionResult<Session> {
        let session = self
            .sessions
            .current()?
            .ok_or(SessionError::NotAuthenticated)?;
        if session.role != expected {
            warn!(%expected, actual = %session.role, "role gate rejected session");
            return Err(SessionError::RoleMismatch {
                expected,
                actual: session.role,
            });
        }
        Ok(session)
    }

    /// The active session regardless of role, or
    /// [`SessionError::NotAuthenticated`].
    pub fn require_any(&self) -> SessionResult<Session> {
        self.sessions
            .current()?
            .ok_or(SessionError::NotAuthenticated)
    }
}
