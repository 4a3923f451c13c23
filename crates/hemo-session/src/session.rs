use std::sync::Arc;

use hemo_store::{keys, KeyValueStore};
use hemo_types::Role;
use tracing::{debug, info};

use crate::error::{SessionError, SessionResult};

/// The current user's identity: email plus role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub email: String,
    pub role: Role,
}

/// Session state keyed into a shared [`KeyValueStore`].
///
/// Email and role live under two separate plain-string keys; a session
/// exists only when both are present and the role parses.
pub struct SessionStore<S> {
    store: Arc<S>,
}

impl<S> Clone for SessionStore<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Create a session view over the shared store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Start a session. The email must be non-empty; it is stored as given,
    /// not normalized.
    pub fn login(&self, email: &str, role: Role) -> SessionResult<Session> {
        if email.trim().is_empty() {
            return Err(SessionError::EmptyEmail);
        }
        self.store.set(keys::USER_EMAIL, email)?;
        self.store.set(keys::USER_ROLE, role.label())?;
        info!(email, %role, "session started");
        Ok(Session {
            email: email.to_string(),
            role,
        })
    }

    /// The active session, if any.
    ///
    /// A missing key or an unparseable stored role both read as "no
    /// session"; the stored bytes are left alone for the next login to
    /// overwrite.
    pub fn current(&self) -> SessionResult<Option<Session>> {
        let Some(email) = self.store.get(keys::USER_EMAIL)? else {
            return Ok(None);
        };
        let Some(raw_role) = self.store.get(keys::USER_ROLE)? else {
            return Ok(None);
        };
        match raw_role.parse::<Role>() {
            Ok(role) => Ok(Some(Session { email, role })),
            Err(_) => {
                debug!(%raw_role, "stored role does not parse; treating as logged out");
                Ok(None)
            }
        }
    }

    /// End the session. Returns `true` if one existed.
    pub fn logout(&self) -> SessionResult<bool> {
        let had_email = self.store.remove(keys::USER_EMAIL)?;
        self.store.remove(keys::USER_ROLE)?;
        if had_email {
            info!("session cleared");
        }
        Ok(had_email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hemo_store::MemoryStore;

    fn test_sessions() -> (Arc<MemoryStore>, SessionStore<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let sessions = SessionStore::new(Arc::clone(&store));
        (store, sessions)
    }

    #[test]
    fn login_then_current() {
        let (_, sessions) = test_sessions();
        let session = sessions.login("alice@example.com", Role::Donor).unwrap();
        assert_eq!(sessions.current().unwrap(), Some(session));
    }

    #[test]
    fn login_rejects_empty_email() {
        let (_, sessions) = test_sessions();
        assert!(matches!(
            sessions.login("", Role::Donor),
            Err(SessionError::EmptyEmail)
        ));
        assert!(matches!(
            sessions.login("   ", Role::Receiver),
            Err(SessionError::EmptyEmail)
        ));
        // Nothing persisted on rejection.
        assert_eq!(sessions.current().unwrap(), None);
    }

    #[test]
    fn login_persists_plain_strings() {
        let (store, sessions) = test_sessions();
        sessions.login("bob@example.com", Role::Receiver).unwrap();
        assert_eq!(
            store.get(keys::USER_EMAIL).unwrap().as_deref(),
            Some("bob@example.com")
        );
        assert_eq!(store.get(keys::USER_ROLE).unwrap().as_deref(), Some("Receiver"));
    }

    #[test]
    fn relogin_overwrites() {
        let (_, sessions) = test_sessions();
        sessions.login("a@x", Role::Donor).unwrap();
        sessions.login("b@x", Role::Receiver).unwrap();
        let current = sessions.current().unwrap().unwrap();
        assert_eq!(current.email, "b@x");
        assert_eq!(current.role, Role::Receiver);
    }

    #[test]
    fn logout_clears_both_keys() {
        let (store, sessions) = test_sessions();
        sessions.login("a@x", Role::Donor).unwrap();
        assert!(sessions.logout().unwrap());
        assert_eq!(sessions.current().unwrap(), None);
        assert!(store.get(keys::USER_EMAIL).unwrap().is_none());
        assert!(store.get(keys::USER_ROLE).unwrap().is_none());
    }

    #[test]
    fn logout_without_session_is_false() {
        let (_, sessions) = test_sessions();
        assert!(!sessions.logout().unwrap());
    }

    #[test]
    fn partial_state_reads_as_no_session() {
        let (store, sessions) = test_sessions();
        store.set(keys::USER_EMAIL, "a@x").unwrap();
        assert_eq!(sessions.current().unwrap(), None);
    }

    #[test]
    fn garbage_role_reads_as_no_session() {
        let (store, sessions) = test_sessions();
        store.set(keys::USER_EMAIL, "a@x").unwrap();
        store.set(keys::USER_ROLE, "Admin").unwrap();
        assert_eq!(sessions.current().unwrap(), None);
    }
}
