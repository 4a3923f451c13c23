use hemo_store::StoreError;
use hemo_types::Role;

/// Errors from session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Login was attempted with an empty or whitespace-only email.
    #[error("email must not be empty")]
    EmptyEmail,

    /// A role-gated operation ran with no active session.
    #[error("not logged in")]
    NotAuthenticated,

    /// The active session holds a different role than the operation needs.
    #[error("requires the {expected} role, but the session is {actual}")]
    RoleMismatch { expected: Role, actual: Role },

    /// The underlying key-value store failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Result alias for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
