use thiserror::Error;

/// Errors produced by type parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown blood group: {0:?}")]
    UnknownBloodGroup(String),

    #[error("unknown role: {0:?}")]
    UnknownRole(String),

    #[error("unknown transaction kind: {0:?}")]
    UnknownKind(String),

    #[error("unknown transaction status: {0:?}")]
    UnknownStatus(String),
}
