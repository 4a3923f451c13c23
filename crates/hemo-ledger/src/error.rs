use hemo_store::StoreError;

/// Errors from ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// The underlying key-value store failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The persisted ledger is malformed or cannot be encoded.
    #[error("ledger encoding error: {0}")]
    Encoding(String),
}

/// Result alias for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;
