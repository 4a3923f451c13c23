use hemo_store::StoreError;

/// Errors from inventory operations.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    /// The underlying key-value store failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The persisted snapshot is malformed or cannot be encoded.
    #[error("snapshot encoding error: {0}")]
    Encoding(String),
}

/// Result alias for inventory operations.
pub type InventoryResult<T> = Result<T, InventoryError>;
