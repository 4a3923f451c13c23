use crate::error::StoreResult;

/// Flat key-value store of string values.
///
/// All implementations must satisfy these invariants:
/// - Values are opaque; the store never interprets them.
/// - `get` on a missing key returns `Ok(None)`, never an error.
/// - `set` overwrites silently; last write wins.
/// - All I/O errors are propagated, never silently ignored.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write (create or overwrite) the value under `key`.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Delete the value under `key`. Returns `true` if the key existed.
    fn remove(&self, key: &str) -> StoreResult<bool>;

    /// Check whether a key is present.
    ///
    /// Default implementation reads through `get()`. Backends may override
    /// to avoid cloning the value.
    fn contains(&self, key: &str) -> StoreResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}
