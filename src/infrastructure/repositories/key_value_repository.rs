use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum KeyValueError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid key: {0:?}")]
    InvalidKey(String),
}

/// Repository for small persisted blobs addressed by key.
/// Abstracts the host's storage mechanism (files, preferences, in memory).
///
/// Implementations must make `set` atomic: after a failed write a
/// subsequent `get` returns either the old value or nothing, never a
/// partially written one.
#[async_trait]
pub trait KeyValueRepository: Send + Sync {
    /// Read the value stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KeyValueError>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &[u8]) -> Result<(), KeyValueError>;
}
