use super::key_value_repository::{KeyValueError, KeyValueRepository};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Non-persistent key-value repository, useful for tests and throwaway sessions
#[derive(Default)]
pub struct InMemoryKeyValueRepository {
    values: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryKeyValueRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value, e.g. to simulate data left by a previous run
    pub fn with_value(key: &str, value: impl Into<Vec<u8>>) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.into());
        Self {
            values: RwLock::new(values),
        }
    }
}

#[async_trait]
impl KeyValueRepository for InMemoryKeyValueRepository {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KeyValueError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), KeyValueError> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
