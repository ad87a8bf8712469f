use super::key_value_repository::{KeyValueError, KeyValueRepository};
use async_trait::async_trait;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::Builder;

/// Stores each key as `<dir>/<key>.json`
pub struct FileKeyValueRepository {
    dir: PathBuf,
}

impl FileKeyValueRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, KeyValueError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && !key.contains(['/', '\\'])
            && !key.contains("..");
        if !valid {
            return Err(KeyValueError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }

    /// Write `value` to a uniquely named sibling file, then rename it over
    /// `path`. The temp file is removed if any step fails.
    fn write_atomic(dir: &Path, key: &str, path: &Path, value: &[u8]) -> std::io::Result<()> {
        let mut file = Builder::new()
            .prefix(&format!(".{}.", key))
            .suffix(".tmp")
            .tempfile_in(dir)?;
        file.write_all(value)?;
        file.as_file().sync_all()?;
        file.persist(path)?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueRepository for FileKeyValueRepository {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KeyValueError> {
        let path = self.path_for(key)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), KeyValueError> {
        let path = self.path_for(key)?;
        tokio::fs::create_dir_all(&self.dir).await?;

        let dir = self.dir.clone();
        let owned_key = key.to_string();
        let target = path.clone();
        let bytes = value.to_vec();
        tokio::task::spawn_blocking(move || Self::write_atomic(&dir, &owned_key, &target, &bytes))
            .await
            .map_err(std::io::Error::other)??;

        tracing::debug!(key = key, bytes = value.len(), path = %path.display(), "Value written");
        Ok(())
    }
}
