use super::error::FavoritesError;
use crate::domain::joke::Joke;
use crate::infrastructure::repositories::KeyValueRepository;
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;
use tokio::sync::{watch, Mutex};

/// Key under which the favorites are persisted
pub const FAVORITES_KEY: &str = "favoriteJokes";

/// Ordered, duplicate-free list of favorite jokes, persisted after every change.
///
/// The lock on the collection is held until the persistence write finishes,
/// so writes are serialized and each one stores the state produced by its
/// own mutation.
pub struct FavoritesStore {
    kv_repo: Arc<dyn KeyValueRepository>,
    jokes: Mutex<Vec<Joke>>,
    changed: watch::Sender<Vec<Joke>>,
    load_error: Option<FavoritesError>,
}

impl FavoritesStore {
    /// Hydrate the store from persisted data.
    ///
    /// Never fails: missing, unreadable or undecodable data yields an empty
    /// store. Problems are kept in `load_error` and nothing is written back.
    pub async fn load(kv_repo: Arc<dyn KeyValueRepository>) -> Self {
        let (jokes, load_error) = match Self::read_persisted(kv_repo.as_ref()).await {
            Ok(jokes) => {
                tracing::info!(count = jokes.len(), "Favorites loaded");
                (jokes, None)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Starting with no favorites");
                (Vec::new(), Some(e))
            }
        };

        let (changed, _) = watch::channel(jokes.clone());

        Self {
            kv_repo,
            jokes: Mutex::new(jokes),
            changed,
            load_error,
        }
    }

    /// The non-fatal error encountered while loading, if any
    pub fn load_error(&self) -> Option<&FavoritesError> {
        self.load_error.as_ref()
    }

    /// Snapshot of the favorites in insertion order
    pub async fn favorites(&self) -> Vec<Joke> {
        self.jokes.lock().await.clone()
    }

    pub async fn contains(&self, joke: &Joke) -> bool {
        self.jokes.lock().await.contains(joke)
    }

    pub async fn len(&self) -> usize {
        self.jokes.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.jokes.lock().await.is_empty()
    }

    /// Receive the new list after every change
    pub fn subscribe(&self) -> watch::Receiver<Vec<Joke>> {
        self.changed.subscribe()
    }

    /// Append `joke` unless an equal one is already stored.
    ///
    /// Returns `Ok(true)` if the joke was added. When the write fails the
    /// joke stays in memory and the next successful save persists it.
    pub async fn add(&self, joke: Joke) -> Result<bool, FavoritesError> {
        let mut jokes = self.jokes.lock().await;

        if jokes.contains(&joke) {
            tracing::info!(setup = %joke.setup, "Joke already in favorites");
            return Ok(false);
        }

        jokes.push(joke);
        self.changed.send_replace(jokes.clone());
        tracing::info!(count = jokes.len(), "Joke added to favorites");

        self.persist(&jokes).await?;
        Ok(true)
    }

    /// Remove the favorites at `indices` and persist the result.
    ///
    /// Either every index is valid and all are removed, or nothing changes.
    /// Returns the removed jokes in ascending index order.
    pub async fn remove_at(
        &self,
        indices: impl IntoIterator<Item = usize>,
    ) -> Result<Vec<Joke>, FavoritesError> {
        let indices: BTreeSet<usize> = indices.into_iter().collect();
        let mut jokes = self.jokes.lock().await;

        if let Some(&index) = indices.iter().find(|&&i| i >= jokes.len()) {
            return Err(FavoritesError::InvalidIndex {
                index,
                len: jokes.len(),
            });
        }
        if indices.is_empty() {
            return Ok(Vec::new());
        }

        let mut removed: Vec<Joke> = indices.iter().rev().map(|&i| jokes.remove(i)).collect();
        removed.reverse();

        self.changed.send_replace(jokes.clone());
        tracing::info!(
            removed = removed.len(),
            count = jokes.len(),
            "Jokes removed from favorites"
        );

        self.persist(&jokes).await?;
        Ok(removed)
    }

    /// Write the whole collection to storage, replacing what was there
    pub async fn save(&self) -> Result<(), FavoritesError> {
        let jokes = self.jokes.lock().await;
        self.persist(&jokes).await
    }

    async fn persist(&self, jokes: &[Joke]) -> Result<(), FavoritesError> {
        let data = serde_json::to_vec(jokes).map_err(|e| {
            tracing::warn!(error = %e, "Unable to encode favorite jokes");
            FavoritesError::PersistenceWrite(e.to_string())
        })?;

        self.kv_repo.set(FAVORITES_KEY, &data).await.map_err(|e| {
            tracing::warn!(error = %e, "Unable to save favorite jokes");
            FavoritesError::PersistenceWrite(e.to_string())
        })
    }

    async fn read_persisted(kv_repo: &dyn KeyValueRepository) -> Result<Vec<Joke>, FavoritesError> {
        let Some(data) = kv_repo
            .get(FAVORITES_KEY)
            .await
            .map_err(|e| FavoritesError::PersistenceRead(e.to_string()))?
        else {
            return Ok(Vec::new());
        };

        let mut jokes: Vec<Joke> = serde_json::from_slice(&data)
            .map_err(|e| FavoritesError::PersistenceDecode(e.to_string()))?;

        // Hand-edited or older data may contain repeats; keep the first
        let mut seen = HashSet::new();
        jokes.retain(|joke| seen.insert(joke.clone()));

        Ok(jokes)
    }
}
