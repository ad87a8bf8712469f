use crate::domain::joke::{FetchError, Joke};
use async_trait::async_trait;
use reqwest::Url;

/// Repository for retrieving jokes from the remote joke service.
///
/// Implementations are responsible for:
/// - Performing the request against the given URL
/// - Mapping transport failures and non-2xx responses to `FetchError::Network`
/// - Mapping bodies that are not a JSON array of jokes to `FetchError::Decode`
#[async_trait]
pub trait JokeRepository: Send + Sync {
    /// Fetch the jokes served at `url`
    ///
    /// An empty vector is a valid result; deciding what it means is up to
    /// the caller.
    async fn fetch_jokes(&self, url: Url) -> Result<Vec<Joke>, FetchError>;
}
