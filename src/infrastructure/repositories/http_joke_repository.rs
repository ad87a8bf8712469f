use super::joke_repository::JokeRepository;
use crate::domain::joke::{FetchError, Joke};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;

const USER_AGENT: &str = concat!("jokes/", env!("CARGO_PKG_VERSION"));

/// HTTP implementation of the joke repository
pub struct HttpJokeRepository {
    http_client: Client,
}

impl HttpJokeRepository {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl JokeRepository for HttpJokeRepository {
    async fn fetch_jokes(&self, url: Url) -> Result<Vec<Joke>, FetchError> {
        tracing::debug!(url = %url, "Requesting jokes");

        let response = self
            .http_client
            .get(url.clone())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(format!("Could not get data from {}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Network(format!(
                "Joke service responded with status {}",
                status.as_u16()
            )));
        }

        // Read the body first so a dropped connection is reported as a
        // network failure rather than a decode failure
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(format!("Failed to read response body: {}", e)))?;

        let jokes: Vec<Joke> = serde_json::from_slice(&body)
            .map_err(|e| FetchError::Decode(format!("Could not decode jokes: {}", e)))?;

        tracing::debug!(url = %url, count = jokes.len(), "Jokes decoded");

        Ok(jokes)
    }
}
