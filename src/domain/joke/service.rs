use super::category::Category;
use super::error::FetchError;
use super::model::Joke;
use crate::infrastructure::repositories::JokeRepository;
use reqwest::Url;
use std::sync::Arc;
use tokio::sync::watch;

/// The joke service is always asked for a single joke
const JOKE_LIMIT: u32 = 1;

/// Build the request URL for a category: `{base_url}/type/{category}/1`
pub fn build_url(base_url: &str, category: Category) -> Result<Url, FetchError> {
    let raw = format!(
        "{}/type/{}/{}",
        base_url.trim_end_matches('/'),
        category.as_path_segment(),
        JOKE_LIMIT
    );

    let url = Url::parse(&raw)
        .map_err(|e| FetchError::Network(format!("Could not convert {} to a URL: {}", raw, e)))?;

    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(FetchError::Network(format!("{} is not a valid joke service URL", raw)));
    }

    Ok(url)
}

/// Fetches jokes for the selected category and publishes the latest one.
///
/// The current joke starts out empty and is only replaced by a successful
/// fetch; failures leave it untouched. Concurrent fetches are not
/// coordinated, whichever completes last wins.
pub struct JokeFetcher {
    joke_repo: Arc<dyn JokeRepository>,
    base_url: String,
    category: watch::Sender<Category>,
    current: watch::Sender<Joke>,
}

impl JokeFetcher {
    pub fn new(joke_repo: Arc<dyn JokeRepository>, base_url: impl Into<String>) -> Self {
        let (category, _) = watch::channel(Category::default());
        let (current, _) = watch::channel(Joke::default());

        Self {
            joke_repo,
            base_url: base_url.into(),
            category,
            current,
        }
    }

    pub fn with_category(self, category: Category) -> Self {
        self.set_category(category);
        self
    }

    pub fn category(&self) -> Category {
        *self.category.borrow()
    }

    /// Select the category used by the next fetch
    pub fn set_category(&self, category: Category) {
        self.category.send_replace(category);
    }

    /// The most recently fetched joke, or the empty joke if none succeeded yet
    pub fn current_joke(&self) -> Joke {
        self.current.borrow().clone()
    }

    /// Receive a notification whenever the current joke is replaced
    pub fn subscribe(&self) -> watch::Receiver<Joke> {
        self.current.subscribe()
    }

    /// Receive a notification whenever the selected category changes
    pub fn subscribe_category(&self) -> watch::Receiver<Category> {
        self.category.subscribe()
    }

    /// Fetch a joke for the selected category and make it the current joke
    pub async fn fetch(&self) -> Result<Joke, FetchError> {
        let category = self.category();
        let url = build_url(&self.base_url, category)?;

        tracing::info!(url = %url, category = %category, "Fetching joke");

        let jokes = self.joke_repo.fetch_jokes(url).await.map_err(|e| {
            tracing::warn!(category = %category, error = %e, "Joke fetch failed");
            e
        })?;

        let joke = jokes.into_iter().next().ok_or_else(|| {
            tracing::warn!(category = %category, "Joke service returned no jokes");
            FetchError::Decode("no jokes in response".to_string())
        })?;

        tracing::info!(
            category = %category,
            setup = %joke.setup,
            "Joke fetched"
        );

        self.current.send_replace(joke.clone());
        Ok(joke)
    }
}
