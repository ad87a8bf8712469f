use std::io::Write;
use std::sync::Arc;

use crate::domain::favorites::FavoritesStore;
use crate::domain::joke::{Category, Joke, JokeFetcher};
use crate::error::{AppError, AppResult};

pub struct JokeController {
    fetcher: Arc<JokeFetcher>,
    favorites: Arc<FavoritesStore>,
}

impl JokeController {
    pub fn new(fetcher: Arc<JokeFetcher>, favorites: Arc<FavoritesStore>) -> Self {
        Self { fetcher, favorites }
    }

    /// `jokes fetch` - Fetch a joke, optionally saving it as a favorite
    pub async fn fetch(
        &self,
        out: &mut impl Write,
        category: Option<Category>,
        favorite: bool,
    ) -> AppResult<()> {
        if let Some(category) = category {
            self.fetcher.set_category(category);
        }

        let joke = self.fetcher.fetch().await?;
        write_joke(out, &joke)?;

        if favorite {
            let added = self.favorites.add(joke).await?;
            let note = if added {
                "Joke added to favorites."
            } else {
                "Joke already in favorites."
            };
            writeln!(out, "{}", note).map_err(output_error)?;
        }

        Ok(())
    }

    /// `jokes categories` - List the categories that can be fetched
    pub fn categories(&self, out: &mut impl Write) -> AppResult<()> {
        let selected = self.fetcher.category();
        for category in Category::ALL {
            let marker = if category == selected { "*" } else { " " };
            writeln!(out, "{} {}", marker, category).map_err(output_error)?;
        }
        Ok(())
    }
}

pub(crate) fn write_joke(out: &mut impl Write, joke: &Joke) -> AppResult<()> {
    writeln!(out, "Setup: {}", joke.setup).map_err(output_error)?;
    writeln!(out, "Punchline: {}", joke.punchline).map_err(output_error)
}

pub(crate) fn output_error(err: std::io::Error) -> AppError {
    AppError::Internal(format!("Failed to write output: {}", err))
}
