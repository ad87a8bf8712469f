use std::io::Write;
use std::sync::Arc;

use super::jokes::output_error;
use crate::domain::favorites::FavoritesStore;
use crate::error::AppResult;

pub struct FavoritesController {
    favorites: Arc<FavoritesStore>,
}

impl FavoritesController {
    pub fn new(favorites: Arc<FavoritesStore>) -> Self {
        Self { favorites }
    }

    /// `jokes favorites` - List favorites with the indices `remove` expects
    pub async fn list(&self, out: &mut impl Write) -> AppResult<()> {
        let jokes = self.favorites.favorites().await;

        if jokes.is_empty() {
            writeln!(out, "No favorite jokes yet.").map_err(output_error)?;
            return Ok(());
        }

        for (index, joke) in jokes.iter().enumerate() {
            writeln!(out, "[{}] Setup: {}", index, joke.setup).map_err(output_error)?;
            writeln!(out, "    Punchline: {}", joke.punchline).map_err(output_error)?;
        }

        Ok(())
    }

    /// `jokes remove <index>...` - Remove several favorites at once
    pub async fn remove(&self, out: &mut impl Write, indices: Vec<usize>) -> AppResult<()> {
        let removed = self.favorites.remove_at(indices).await?;

        for joke in &removed {
            writeln!(out, "Removed: {}", joke.setup).map_err(output_error)?;
        }
        writeln!(out, "{} favorite(s) left.", self.favorites.len().await).map_err(output_error)?;

        Ok(())
    }
}
