use crate::domain::favorites::FavoritesError;
use crate::domain::joke::FetchError;

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to fetch joke: {0}")]
    Fetch(FetchError),

    #[error("Favorites error: {0}")]
    Favorites(FavoritesError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message suitable for showing to an end user
    pub fn user_message(&self) -> String {
        match self {
            Self::Fetch(_) => {
                "Failed to fetch a new joke. Please check your internet connection.".to_string()
            }
            Self::Favorites(FavoritesError::InvalidIndex { index, len }) => {
                format!("There is no favorite #{} (you have {}).", index, len)
            }
            other => other.to_string(),
        }
    }

    /// Process exit code for the CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 78,
            Self::Fetch(_) => 69,
            Self::Favorites(_) => 74,
            Self::Internal(_) => 70,
        }
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
