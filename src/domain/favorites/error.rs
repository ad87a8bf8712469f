use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FavoritesError {
    #[error("could not read favorites: {0}")]
    PersistenceRead(String),
    #[error("could not decode favorites: {0}")]
    PersistenceDecode(String),
    #[error("could not save favorites: {0}")]
    PersistenceWrite(String),
    #[error("index {index} out of range for {len} favorites")]
    InvalidIndex { index: usize, len: usize },
}

impl From<FavoritesError> for AppError {
    fn from(err: FavoritesError) -> Self {
        AppError::Favorites(err)
    }
}
