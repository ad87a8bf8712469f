pub mod error;
pub mod service;

pub use error::FavoritesError;
pub use service::{FavoritesStore, FAVORITES_KEY};
