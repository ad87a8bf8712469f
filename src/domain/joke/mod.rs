pub mod category;
pub mod error;
pub mod model;
pub mod service;

pub use category::{Category, UnknownCategory};
pub use error::FetchError;
pub use model::Joke;
pub use service::{build_url, JokeFetcher};
