pub mod file_key_value_repository;
pub mod http_joke_repository;
pub mod joke_repository;
pub mod key_value_repository;
pub mod memory_key_value_repository;

pub use file_key_value_repository::FileKeyValueRepository;
pub use http_joke_repository::HttpJokeRepository;
pub use joke_repository::JokeRepository;
pub use key_value_repository::{KeyValueError, KeyValueRepository};
pub use memory_key_value_repository::InMemoryKeyValueRepository;
