pub mod favorites;
pub mod joke;
