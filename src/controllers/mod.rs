pub mod favorites;
pub mod jokes;
