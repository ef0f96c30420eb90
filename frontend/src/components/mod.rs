pub mod loader;
pub mod news;
