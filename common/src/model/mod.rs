pub mod article;
pub mod layout;
pub mod news;
pub mod query;
