pub mod errors;
pub mod news;
pub mod user;
