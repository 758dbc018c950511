mod comments;
mod get;
mod history;
mod service;

pub use service::NewsQueryService;
