pub mod authentication;
pub mod health;
pub mod path;
pub mod project;
pub mod query_extractor;
pub mod query_params;
pub mod server;
pub mod task;
pub mod user;
