pub mod authentication;
pub mod common;
pub mod crypto;
pub mod health;
pub mod project;
pub mod task;
pub mod user;
