pub mod common;
pub mod crypto;
pub mod db;
pub mod health;
pub mod project;
pub mod task;
pub mod user;
