//! SQLite persistence (infrastructure).

pub mod database;

pub use database::{DB_FILENAME, Database};
