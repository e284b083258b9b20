//! Command implementations for usersvc CLI

pub mod db;
pub mod serve;

// Re-export dispatcher functions for flat access from main.rs
pub use db::{run_db_version, run_init_db};
pub use serve::run_serve;
