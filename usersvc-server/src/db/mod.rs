//! Database layer - connection gateway, schema and repositories
//!
//! # Design Principles
//!
//! - Bounded pool, one checkout per request, released on drop
//! - One SQL statement per operation
//! - Rely on DB constraints, map violations to explicit variants - no check-then-insert

pub mod error;
pub mod pool;
pub mod repos;
pub mod schema;

pub use error::DbError;
pub use pool::{Gateway, PoolSettings};
pub use repos::{MetaRepo, NewUser, User, UserRepo};
