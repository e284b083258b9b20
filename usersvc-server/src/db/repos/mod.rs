//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Checks out one connection per call from the [`Gateway`](super::Gateway)
//! - Executes exactly one statement
//! - Writes run inside a transaction that rolls back unless committed

pub mod meta;
pub mod users;

pub use meta::MetaRepo;
pub use users::{NewUser, User, UserRepo};
