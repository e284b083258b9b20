//! usersvc-server: HTTP server for a PostgreSQL `users` table
//!
//! Exposes create/list/delete over JSON plus liveness, readiness and
//! database version probes.

pub mod config;
pub mod db;
pub mod http;

pub use config::ServerConfig;
pub use db::{DbError, Gateway, NewUser, PoolSettings, User};
pub use http::{build_router, run_server, ApiError, AppState, ServerError};
