//! HTTP server layer
//!
//! Axum server with:
//! - Allow-list CORS with credentials
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses (`{"detail": ...}`)

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, cors_layer, run_server, AppState, ServerError};
