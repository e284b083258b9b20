//! Server configuration
//!
//! All wiring flows from an explicit [`ServerConfig`]; nothing is read from
//! the environment here. The CLI layers flags and env vars on top.

use std::net::SocketAddr;

use crate::db::PoolSettings;

/// Fallback connection URL for local development
pub const DEFAULT_DATABASE_URL: &str = "postgresql://user:password@db:5432/appdb";

/// Origin of the bundled frontend
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:8000)
    pub bind_addr: SocketAddr,

    /// PostgreSQL connection URL
    pub database_url: String,

    /// Origins allowed by the CORS policy. Credentials are always allowed,
    /// so wildcards are rejected at router construction.
    pub allowed_origins: Vec<String>,

    /// Connection pool limits
    pub pool: PoolSettings,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
            pool: PoolSettings::default(),
        }
    }
}
