//! HTTP server command

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use usersvc_server::config::DEFAULT_ALLOWED_ORIGIN;
use usersvc_server::{run_server, ServerConfig};

use super::db::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "USERSVC_BIND", default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// Origin allowed by CORS (repeatable, or comma separated in env)
    #[arg(
        long = "allowed-origin",
        env = "USERSVC_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = DEFAULT_ALLOWED_ORIGIN
    )]
    pub allowed_origins: Vec<String>,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = 5)]
    pub max_connections: u32,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        Self {
            bind_addr: args.bind,
            database_url: args.db.database_url.clone(),
            allowed_origins: args.allowed_origins,
            pool: args.db.pool_settings(args.max_connections),
        }
    }
}

/// Run the HTTP server (blocks until shutdown)
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting usersvc on {}", args.bind);

    run_server(ServerConfig::from(args))
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_server_config() {
        let args = ServeArgs::try_parse_from(["serve", "--database-url", "postgres://h/db"]).unwrap();
        let config = ServerConfig::from(args);
        let defaults = ServerConfig::default();

        assert_eq!(config.bind_addr, defaults.bind_addr);
        assert_eq!(config.allowed_origins, defaults.allowed_origins);
        assert_eq!(config.pool.max_connections, defaults.pool.max_connections);
        assert_eq!(config.pool.acquire_timeout, defaults.pool.acquire_timeout);
        assert_eq!(config.database_url, "postgres://h/db");
    }

    #[test]
    fn repeated_origins_collected() {
        let args = ServeArgs::try_parse_from([
            "serve",
            "--database-url",
            "postgres://h/db",
            "--allowed-origin",
            "http://a.test",
            "--allowed-origin",
            "http://b.test,http://c.test",
        ])
        .unwrap();

        assert_eq!(
            args.allowed_origins,
            vec!["http://a.test", "http://b.test", "http://c.test"]
        );
    }
}
