//! One-shot database commands

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use usersvc_server::config::DEFAULT_DATABASE_URL;
use usersvc_server::db::{schema, MetaRepo};
use usersvc_server::{Gateway, PoolSettings};

/// Database connection arguments
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// PostgreSQL connection URL
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = DEFAULT_DATABASE_URL,
        hide_env_values = true
    )]
    pub database_url: String,

    /// Seconds to wait for a database connection
    #[arg(long, default_value_t = 30)]
    pub acquire_timeout: u64,
}

impl DatabaseArgs {
    pub fn pool_settings(&self, max_connections: u32) -> PoolSettings {
        PoolSettings {
            max_connections,
            acquire_timeout: Duration::from_secs(self.acquire_timeout),
        }
    }
}

async fn connect(args: &DatabaseArgs) -> Result<Gateway> {
    Gateway::connect(&args.database_url, &args.pool_settings(1))
        .await
        .context("Failed to connect to PostgreSQL")
}

/// Create the users table and exit
pub async fn run_init_db(args: DatabaseArgs) -> Result<()> {
    let gateway = connect(&args).await?;
    schema::init(&gateway)
        .await
        .context("Failed to initialize users schema")?;
    gateway.close().await;

    println!("users table ready");
    Ok(())
}

/// Print the server version string
pub async fn run_db_version(args: DatabaseArgs) -> Result<()> {
    let gateway = connect(&args).await?;
    let version = MetaRepo::new(&gateway)
        .server_version()
        .await
        .context("Failed to query PostgreSQL version")?;
    gateway.close().await;

    println!("Connected to PostgreSQL: {}", version);
    Ok(())
}
