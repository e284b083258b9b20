//! usersvc CLI - run and operate the user service
//!
//! - `serve`: initialize the schema and run the HTTP API
//! - `init-db`: create the users table and exit
//! - `db-version`: print the PostgreSQL server version

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "usersvc",
    author,
    version,
    about = "HTTP user service backed by PostgreSQL"
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the users table if it does not exist
    InitDb(commands::db::DatabaseArgs),
    /// Print the database server version
    DbVersion(commands::db::DatabaseArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; real environment variables still apply
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::InitDb(args) => commands::run_init_db(args).await?,
        Commands::DbVersion(args) => commands::run_db_version(args).await?,
    }
    Ok(())
}
