//! carlot CLI - serves the cars JSON API
//!
//! - `serve`: run the HTTP server
//! - `check`: verify the database is reachable and the cars table exists

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::check::CheckArgs;
use commands::serve::ServeArgs;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "carlot",
    author,
    version,
    about = "Create/read JSON API over a MySQL table of cars"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),
    /// Check database connectivity and report the row count
    Check(CheckArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Values from .env only fill variables that are not already set
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::Check(args) => commands::run_check(args).await,
    }
}
