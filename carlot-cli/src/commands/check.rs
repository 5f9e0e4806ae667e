//! Connectivity check: connect, count rows, exit

use anyhow::{Context, Result};
use clap::Parser;

use carlot_server::db::create_pool;
use carlot_server::{CarStore, DbConfig, MySqlCarStore};

use super::db::DbArgs;

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub db: DbArgs,
}

pub async fn run_check(args: CheckArgs) -> Result<()> {
    let db_config = DbConfig::from(args.db);
    let pool = create_pool(&db_config)
        .await
        .context("Failed to connect to database")?;

    let count = MySqlCarStore::new(pool)
        .count()
        .await
        .context("Failed to query cars table")?;

    tracing::info!(count, "cars table reachable");
    println!("ok: {} cars", count);
    Ok(())
}
