//! HTTP server command
//!
//! Runs the cars API against MySQL, or against an in-memory store with
//! `--memory`.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use carlot_server::db::create_lazy_pool;
use carlot_server::{
    run_server, CarStore, DbConfig, MemoryCarStore, MySqlCarStore, ServerConfig,
};

use super::db::DbArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "BIND_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Serve from an in-memory store instead of MySQL (data is lost on exit)
    #[arg(long)]
    pub memory: bool,

    #[command(flatten)]
    pub db: DbArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store: Arc<dyn CarStore> = if args.memory {
        tracing::warn!("Using in-memory store - data will not persist");
        Arc::new(MemoryCarStore::new())
    } else {
        let db_config = DbConfig::from(args.db);
        tracing::debug!(?db_config, "database config");

        let pool = create_lazy_pool(&db_config).context("Invalid database configuration")?;
        let store = MySqlCarStore::new(pool);

        // Startup continues when the database is down; requests get a 500
        match store.count().await {
            Ok(count) => tracing::info!(count, "Connected to database"),
            Err(e) => tracing::warn!("Database not reachable yet: {}", e),
        }
        Arc::new(store)
    };

    let config = ServerConfig {
        bind_addr: SocketAddr::new(args.host, args.port),
        cors_permissive: args.cors_permissive,
    };

    tracing::info!("Starting carlot server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(store, config).await.context("Server error")?;

    Ok(())
}
