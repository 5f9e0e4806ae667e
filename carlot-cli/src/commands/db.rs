//! Database connection arguments shared by `serve` and `check`

use std::time::Duration;

use clap::Args;

use carlot_server::DbConfig;

#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    /// Database host
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "DB_PORT", default_value_t = 3306)]
    pub db_port: u16,

    /// Database user
    #[arg(long, env = "DB_USER", default_value = "admin")]
    pub db_user: String,

    /// Database password
    #[arg(long, env = "DB_PASSWORD", default_value = "1234", hide_env_values = true)]
    pub db_password: String,

    /// Database name
    #[arg(long, env = "DB_NAME", default_value = "cars")]
    pub db_name: String,

    /// Full connection URL (overrides host/port/user/password/name)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    /// Seconds to wait for a database connection
    #[arg(long, env = "DB_CONNECT_TIMEOUT", default_value_t = 30)]
    pub connect_timeout: u64,
}

impl From<DbArgs> for DbConfig {
    fn from(args: DbArgs) -> Self {
        Self {
            host: args.db_host,
            port: args.db_port,
            user: args.db_user,
            password: args.db_password,
            database: args.db_name,
            url: args.database_url,
            max_connections: args.max_connections,
            acquire_timeout: Duration::from_secs(args.connect_timeout),
        }
    }
}
