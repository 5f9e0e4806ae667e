//! Database connection settings
//!
//! Defaults match a local development MySQL:
//! `admin:1234@localhost:3306/cars`.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use sqlx::mysql::MySqlConnectOptions;

/// Default maximum connections for the pool.
/// Kept low for a single small table.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default time to wait for a pooled connection
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the cars database
#[derive(Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    /// Full connection URL; overrides the individual fields when set
    pub url: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3306,
            user: "admin".to_string(),
            password: "1234".to_string(),
            database: "cars".to_string(),
            url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

impl DbConfig {
    /// Build sqlx connect options.
    ///
    /// # Errors
    ///
    /// Returns an error if `url` is set and cannot be parsed.
    pub fn connect_options(&self) -> Result<MySqlConnectOptions, sqlx::Error> {
        if let Some(url) = &self.url {
            return MySqlConnectOptions::from_str(url);
        }

        Ok(MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database))
    }
}

// Password stays out of logs
impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}
