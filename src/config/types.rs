//! Settings for the storage connection and the HTTP listener.

use sqlx::postgres::PgSslMode;
use std::net::SocketAddr;

/// Address the listener binds. The port is fixed.
pub const LISTEN_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 8080);

/// Default pool size.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connection parameters for the relational store.
#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub ssl_mode: PgSslMode,
    pub max_connections: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            host: "localhost".into(),
            port: 5432,
            user: "postgres".into(),
            password: String::new(),
            database: "postgres".into(),
            ssl_mode: PgSslMode::Disable,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
    /// Upper bound applied to the `limit` query parameter. `None` leaves pages unbounded.
    pub max_page_limit: Option<i64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            listen_addr: SocketAddr::from(LISTEN_ADDR),
            max_page_limit: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Settings {
    pub storage: StorageConfig,
    pub server: ServerConfig,
}
