//! Load settings from the process environment (optionally seeded from `.env`).

use crate::config::types::{ServerConfig, Settings, StorageConfig};
use crate::error::ConfigError;
use sqlx::postgres::PgSslMode;
use std::str::FromStr;

/// Load `.env` if present, then read settings from the environment.
pub fn load_settings() -> Result<Settings, ConfigError> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!("no .env loaded: {}", e);
    }
    settings_from(|key| std::env::var(key).ok())
}

/// Build settings from a variable lookup. Unset and empty variables take their defaults.
pub fn settings_from<F>(lookup: F) -> Result<Settings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
    let defaults = StorageConfig::default();

    let port = match get("DB_PORT") {
        Some(v) => v.parse::<u16>().map_err(|_| invalid("DB_PORT", v))?,
        None => defaults.port,
    };
    let ssl_mode = match get("DB_SSLMODE") {
        Some(v) => PgSslMode::from_str(&v).map_err(|_| invalid("DB_SSLMODE", v))?,
        None => defaults.ssl_mode,
    };
    let max_connections = match get("DB_MAX_CONNECTIONS") {
        Some(v) => match v.parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => return Err(invalid("DB_MAX_CONNECTIONS", v)),
        },
        None => defaults.max_connections,
    };
    let max_page_limit = match get("BOOKS_MAX_PAGE_LIMIT") {
        Some(v) => match v.parse::<i64>() {
            Ok(n) if n > 0 => Some(n),
            _ => return Err(invalid("BOOKS_MAX_PAGE_LIMIT", v)),
        },
        None => None,
    };

    // Passwords may legitimately contain surrounding whitespace.
    let password = lookup("DB_PASS").unwrap_or(defaults.password);

    Ok(Settings {
        storage: StorageConfig {
            host: get("DB_HOST").unwrap_or(defaults.host),
            port,
            user: get("DB_USER").unwrap_or(defaults.user),
            password,
            database: get("DB_NAME").unwrap_or(defaults.database),
            ssl_mode,
            max_connections,
        },
        server: ServerConfig {
            max_page_limit,
            ..ServerConfig::default()
        },
    })
}

fn invalid(var: &'static str, value: String) -> ConfigError {
    ConfigError::Invalid { var, value }
}
