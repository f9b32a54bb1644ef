/// Configuration management for the API server
///
/// This module loads configuration from environment variables and provides
/// a type-safe configuration struct.
///
/// # Environment Variables
///
/// - `API_HOST`: Host to bind to (default: 0.0.0.0)
/// - `API_PORT`: Port to bind to (default: 8080)
/// - `API_PRODUCTION`: Enables HSTS and secure cookies (default: false)
/// - `PG_HOST`, `PG_PORT`, `PG_DB_STORE`, `PG_USER`, `PG_PASS`: Product database
/// - `DATABASE_MAX_CONNECTIONS`: Pool size (default: 10)
/// - `DATABASE_QUERY_TIMEOUT_SECONDS`: Product query timeout (default: 5)
/// - `RUST_LOG`: Log filter
///
/// Missing database settings are not an error here; they are logged when
/// the pool is created and surface as storage errors on first use.
///
/// # Example
///
/// ```no_run
/// use storefront_api::config::Config;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// println!("Server will listen on {}", config.bind_address());
/// # Ok(())
/// # }
/// ```

use std::env;
use storefront_shared::db::pool::DatabaseConfig;

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// API server configuration
    pub api: ApiConfig,

    /// Product database configuration
    pub database: DatabaseConfig,
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Production mode (HSTS header, `Secure` session cookie)
    pub production: bool,
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// Reads a `.env` file first when one is present.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric or boolean variable has an invalid value.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup
    ///
    /// Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host = var("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(var("API_PORT"), "API_PORT", 8080u16)?;
        let production = parse_or(var("API_PRODUCTION"), "API_PRODUCTION", false)?;

        let defaults = DatabaseConfig::default();
        let database = DatabaseConfig {
            host: var("PG_HOST"),
            port: parse_or(var("PG_PORT"), "PG_PORT", defaults.port)?,
            database: var("PG_DB_STORE"),
            username: var("PG_USER"),
            password: var("PG_PASS"),
            max_connections: parse_or(
                var("DATABASE_MAX_CONNECTIONS"),
                "DATABASE_MAX_CONNECTIONS",
                defaults.max_connections,
            )?,
            query_timeout_seconds: parse_or(
                var("DATABASE_QUERY_TIMEOUT_SECONDS"),
                "DATABASE_QUERY_TIMEOUT_SECONDS",
                defaults.query_timeout_seconds,
            )?,
            ..defaults
        };

        if database.query_timeout_seconds == 0 {
            anyhow::bail!("DATABASE_QUERY_TIMEOUT_SECONDS must be greater than zero");
        }

        Ok(Self {
            api: ApiConfig {
                host,
                port,
                production,
            },
            database,
        })
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }
}

fn parse_or<T>(value: Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("{} has an invalid value '{}': {}", key, raw, e)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert!(!config.api.production);
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.database.query_timeout_seconds, 5);
        assert_eq!(config.database.missing_settings().len(), 4);
    }

    #[test]
    fn test_database_settings() {
        let config = Config::from_lookup(lookup(&[
            ("PG_HOST", "db.internal"),
            ("PG_DB_STORE", "store"),
            ("PG_USER", "reader"),
            ("PG_PASS", "secret"),
            ("PG_PORT", "6543"),
            ("DATABASE_MAX_CONNECTIONS", "3"),
        ]))
        .unwrap();

        assert_eq!(config.database.host.as_deref(), Some("db.internal"));
        assert_eq!(config.database.database.as_deref(), Some("store"));
        assert_eq!(config.database.username.as_deref(), Some("reader"));
        assert_eq!(config.database.password.as_deref(), Some("secret"));
        assert_eq!(config.database.port, 6543);
        assert_eq!(config.database.max_connections, 3);
        assert!(config.database.missing_settings().is_empty());
    }

    #[test]
    fn test_empty_values_count_as_missing() {
        let config = Config::from_lookup(lookup(&[("PG_HOST", ""), ("API_PORT", " ")])).unwrap();

        assert!(config.database.host.is_none());
        assert_eq!(config.api.port, 8080);
    }

    #[test]
    fn test_bind_address() {
        let config = Config::from_lookup(lookup(&[
            ("API_HOST", "127.0.0.1"),
            ("API_PORT", "3000"),
            ("API_PRODUCTION", "true"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert!(config.api.production);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(Config::from_lookup(lookup(&[("API_PORT", "eighty")])).is_err());
        assert!(Config::from_lookup(lookup(&[("API_PRODUCTION", "maybe")])).is_err());
        assert!(Config::from_lookup(lookup(&[("DATABASE_QUERY_TIMEOUT_SECONDS", "0")])).is_err());
    }
}
