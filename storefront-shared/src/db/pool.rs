/// Database connection pool management
///
/// The product catalog lives in an external PostgreSQL database. The pool is
/// created lazily: no connection is opened until the first query, so the
/// service starts even when the database is unreachable or misconfigured.
///
/// # Example
///
/// ```no_run
/// use storefront_shared::db::pool::{create_pool, health_check, DatabaseConfig};
///
/// # async fn example() -> Result<(), sqlx::Error> {
/// let config = DatabaseConfig {
///     host: Some("localhost".to_string()),
///     database: Some("store".to_string()),
///     username: Some("store".to_string()),
///     password: Some("secret".to_string()),
///     ..Default::default()
/// };
///
/// let pool = create_pool(&config);
/// health_check(&pool).await?;
/// # Ok(())
/// # }
/// ```

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Configuration for the product database connection
///
/// Connection fields have no defaults. A missing field is reported by
/// [`DatabaseConfig::missing_settings`] and surfaces as a connection error
/// on first use.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database host (`PG_HOST`)
    pub host: Option<String>,

    /// Database port (`PG_PORT`)
    pub port: u16,

    /// Database name (`PG_DB_STORE`)
    pub database: Option<String>,

    /// Login role (`PG_USER`)
    pub username: Option<String>,

    /// Login password (`PG_PASS`)
    pub password: Option<String>,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Timeout for acquiring a connection from the pool (seconds)
    pub connect_timeout_seconds: u64,

    /// Upper bound on a single catalog query, including acquisition (seconds)
    pub query_timeout_seconds: u64,

    /// How long a connection can remain idle before being closed (seconds)
    pub idle_timeout_seconds: Option<u64>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: None,
            port: 5432,
            database: None,
            username: None,
            password: None,
            max_connections: 10,
            connect_timeout_seconds: 5,
            query_timeout_seconds: 5,
            idle_timeout_seconds: Some(600),
        }
    }
}

impl DatabaseConfig {
    /// Names of the environment variables whose values are missing
    pub fn missing_settings(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.host.is_none() {
            missing.push("PG_HOST");
        }
        if self.database.is_none() {
            missing.push("PG_DB_STORE");
        }
        if self.username.is_none() {
            missing.push("PG_USER");
        }
        if self.password.is_none() {
            missing.push("PG_PASS");
        }
        missing
    }

    /// Query timeout as a `Duration`
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_seconds)
    }

    /// Builds sqlx connect options from the configured fields
    ///
    /// TLS is disabled to match the existing deployment of the store database.
    pub fn connect_options(&self) -> PgConnectOptions {
        let mut options = PgConnectOptions::new()
            .port(self.port)
            .ssl_mode(PgSslMode::Disable);

        if let Some(host) = &self.host {
            options = options.host(host);
        }
        if let Some(database) = &self.database {
            options = options.database(database);
        }
        if let Some(username) = &self.username {
            options = options.username(username);
        }
        if let Some(password) = &self.password {
            options = options.password(password);
        }

        options
    }
}

/// Creates a lazily connecting PostgreSQL pool
///
/// Never fails: connection problems are reported by the first query or by
/// [`health_check`].
pub fn create_pool(config: &DatabaseConfig) -> PgPool {
    info!(
        max_connections = config.max_connections,
        connect_timeout_seconds = config.connect_timeout_seconds,
        "Creating database connection pool"
    );

    let missing = config.missing_settings();
    if !missing.is_empty() {
        warn!(missing = ?missing, "Database settings are incomplete; product queries will fail");
    }

    let mut pool_options = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(0)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds));

    if let Some(idle_timeout) = config.idle_timeout_seconds {
        pool_options = pool_options.idle_timeout(Duration::from_secs(idle_timeout));
        debug!(idle_timeout_seconds = idle_timeout, "Set idle timeout");
    }

    pool_options.connect_lazy_with(config.connect_options())
}

/// Performs a health check on the database connection
///
/// # Errors
///
/// Returns an error if the database cannot be reached or answers unexpectedly.
pub async fn health_check(pool: &PgPool) -> Result<(), sqlx::Error> {
    debug!("Performing database health check");

    let result: (i32,) = sqlx::query_as("SELECT 1").fetch_one(pool).await?;

    if result.0 == 1 {
        debug!("Database health check passed");
        Ok(())
    } else {
        warn!("Database health check returned unexpected value: {}", result.0);
        Err(sqlx::Error::Protocol(
            "Health check returned unexpected value".into(),
        ))
    }
}

/// Gracefully closes the connection pool
pub async fn close_pool(pool: PgPool) {
    info!("Closing database connection pool");
    pool.close().await;
    info!("Database connection pool closed");
}
