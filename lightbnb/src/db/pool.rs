//! Connection pool lifecycle.
//!
//! The pool is process-wide: [`connect`] creates it once at startup and the owner closes it with
//! `PgPool::close` on shutdown. Repositories never reach for a global; callers acquire a connection
//! from the pool (or begin a transaction) and pass it in.

use crate::config::{Config, DatabaseConfig, PoolSettings};
use log::LevelFilter;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use std::time::Duration;
use tracing::info;

/// Connection options for the configured database.
///
/// Every statement is logged at debug level; statements slower than `slow_statement_threshold`
/// are logged again at warn level.
pub fn connect_options(database: &DatabaseConfig, slow_statement_threshold: Duration) -> Result<PgConnectOptions, sqlx::Error> {
    let options = match &database.url {
        Some(url) => url.parse::<PgConnectOptions>()?,
        None => {
            let options = PgConnectOptions::new()
                .host(&database.host)
                .port(database.port)
                .database(&database.name)
                .username(&database.user);
            match &database.password {
                Some(password) => options.password(password),
                None => options,
            }
        }
    };

    Ok(options
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, slow_statement_threshold))
}

pub fn pool_options(settings: &PoolSettings) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(settings.acquire_timeout())
        .idle_timeout(settings.idle_timeout())
        .max_lifetime(settings.max_lifetime())
}

/// Open the application's connection pool.
pub async fn connect(config: &Config) -> Result<PgPool, sqlx::Error> {
    let options = connect_options(&config.database, config.slow_statement_threshold())?;
    info!(
        host = options.get_host(),
        database = options.get_database().unwrap_or_default(),
        max_connections = config.database.pool.max_connections,
        "Connecting to database"
    );

    pool_options(&config.database.pool).connect_with(options).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_options_from_fields() {
        let database = DatabaseConfig {
            host: "db.internal".to_string(),
            port: 6543,
            name: "rentals".to_string(),
            user: "app".to_string(),
            ..Default::default()
        };

        let options = connect_options(&database, Duration::from_secs(1)).unwrap();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_database(), Some("rentals"));
        assert_eq!(options.get_username(), "app");
    }

    #[test]
    fn test_url_takes_precedence_over_fields() {
        let database = DatabaseConfig {
            url: Some("postgres://guest@replica.internal:5433/lightbnb_ro".to_string()),
            host: "ignored".to_string(),
            ..Default::default()
        };

        let options = connect_options(&database, Duration::from_secs(1)).unwrap();
        assert_eq!(options.get_host(), "replica.internal");
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_database(), Some("lightbnb_ro"));
        assert_eq!(options.get_username(), "guest");
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let database = DatabaseConfig {
            url: Some("not a connection string".to_string()),
            ..Default::default()
        };

        assert!(connect_options(&database, Duration::from_secs(1)).is_err());
    }

    #[test]
    fn test_pool_options_follow_settings() {
        let settings = PoolSettings {
            max_connections: 7,
            min_connections: 2,
            acquire_timeout_secs: 5,
            idle_timeout_secs: 0,
            max_lifetime_secs: 60,
        };

        let options = pool_options(&settings);
        assert_eq!(options.get_max_connections(), 7);
        assert_eq!(options.get_min_connections(), 2);
        assert_eq!(options.get_acquire_timeout(), Duration::from_secs(5));
        assert_eq!(options.get_idle_timeout(), None);
        assert_eq!(options.get_max_lifetime(), Some(Duration::from_secs(60)));
    }
}
