use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::config::Config;

/// Opens the connection pool from one configurable routine. Pool bounds and
/// timeouts all come from [`Config`]; the handle is injected into the router
/// state rather than held in a global.
pub async fn connect(config: &Config) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(&config.database_url);
    options
        .max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(config.db_connect_timeout_secs))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime_secs))
        .sqlx_logging(false);

    tracing::info!(
        max_connections = config.db_max_connections,
        min_connections = config.db_min_connections,
        "Connecting to database..."
    );

    let db = Database::connect(options).await?;

    tracing::info!("Successfully connected to database");
    Ok(db)
}
