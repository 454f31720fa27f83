use std::time::Duration;

use crate::{config::Config, error::AppError};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then runs
/// all pending SeaORM migrations so the game registry, marker store and announcement
/// ledger exist before any watcher starts.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client shared by the upstream fetchers.
///
/// The client timeout matches the fetch timeout so a hung connection is released even
/// when the watcher's own timeout has already given up on the request.
pub fn setup_reqwest_client(fetch_timeout: Duration) -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("gamewatch/", env!("CARGO_PKG_VERSION")))
        .timeout(fetch_timeout)
        .build()?;

    Ok(client)
}

/// Installs the global tracing subscriber, honouring `RUST_LOG` when set.
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gamewatch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
