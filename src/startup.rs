use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{config::Config, error::Error, service::cache::CacheService};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(config.sqlx_logging);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Connected to database and applied migrations");

    Ok(db)
}

/// Connects, migrates and, if configured, rebuilds every cached trip date and kilo total
pub async fn run(config: &Config) -> Result<DatabaseConnection, Error> {
    let db = connect_to_database(config).await?;

    if config.rebuild_caches {
        CacheService::new(&db).rebuild_all().await?;
    }

    Ok(db)
}
