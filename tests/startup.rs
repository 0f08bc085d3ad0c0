use dioxus_logger::tracing::Level;
use einhorn::{config::Config, startup};
use sea_orm::ConnectionTrait;

fn sqlite_config(rebuild_caches: bool) -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        log_level: Level::INFO,
        sqlx_logging: false,
        rebuild_caches,
    }
}

/// Expect startup to migrate a fresh database and rebuild its empty caches
#[tokio::test]
async fn migrates_and_rebuilds_caches() {
    let result = startup::run(&sqlite_config(true)).await;

    assert!(result.is_ok());
    let db = result.unwrap();
    let inserted = db
        .execute_unprepared(
            "INSERT INTO auth_user (username, created_at) VALUES ('kaede', '2024-03-01 00:00:00')",
        )
        .await;
    assert!(inserted.is_ok());
}

/// Expect an unreachable database to surface as an error instead of a panic
#[tokio::test]
async fn fails_for_unsupported_database_url() {
    let config = Config {
        database_url: "mysql://einhorn@localhost/einhorn".to_string(),
        ..sqlite_config(false)
    };

    let result = startup::run(&config).await;

    assert!(result.is_err());
}
