use migration::{Migrator, MigratorTrait, SchemaManager};
use sea_orm::{ConnectionTrait, DbErr};

use super::*;

/// Expect every table to be created by the migrations
#[tokio::test]
async fn creates_all_tables() -> Result<(), DbErr> {
    let db = migrated_db().await?;

    let manager = SchemaManager::new(&db);
    for table in [
        "auth_user",
        "traindb_company",
        "traindb_line",
        "traindb_station",
        "traindb_line_station",
        "einhorn_profile",
        "einhorn_profile_accept_user",
        "einhorn_profile_deny_user",
        "sheet_class",
        "sheet_class_company",
        "train_class",
        "train_class_sheet_class",
        "train_class_company",
        "train_dia",
        "train_dia_segment",
        "trip_log",
        "trip_log_partner",
        "train_log",
        "segment_log",
    ] {
        assert!(manager.has_table(table).await?, "missing table {}", table);
    }

    Ok(())
}

/// Expect the migrations to roll back cleanly and apply again
#[tokio::test]
async fn reverts_and_reapplies() -> Result<(), DbErr> {
    let db = migrated_db().await?;

    Migrator::down(&db, None).await?;
    let manager = SchemaManager::new(&db);
    assert!(!manager.has_table("segment_log").await?);
    assert!(!manager.has_table("auth_user").await?);

    Migrator::up(&db, None).await?;
    seed(&db).await?;
    let result = db
        .execute_unprepared("DELETE FROM trip_log WHERE id = 1")
        .await?;
    assert_eq!(result.rows_affected(), 1);

    Ok(())
}
