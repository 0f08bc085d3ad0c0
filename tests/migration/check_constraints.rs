use sea_orm::{ConnectionTrait, DbErr};

use super::*;

/// Expect an unknown basic type to be refused by the table
#[tokio::test]
async fn rejects_unknown_basic_type() -> Result<(), DbErr> {
    let db = migrated_db().await?;

    let result = db
        .execute_unprepared(
            "INSERT INTO train_class (basic_type, specific_type, name) VALUES ('SLP', 'Sunrise', '')",
        )
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Expect a dia segment ending on an earlier day than it starts to be refused
#[tokio::test]
async fn rejects_segment_day_order() -> Result<(), DbErr> {
    let db = migrated_db().await?;
    seed(&db).await?;

    let result = db
        .execute_unprepared(
            "INSERT INTO train_dia_segment (train_dia_id, start_station_id, end_station_id, start_day, end_day)
             VALUES (1, 1, 2, 1, 0)",
        )
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Expect segments between the same station to be refused on both segment tables
#[tokio::test]
async fn rejects_same_station_segments() -> Result<(), DbErr> {
    let db = migrated_db().await?;
    seed(&db).await?;

    let dia_segment = db
        .execute_unprepared(
            "INSERT INTO train_dia_segment (train_dia_id, start_station_id, end_station_id, start_day, end_day)
             VALUES (1, 1, 1, 0, 0)",
        )
        .await;
    let segment_log = db
        .execute_unprepared(
            "INSERT INTO segment_log (train_log_id, line_id, start_station_id, end_station_id, memo)
             VALUES (1, 1, 2, 2, '')",
        )
        .await;

    assert!(dia_segment.is_err());
    assert!(segment_log.is_err());

    Ok(())
}

/// Expect a train dia referenced by a train log to be protected from deletion
#[tokio::test]
async fn restricts_deleting_ridden_dia() -> Result<(), DbErr> {
    let db = migrated_db().await?;
    seed(&db).await?;

    let result = db
        .execute_unprepared("DELETE FROM train_dia WHERE id = 1")
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Expect deleting a user to cascade through their trips and logs
#[tokio::test]
async fn cascades_user_deletion() -> Result<(), DbErr> {
    let db = migrated_db().await?;
    seed(&db).await?;
    db.execute_unprepared(
        "INSERT INTO segment_log (train_log_id, line_id, start_station_id, end_station_id, memo)
         VALUES (1, 1, 1, 2, '')",
    )
    .await?;

    db.execute_unprepared("DELETE FROM auth_user WHERE id = 1")
        .await?;

    let remaining = db.execute_unprepared("DELETE FROM segment_log").await?;
    assert_eq!(remaining.rows_affected(), 0);

    Ok(())
}
