mod check_constraints;
mod up_down;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr};

/// In-memory SQLite database with every migration applied.
async fn migrated_db() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;

    Ok(db)
}

/// A user, a line with two stations, a sheet class and a train class with one dia.
async fn seed(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute_unprepared(
        "INSERT INTO auth_user (id, username, created_at) VALUES (1, 'kaede', '2024-03-01 00:00:00');
         INSERT INTO traindb_company (id, name) VALUES (1, 'JR Central');
         INSERT INTO traindb_line (id, company_id, name) VALUES (1, 1, 'Tokaido');
         INSERT INTO traindb_station (id, name) VALUES (1, 'Tokyo'), (2, 'Shinagawa');
         INSERT INTO traindb_line_station (line_id, station_id, kilo) VALUES (1, 1, 0.0), (1, 2, 6.8);
         INSERT INTO sheet_class (id, name) VALUES (1, 'Ordinary');
         INSERT INTO train_class (id, basic_type, specific_type, name) VALUES (1, 'HSR', 'Nozomi', '');
         INSERT INTO train_dia (id, train_class_id, train_id, is_up, revised_date) VALUES (1, 1, '1A', false, '2024-03-16');
         INSERT INTO trip_log (id, owner_id, memo) VALUES (1, 1, '');
         INSERT INTO train_log (id, trip_log_id, train_dia_id, sheet_class_id) VALUES (1, 1, 1, 1);",
    )
    .await?;

    Ok(())
}
