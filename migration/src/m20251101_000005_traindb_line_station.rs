use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000003_traindb_line::TraindbLine, m20251101_000004_traindb_station::TraindbStation,
};

static IDX_LINE_STATION_STATION_ID: &str = "idx_traindb_line_station_station_id";
static FK_LINE_STATION_LINE_ID: &str = "fk_traindb_line_station_line_id";
static FK_LINE_STATION_STATION_ID: &str = "fk_traindb_line_station_station_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TraindbLineStation::Table)
                    .if_not_exists()
                    .col(integer(TraindbLineStation::LineId))
                    .col(integer(TraindbLineStation::StationId))
                    .col(decimal_len(TraindbLineStation::Kilo, 6, 1))
                    .primary_key(
                        Index::create()
                            .col(TraindbLineStation::LineId)
                            .col(TraindbLineStation::StationId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_LINE_STATION_LINE_ID)
                            .from(TraindbLineStation::Table, TraindbLineStation::LineId)
                            .to(TraindbLine::Table, TraindbLine::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_LINE_STATION_STATION_ID)
                            .from(TraindbLineStation::Table, TraindbLineStation::StationId)
                            .to(TraindbStation::Table, TraindbStation::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LINE_STATION_STATION_ID)
                    .table(TraindbLineStation::Table)
                    .col(TraindbLineStation::StationId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LINE_STATION_STATION_ID)
                    .table(TraindbLineStation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TraindbLineStation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TraindbLineStation {
    Table,
    LineId,
    StationId,
    Kilo,
}
