use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000004_traindb_station::TraindbStation, m20251101_000009_train_dia::TrainDia,
};

static IDX_TRAIN_DIA_SEGMENT_TRAIN_DIA_ID: &str = "idx_train_dia_segment_train_dia_id";
static FK_TRAIN_DIA_SEGMENT_TRAIN_DIA_ID: &str = "fk_train_dia_segment_train_dia_id";
static FK_TRAIN_DIA_SEGMENT_START_STATION_ID: &str = "fk_train_dia_segment_start_station_id";
static FK_TRAIN_DIA_SEGMENT_END_STATION_ID: &str = "fk_train_dia_segment_end_station_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrainDiaSegment::Table)
                    .if_not_exists()
                    .col(pk_auto(TrainDiaSegment::Id))
                    .col(integer(TrainDiaSegment::TrainDiaId))
                    .col(integer(TrainDiaSegment::StartStationId))
                    .col(integer(TrainDiaSegment::EndStationId))
                    .col(integer(TrainDiaSegment::StartDay))
                    .col(integer(TrainDiaSegment::EndDay))
                    .col(time_null(TrainDiaSegment::StartTime))
                    .col(time_null(TrainDiaSegment::EndTime))
                    .check(
                        Expr::col(TrainDiaSegment::StartStationId)
                            .ne(Expr::col(TrainDiaSegment::EndStationId)),
                    )
                    .check(
                        Expr::col(TrainDiaSegment::StartDay)
                            .lte(Expr::col(TrainDiaSegment::EndDay)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRAIN_DIA_SEGMENT_TRAIN_DIA_ID)
                            .from(TrainDiaSegment::Table, TrainDiaSegment::TrainDiaId)
                            .to(TrainDia::Table, TrainDia::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRAIN_DIA_SEGMENT_START_STATION_ID)
                            .from(TrainDiaSegment::Table, TrainDiaSegment::StartStationId)
                            .to(TraindbStation::Table, TraindbStation::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRAIN_DIA_SEGMENT_END_STATION_ID)
                            .from(TrainDiaSegment::Table, TrainDiaSegment::EndStationId)
                            .to(TraindbStation::Table, TraindbStation::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TRAIN_DIA_SEGMENT_TRAIN_DIA_ID)
                    .table(TrainDiaSegment::Table)
                    .col(TrainDiaSegment::TrainDiaId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TRAIN_DIA_SEGMENT_TRAIN_DIA_ID)
                    .table(TrainDiaSegment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TrainDiaSegment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TrainDiaSegment {
    Table,
    Id,
    TrainDiaId,
    StartStationId,
    EndStationId,
    StartDay,
    EndDay,
    StartTime,
    EndTime,
}
