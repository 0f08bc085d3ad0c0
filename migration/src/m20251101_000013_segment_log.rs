use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000003_traindb_line::TraindbLine, m20251101_000004_traindb_station::TraindbStation,
    m20251101_000012_train_log::TrainLog,
};

static IDX_SEGMENT_LOG_TRAIN_LOG_ID: &str = "idx_segment_log_train_log_id";
static FK_SEGMENT_LOG_TRAIN_LOG_ID: &str = "fk_segment_log_train_log_id";
static FK_SEGMENT_LOG_LINE_ID: &str = "fk_segment_log_line_id";
static FK_SEGMENT_LOG_START_STATION_ID: &str = "fk_segment_log_start_station_id";
static FK_SEGMENT_LOG_END_STATION_ID: &str = "fk_segment_log_end_station_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SegmentLog::Table)
                    .if_not_exists()
                    .col(pk_auto(SegmentLog::Id))
                    .col(integer(SegmentLog::TrainLogId))
                    .col(integer(SegmentLog::LineId))
                    .col(integer(SegmentLog::StartStationId))
                    .col(integer(SegmentLog::EndStationId))
                    .col(text(SegmentLog::Memo).default(""))
                    .check(
                        Expr::col(SegmentLog::StartStationId)
                            .ne(Expr::col(SegmentLog::EndStationId)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SEGMENT_LOG_TRAIN_LOG_ID)
                            .from(SegmentLog::Table, SegmentLog::TrainLogId)
                            .to(TrainLog::Table, TrainLog::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SEGMENT_LOG_LINE_ID)
                            .from(SegmentLog::Table, SegmentLog::LineId)
                            .to(TraindbLine::Table, TraindbLine::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SEGMENT_LOG_START_STATION_ID)
                            .from(SegmentLog::Table, SegmentLog::StartStationId)
                            .to(TraindbStation::Table, TraindbStation::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SEGMENT_LOG_END_STATION_ID)
                            .from(SegmentLog::Table, SegmentLog::EndStationId)
                            .to(TraindbStation::Table, TraindbStation::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SEGMENT_LOG_TRAIN_LOG_ID)
                    .table(SegmentLog::Table)
                    .col(SegmentLog::TrainLogId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SEGMENT_LOG_TRAIN_LOG_ID)
                    .table(SegmentLog::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SegmentLog::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SegmentLog {
    Table,
    Id,
    TrainLogId,
    LineId,
    StartStationId,
    EndStationId,
    Memo,
}
