use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000007_sheet_class::SheetClass, m20251101_000009_train_dia::TrainDia,
    m20251101_000011_trip_log::TripLog,
};

static IDX_TRAIN_LOG_TRIP_LOG_ID: &str = "idx_train_log_trip_log_id";
static FK_TRAIN_LOG_TRIP_LOG_ID: &str = "fk_train_log_trip_log_id";
static FK_TRAIN_LOG_TRAIN_DIA_ID: &str = "fk_train_log_train_dia_id";
static FK_TRAIN_LOG_SHEET_CLASS_ID: &str = "fk_train_log_sheet_class_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrainLog::Table)
                    .if_not_exists()
                    .col(pk_auto(TrainLog::Id))
                    .col(integer(TrainLog::TripLogId))
                    .col(integer(TrainLog::TrainDiaId))
                    .col(integer(TrainLog::SheetClassId))
                    .col(date_null(TrainLog::StartDate))
                    .col(date_null(TrainLog::EndDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRAIN_LOG_TRIP_LOG_ID)
                            .from(TrainLog::Table, TrainLog::TripLogId)
                            .to(TripLog::Table, TripLog::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRAIN_LOG_TRAIN_DIA_ID)
                            .from(TrainLog::Table, TrainLog::TrainDiaId)
                            .to(TrainDia::Table, TrainDia::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRAIN_LOG_SHEET_CLASS_ID)
                            .from(TrainLog::Table, TrainLog::SheetClassId)
                            .to(SheetClass::Table, SheetClass::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TRAIN_LOG_TRIP_LOG_ID)
                    .table(TrainLog::Table)
                    .col(TrainLog::TripLogId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TRAIN_LOG_TRIP_LOG_ID)
                    .table(TrainLog::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TrainLog::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TrainLog {
    Table,
    Id,
    TripLogId,
    TrainDiaId,
    SheetClassId,
    StartDate,
    EndDate,
}
