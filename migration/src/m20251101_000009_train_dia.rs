use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000008_train_class::TrainClass;

static IDX_TRAIN_DIA_TRAIN_CLASS_ID: &str = "idx_train_dia_train_class_id";
static FK_TRAIN_DIA_TRAIN_CLASS_ID: &str = "fk_train_dia_train_class_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrainDia::Table)
                    .if_not_exists()
                    .col(pk_auto(TrainDia::Id))
                    .col(integer(TrainDia::TrainClassId))
                    .col(string_len(TrainDia::TrainId, 16))
                    .col(boolean(TrainDia::IsUp))
                    .col(date(TrainDia::RevisedDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRAIN_DIA_TRAIN_CLASS_ID)
                            .from(TrainDia::Table, TrainDia::TrainClassId)
                            .to(TrainClass::Table, TrainClass::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TRAIN_DIA_TRAIN_CLASS_ID)
                    .table(TrainDia::Table)
                    .col(TrainDia::TrainClassId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TRAIN_DIA_TRAIN_CLASS_ID)
                    .table(TrainDia::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TrainDia::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TrainDia {
    Table,
    Id,
    TrainClassId,
    TrainId,
    IsUp,
    RevisedDate,
}
