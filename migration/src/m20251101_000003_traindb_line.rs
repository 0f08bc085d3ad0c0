use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000002_traindb_company::TraindbCompany;

static IDX_LINE_COMPANY_ID: &str = "idx_traindb_line_company_id";
static FK_LINE_COMPANY_ID: &str = "fk_traindb_line_company_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TraindbLine::Table)
                    .if_not_exists()
                    .col(pk_auto(TraindbLine::Id))
                    .col(integer(TraindbLine::CompanyId))
                    .col(string(TraindbLine::Name))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_LINE_COMPANY_ID)
                            .from(TraindbLine::Table, TraindbLine::CompanyId)
                            .to(TraindbCompany::Table, TraindbCompany::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LINE_COMPANY_ID)
                    .table(TraindbLine::Table)
                    .col(TraindbLine::CompanyId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LINE_COMPANY_ID)
                    .table(TraindbLine::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TraindbLine::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TraindbLine {
    Table,
    Id,
    CompanyId,
    Name,
}
