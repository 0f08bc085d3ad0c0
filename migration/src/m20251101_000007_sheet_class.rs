use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000002_traindb_company::TraindbCompany;

static FK_SHEET_CLASS_COMPANY_SHEET_CLASS_ID: &str = "fk_sheet_class_company_sheet_class_id";
static FK_SHEET_CLASS_COMPANY_COMPANY_ID: &str = "fk_sheet_class_company_company_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SheetClass::Table)
                    .if_not_exists()
                    .col(pk_auto(SheetClass::Id))
                    .col(string_len(SheetClass::Name, 32))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SheetClassCompany::Table)
                    .if_not_exists()
                    .col(integer(SheetClassCompany::SheetClassId))
                    .col(integer(SheetClassCompany::CompanyId))
                    .primary_key(
                        Index::create()
                            .col(SheetClassCompany::SheetClassId)
                            .col(SheetClassCompany::CompanyId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SHEET_CLASS_COMPANY_SHEET_CLASS_ID)
                            .from(SheetClassCompany::Table, SheetClassCompany::SheetClassId)
                            .to(SheetClass::Table, SheetClass::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SHEET_CLASS_COMPANY_COMPANY_ID)
                            .from(SheetClassCompany::Table, SheetClassCompany::CompanyId)
                            .to(TraindbCompany::Table, TraindbCompany::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SheetClassCompany::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(SheetClass::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SheetClass {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum SheetClassCompany {
    Table,
    SheetClassId,
    CompanyId,
}
