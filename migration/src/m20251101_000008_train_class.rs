use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000002_traindb_company::TraindbCompany, m20251101_000007_sheet_class::SheetClass,
};

static FK_TRAIN_CLASS_SHEET_CLASS_TRAIN_CLASS_ID: &str =
    "fk_train_class_sheet_class_train_class_id";
static FK_TRAIN_CLASS_SHEET_CLASS_SHEET_CLASS_ID: &str =
    "fk_train_class_sheet_class_sheet_class_id";
static FK_TRAIN_CLASS_COMPANY_TRAIN_CLASS_ID: &str = "fk_train_class_company_train_class_id";
static FK_TRAIN_CLASS_COMPANY_COMPANY_ID: &str = "fk_train_class_company_company_id";

const BASIC_TYPES: [&str; 5] = ["HSR", "LTD", "EXP", "RPD", "LOC"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrainClass::Table)
                    .if_not_exists()
                    .col(pk_auto(TrainClass::Id))
                    .col(string_len(TrainClass::BasicType, 3))
                    .col(string_len(TrainClass::SpecificType, 32))
                    .col(string_len(TrainClass::Name, 32).default(""))
                    .check(Expr::col(TrainClass::BasicType).is_in(BASIC_TYPES))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TrainClassSheetClass::Table)
                    .if_not_exists()
                    .col(integer(TrainClassSheetClass::TrainClassId))
                    .col(integer(TrainClassSheetClass::SheetClassId))
                    .primary_key(
                        Index::create()
                            .col(TrainClassSheetClass::TrainClassId)
                            .col(TrainClassSheetClass::SheetClassId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRAIN_CLASS_SHEET_CLASS_TRAIN_CLASS_ID)
                            .from(
                                TrainClassSheetClass::Table,
                                TrainClassSheetClass::TrainClassId,
                            )
                            .to(TrainClass::Table, TrainClass::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRAIN_CLASS_SHEET_CLASS_SHEET_CLASS_ID)
                            .from(
                                TrainClassSheetClass::Table,
                                TrainClassSheetClass::SheetClassId,
                            )
                            .to(SheetClass::Table, SheetClass::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TrainClassCompany::Table)
                    .if_not_exists()
                    .col(integer(TrainClassCompany::TrainClassId))
                    .col(integer(TrainClassCompany::CompanyId))
                    .primary_key(
                        Index::create()
                            .col(TrainClassCompany::TrainClassId)
                            .col(TrainClassCompany::CompanyId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRAIN_CLASS_COMPANY_TRAIN_CLASS_ID)
                            .from(TrainClassCompany::Table, TrainClassCompany::TrainClassId)
                            .to(TrainClass::Table, TrainClass::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRAIN_CLASS_COMPANY_COMPANY_ID)
                            .from(TrainClassCompany::Table, TrainClassCompany::CompanyId)
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
            .drop_table(Table::drop().table(TrainClassCompany::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TrainClassSheetClass::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TrainClass::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TrainClass {
    Table,
    Id,
    BasicType,
    SpecificType,
    Name,
}

#[derive(DeriveIden)]
enum TrainClassSheetClass {
    Table,
    TrainClassId,
    SheetClassId,
}

#[derive(DeriveIden)]
enum TrainClassCompany {
    Table,
    TrainClassId,
    CompanyId,
}
