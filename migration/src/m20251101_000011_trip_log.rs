use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_auth_user::AuthUser;

static IDX_TRIP_LOG_OWNER_ID: &str = "idx_trip_log_owner_id";
static FK_TRIP_LOG_OWNER_ID: &str = "fk_trip_log_owner_id";
static FK_TRIP_LOG_PARTNER_TRIP_LOG_ID: &str = "fk_trip_log_partner_trip_log_id";
static FK_TRIP_LOG_PARTNER_USER_ID: &str = "fk_trip_log_partner_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TripLog::Table)
                    .if_not_exists()
                    .col(pk_auto(TripLog::Id))
                    .col(integer(TripLog::OwnerId))
                    .col(text(TripLog::Memo).default(""))
                    .col(date_null(TripLog::StartDate))
                    .col(date_null(TripLog::EndDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRIP_LOG_OWNER_ID)
                            .from(TripLog::Table, TripLog::OwnerId)
                            .to(AuthUser::Table, AuthUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TRIP_LOG_OWNER_ID)
                    .table(TripLog::Table)
                    .col(TripLog::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TripLogPartner::Table)
                    .if_not_exists()
                    .col(integer(TripLogPartner::TripLogId))
                    .col(integer(TripLogPartner::UserId))
                    .primary_key(
                        Index::create()
                            .col(TripLogPartner::TripLogId)
                            .col(TripLogPartner::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRIP_LOG_PARTNER_TRIP_LOG_ID)
                            .from(TripLogPartner::Table, TripLogPartner::TripLogId)
                            .to(TripLog::Table, TripLog::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRIP_LOG_PARTNER_USER_ID)
                            .from(TripLogPartner::Table, TripLogPartner::UserId)
                            .to(AuthUser::Table, AuthUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TripLogPartner::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TRIP_LOG_OWNER_ID)
                    .table(TripLog::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TripLog::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TripLog {
    Table,
    Id,
    OwnerId,
    Memo,
    StartDate,
    EndDate,
}

#[derive(DeriveIden)]
enum TripLogPartner {
    Table,
    TripLogId,
    UserId,
}
