use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_auth_user::AuthUser;

static FK_PROFILE_USER_ID: &str = "fk_einhorn_profile_user_id";
static FK_ACCEPT_USER_PROFILE_ID: &str = "fk_einhorn_profile_accept_user_profile_id";
static FK_ACCEPT_USER_USER_ID: &str = "fk_einhorn_profile_accept_user_user_id";
static FK_DENY_USER_PROFILE_ID: &str = "fk_einhorn_profile_deny_user_profile_id";
static FK_DENY_USER_USER_ID: &str = "fk_einhorn_profile_deny_user_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EinhornProfile::Table)
                    .if_not_exists()
                    .col(pk_auto(EinhornProfile::Id))
                    .col(integer_uniq(EinhornProfile::UserId))
                    .col(string_len(EinhornProfile::ProfileUrl, 200).default(""))
                    .col(boolean(EinhornProfile::Private).default(false))
                    .col(boolean(EinhornProfile::DefaultAccept).default(false))
                    .col(decimal_len_null(EinhornProfile::TotalKilo, 6, 1))
                    .col(decimal_len_null(EinhornProfile::UniqueKilo, 6, 1))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PROFILE_USER_ID)
                            .from(EinhornProfile::Table, EinhornProfile::UserId)
                            .to(AuthUser::Table, AuthUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EinhornProfileAcceptUser::Table)
                    .if_not_exists()
                    .col(integer(EinhornProfileAcceptUser::ProfileId))
                    .col(integer(EinhornProfileAcceptUser::UserId))
                    .primary_key(
                        Index::create()
                            .col(EinhornProfileAcceptUser::ProfileId)
                            .col(EinhornProfileAcceptUser::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ACCEPT_USER_PROFILE_ID)
                            .from(
                                EinhornProfileAcceptUser::Table,
                                EinhornProfileAcceptUser::ProfileId,
                            )
                            .to(EinhornProfile::Table, EinhornProfile::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ACCEPT_USER_USER_ID)
                            .from(
                                EinhornProfileAcceptUser::Table,
                                EinhornProfileAcceptUser::UserId,
                            )
                            .to(AuthUser::Table, AuthUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EinhornProfileDenyUser::Table)
                    .if_not_exists()
                    .col(integer(EinhornProfileDenyUser::ProfileId))
                    .col(integer(EinhornProfileDenyUser::UserId))
                    .primary_key(
                        Index::create()
                            .col(EinhornProfileDenyUser::ProfileId)
                            .col(EinhornProfileDenyUser::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DENY_USER_PROFILE_ID)
                            .from(
                                EinhornProfileDenyUser::Table,
                                EinhornProfileDenyUser::ProfileId,
                            )
                            .to(EinhornProfile::Table, EinhornProfile::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DENY_USER_USER_ID)
                            .from(
                                EinhornProfileDenyUser::Table,
                                EinhornProfileDenyUser::UserId,
                            )
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
            .drop_table(Table::drop().table(EinhornProfileDenyUser::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(EinhornProfileAcceptUser::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(EinhornProfile::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum EinhornProfile {
    Table,
    Id,
    UserId,
    ProfileUrl,
    Private,
    DefaultAccept,
    TotalKilo,
    UniqueKilo,
}

#[derive(DeriveIden)]
enum EinhornProfileAcceptUser {
    Table,
    ProfileId,
    UserId,
}

#[derive(DeriveIden)]
enum EinhornProfileDenyUser {
    Table,
    ProfileId,
    UserId,
}
