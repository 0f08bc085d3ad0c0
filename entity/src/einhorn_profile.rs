//! Per-user profile, visibility settings and cached riding totals.
//!
//! `total_kilo` and `unique_kilo` are caches maintained by the cache service,
//! they are never written directly.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "einhorn_profile")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_id: i32,
    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub profile_url: String,
    pub private: bool,
    pub default_accept: bool,
    #[sea_orm(column_type = "Decimal(Some((6, 1)))")]
    pub total_kilo: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((6, 1)))")]
    pub unique_kilo: Option<Decimal>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::auth_user::Entity",
        from = "Column::UserId",
        to = "super::auth_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    AuthUser,
    #[sea_orm(has_many = "super::einhorn_profile_accept_user::Entity")]
    EinhornProfileAcceptUser,
    #[sea_orm(has_many = "super::einhorn_profile_deny_user::Entity")]
    EinhornProfileDenyUser,
}

impl Related<super::auth_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthUser.def()
    }
}

impl Related<super::einhorn_profile_accept_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EinhornProfileAcceptUser.def()
    }
}

impl Related<super::einhorn_profile_deny_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EinhornProfileDenyUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
