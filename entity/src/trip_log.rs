//! A user's journey made of one or more train logs.
//!
//! `start_date` and `end_date` are caches derived from the trip's train logs.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "trip_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub owner_id: i32,
    #[sea_orm(column_type = "Text")]
    pub memo: String,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::auth_user::Entity",
        from = "Column::OwnerId",
        to = "super::auth_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Owner,
    #[sea_orm(has_many = "super::trip_log_partner::Entity")]
    TripLogPartner,
    #[sea_orm(has_many = "super::train_log::Entity")]
    TrainLog,
}

impl Related<super::auth_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::trip_log_partner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TripLogPartner.def()
    }
}

impl Related<super::train_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
