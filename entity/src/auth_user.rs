use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "auth_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique, column_type = "String(StringLen::N(150))")]
    pub username: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::einhorn_profile::Entity")]
    EinhornProfile,
    #[sea_orm(has_many = "super::trip_log::Entity")]
    TripLog,
}

impl Related<super::einhorn_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EinhornProfile.def()
    }
}

impl Related<super::trip_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TripLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
