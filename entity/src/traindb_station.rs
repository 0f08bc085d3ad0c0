use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "traindb_station")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::traindb_line_station::Entity")]
    TraindbLineStation,
}

impl Related<super::traindb_line_station::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TraindbLineStation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
