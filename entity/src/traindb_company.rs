use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "traindb_company")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::traindb_line::Entity")]
    TraindbLine,
}

impl Related<super::traindb_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TraindbLine.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
