use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "traindb_line")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::traindb_company::Entity",
        from = "Column::CompanyId",
        to = "super::traindb_company::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    TraindbCompany,
    #[sea_orm(has_many = "super::traindb_line_station::Entity")]
    TraindbLineStation,
}

impl Related<super::traindb_company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TraindbCompany.def()
    }
}

impl Related<super::traindb_line_station::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TraindbLineStation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
