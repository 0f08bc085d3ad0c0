use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "train_class_company")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub train_class_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub company_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::train_class::Entity",
        from = "Column::TrainClassId",
        to = "super::train_class::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    TrainClass,
    #[sea_orm(
        belongs_to = "super::traindb_company::Entity",
        from = "Column::CompanyId",
        to = "super::traindb_company::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    TraindbCompany,
}

impl Related<super::train_class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainClass.def()
    }
}

impl Related<super::traindb_company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TraindbCompany.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
