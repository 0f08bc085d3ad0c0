//! Seat/car class aboard a train, such as ordinary, reserved or green car.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sheet_class")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(32))")]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sheet_class_company::Entity")]
    SheetClassCompany,
    #[sea_orm(has_many = "super::train_class_sheet_class::Entity")]
    TrainClassSheetClass,
    #[sea_orm(has_many = "super::train_log::Entity")]
    TrainLog,
}

impl Related<super::sheet_class_company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SheetClassCompany.def()
    }
}

impl Related<super::train_class_sheet_class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainClassSheetClass.def()
    }
}

impl Related<super::train_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainLog.def()
    }
}

impl Related<super::traindb_company::Entity> for Entity {
    fn to() -> RelationDef {
        super::sheet_class_company::Relation::TraindbCompany.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::sheet_class_company::Relation::SheetClass
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}
