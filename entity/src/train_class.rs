//! Train class, such as "Nozomi" or "Orient Express".

use sea_orm::entity::prelude::*;

/// Basic category of a train service.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(3))")]
pub enum BasicType {
    #[sea_orm(string_value = "HSR")]
    HighSpeedRailway,
    #[sea_orm(string_value = "LTD")]
    LimitedExpress,
    #[sea_orm(string_value = "EXP")]
    Express,
    #[sea_orm(string_value = "RPD")]
    Rapid,
    #[sea_orm(string_value = "LOC")]
    Local,
}

impl BasicType {
    /// Human readable label for the basic type.
    pub fn label(&self) -> &'static str {
        match self {
            Self::HighSpeedRailway => "high-speed railway express",
            Self::LimitedExpress => "limited express",
            Self::Express => "express (with special fee)",
            Self::Rapid => "rapid (without special fee)",
            Self::Local => "local",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "train_class")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub basic_type: BasicType,
    #[sea_orm(column_type = "String(StringLen::N(32))")]
    pub specific_type: String,
    #[sea_orm(column_type = "String(StringLen::N(32))")]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::train_class_sheet_class::Entity")]
    TrainClassSheetClass,
    #[sea_orm(has_many = "super::train_class_company::Entity")]
    TrainClassCompany,
    #[sea_orm(has_many = "super::train_dia::Entity")]
    TrainDia,
}

impl Related<super::train_class_sheet_class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainClassSheetClass.def()
    }
}

impl Related<super::train_class_company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainClassCompany.def()
    }
}

impl Related<super::train_dia::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainDia.def()
    }
}

impl Related<super::sheet_class::Entity> for Entity {
    fn to() -> RelationDef {
        super::train_class_sheet_class::Relation::SheetClass.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::train_class_sheet_class::Relation::TrainClass
                .def()
                .rev(),
        )
    }
}

impl Related<super::traindb_company::Entity> for Entity {
    fn to() -> RelationDef {
        super::train_class_company::Relation::TraindbCompany.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::train_class_company::Relation::TrainClass
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}
