//! Riding log in terms of one train.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "train_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub trip_log_id: i32,
    pub train_dia_id: i32,
    pub sheet_class_id: i32,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::trip_log::Entity",
        from = "Column::TripLogId",
        to = "super::trip_log::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    TripLog,
    #[sea_orm(
        belongs_to = "super::train_dia::Entity",
        from = "Column::TrainDiaId",
        to = "super::train_dia::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    TrainDia,
    #[sea_orm(
        belongs_to = "super::sheet_class::Entity",
        from = "Column::SheetClassId",
        to = "super::sheet_class::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    SheetClass,
    #[sea_orm(has_many = "super::segment_log::Entity")]
    SegmentLog,
}

impl Related<super::trip_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TripLog.def()
    }
}

impl Related<super::train_dia::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainDia.def()
    }
}

impl Related<super::sheet_class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SheetClass.def()
    }
}

impl Related<super::segment_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SegmentLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
