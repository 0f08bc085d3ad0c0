//! Riding log in terms of one line segment.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "segment_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub train_log_id: i32,
    pub line_id: i32,
    pub start_station_id: i32,
    pub end_station_id: i32,
    #[sea_orm(column_type = "Text")]
    pub memo: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::train_log::Entity",
        from = "Column::TrainLogId",
        to = "super::train_log::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    TrainLog,
    #[sea_orm(
        belongs_to = "super::traindb_line::Entity",
        from = "Column::LineId",
        to = "super::traindb_line::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    TraindbLine,
    #[sea_orm(
        belongs_to = "super::traindb_station::Entity",
        from = "Column::StartStationId",
        to = "super::traindb_station::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    StartStation,
    #[sea_orm(
        belongs_to = "super::traindb_station::Entity",
        from = "Column::EndStationId",
        to = "super::traindb_station::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    EndStation,
}

impl Related<super::train_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainLog.def()
    }
}

impl Related<super::traindb_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TraindbLine.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
