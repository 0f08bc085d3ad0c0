//! Stop-to-stop leg of a train dia.
//!
//! `start_day`/`end_day` are day offsets from the dia's departure day, the
//! times are wall clock times on that day.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "train_dia_segment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub train_dia_id: i32,
    pub start_station_id: i32,
    pub end_station_id: i32,
    pub start_day: i32,
    pub end_day: i32,
    pub start_time: Option<Time>,
    pub end_time: Option<Time>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::train_dia::Entity",
        from = "Column::TrainDiaId",
        to = "super::train_dia::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    TrainDia,
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

impl Related<super::train_dia::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainDia.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
