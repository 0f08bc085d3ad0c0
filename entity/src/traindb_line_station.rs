//! Operating kilometre position of a station along a line.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "traindb_line_station")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub line_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub station_id: i32,
    #[sea_orm(column_type = "Decimal(Some((6, 1)))")]
    pub kilo: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::traindb_line::Entity",
        from = "Column::LineId",
        to = "super::traindb_line::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    TraindbLine,
    #[sea_orm(
        belongs_to = "super::traindb_station::Entity",
        from = "Column::StationId",
        to = "super::traindb_station::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    TraindbStation,
}

impl Related<super::traindb_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TraindbLine.def()
    }
}

impl Related<super::traindb_station::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TraindbStation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
