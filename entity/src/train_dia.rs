//! One timetabled run of a train class, such as "Nozomi #301".

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "train_dia")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub train_class_id: i32,
    #[sea_orm(column_type = "String(StringLen::N(16))")]
    pub train_id: String,
    pub is_up: bool,
    pub revised_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::train_class::Entity",
        from = "Column::TrainClassId",
        to = "super::train_class::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    TrainClass,
    #[sea_orm(has_many = "super::train_dia_segment::Entity")]
    TrainDiaSegment,
    #[sea_orm(has_many = "super::train_log::Entity")]
    TrainLog,
}

impl Related<super::train_class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainClass.def()
    }
}

impl Related<super::train_dia_segment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainDiaSegment.def()
    }
}

impl Related<super::train_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
