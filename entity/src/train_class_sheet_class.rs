use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "train_class_sheet_class")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub train_class_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub sheet_class_id: i32,
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
        belongs_to = "super::sheet_class::Entity",
        from = "Column::SheetClassId",
        to = "super::sheet_class::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    SheetClass,
}

impl Related<super::train_class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainClass.def()
    }
}

impl Related<super::sheet_class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SheetClass.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
