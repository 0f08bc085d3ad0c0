use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

pub struct TrainDiaRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrainDiaRepository<'a, C> {
    /// Creates a new instance of [`TrainDiaRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        train_class_id: i32,
        train_id: &str,
        is_up: bool,
        revised_date: NaiveDate,
    ) -> Result<entity::train_dia::Model, DbErr> {
        let train_dia = entity::train_dia::ActiveModel {
            train_class_id: ActiveValue::Set(train_class_id),
            train_id: ActiveValue::Set(train_id.to_string()),
            is_up: ActiveValue::Set(is_up),
            revised_date: ActiveValue::Set(revised_date),
            ..Default::default()
        };

        train_dia.insert(self.db).await
    }

    pub async fn get(&self, train_dia_id: i32) -> Result<Option<entity::train_dia::Model>, DbErr> {
        entity::prelude::TrainDia::find_by_id(train_dia_id)
            .one(self.db)
            .await
    }

    /// Reads a dia with `FOR UPDATE`, holding its row until the surrounding transaction ends
    ///
    /// Writers appending segments to the same dia are serialized on this lock. SQLite has no
    /// row locks and runs the plain select.
    pub async fn lock(&self, train_dia_id: i32) -> Result<Option<entity::train_dia::Model>, DbErr> {
        entity::prelude::TrainDia::find_by_id(train_dia_id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// Dias of a train class, most recently revised first
    pub async fn get_by_train_class(
        &self,
        train_class_id: i32,
    ) -> Result<Vec<entity::train_dia::Model>, DbErr> {
        entity::prelude::TrainDia::find()
            .filter(entity::train_dia::Column::TrainClassId.eq(train_class_id))
            .order_by_desc(entity::train_dia::Column::RevisedDate)
            .order_by_asc(entity::train_dia::Column::TrainId)
            .all(self.db)
            .await
    }

    /// Deletes a train dia together with its segments
    ///
    /// Fails with a foreign key violation while a train log references the dia.
    pub async fn delete(&self, train_dia_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::TrainDia::delete_by_id(train_dia_id)
            .exec(self.db)
            .await
    }
}
