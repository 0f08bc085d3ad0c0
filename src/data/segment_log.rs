use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::model::trip::NewSegmentLog;

pub struct SegmentLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SegmentLogRepository<'a, C> {
    /// Creates a new instance of [`SegmentLogRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        train_log_id: i32,
        segment: &NewSegmentLog,
    ) -> Result<entity::segment_log::Model, DbErr> {
        let segment = entity::segment_log::ActiveModel {
            train_log_id: ActiveValue::Set(train_log_id),
            line_id: ActiveValue::Set(segment.line_id),
            start_station_id: ActiveValue::Set(segment.start_station_id),
            end_station_id: ActiveValue::Set(segment.end_station_id),
            memo: ActiveValue::Set(segment.memo.clone()),
            ..Default::default()
        };

        segment.insert(self.db).await
    }

    pub async fn get(
        &self,
        segment_log_id: i32,
    ) -> Result<Option<entity::segment_log::Model>, DbErr> {
        entity::prelude::SegmentLog::find_by_id(segment_log_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_train_log(
        &self,
        train_log_id: i32,
    ) -> Result<Vec<entity::segment_log::Model>, DbErr> {
        entity::prelude::SegmentLog::find()
            .filter(entity::segment_log::Column::TrainLogId.eq(train_log_id))
            .order_by_asc(entity::segment_log::Column::Id)
            .all(self.db)
            .await
    }

    /// Every segment log in trips owned by the user
    pub async fn get_by_owner(
        &self,
        owner_id: i32,
    ) -> Result<Vec<entity::segment_log::Model>, DbErr> {
        entity::prelude::SegmentLog::find()
            .join(
                JoinType::InnerJoin,
                entity::segment_log::Relation::TrainLog.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::train_log::Relation::TripLog.def(),
            )
            .filter(entity::trip_log::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::segment_log::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update_memo(
        &self,
        segment_log_id: i32,
        memo: &str,
    ) -> Result<Option<entity::segment_log::Model>, DbErr> {
        let segment = match self.get(segment_log_id).await? {
            Some(segment) => segment,
            None => return Ok(None),
        };

        let mut segment_am = segment.into_active_model();
        segment_am.memo = ActiveValue::Set(memo.to_string());

        Ok(Some(segment_am.update(self.db).await?))
    }

    pub async fn delete(&self, segment_log_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::SegmentLog::delete_by_id(segment_log_id)
            .exec(self.db)
            .await
    }
}
