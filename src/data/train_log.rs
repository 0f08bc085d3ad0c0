use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::trip::NewTrainLog;

pub struct TrainLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrainLogRepository<'a, C> {
    /// Creates a new instance of [`TrainLogRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        trip_log_id: i32,
        train_log: &NewTrainLog,
    ) -> Result<entity::train_log::Model, DbErr> {
        let train_log = entity::train_log::ActiveModel {
            trip_log_id: ActiveValue::Set(trip_log_id),
            train_dia_id: ActiveValue::Set(train_log.train_dia_id),
            sheet_class_id: ActiveValue::Set(train_log.sheet_class_id),
            start_date: ActiveValue::Set(train_log.start_date),
            end_date: ActiveValue::Set(train_log.end_date),
            ..Default::default()
        };

        train_log.insert(self.db).await
    }

    pub async fn get(&self, train_log_id: i32) -> Result<Option<entity::train_log::Model>, DbErr> {
        entity::prelude::TrainLog::find_by_id(train_log_id)
            .one(self.db)
            .await
    }

    /// Train logs of a trip in the order they were stored
    pub async fn get_by_trip_log(
        &self,
        trip_log_id: i32,
    ) -> Result<Vec<entity::train_log::Model>, DbErr> {
        entity::prelude::TrainLog::find()
            .filter(entity::train_log::Column::TripLogId.eq(trip_log_id))
            .order_by_asc(entity::train_log::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update_dates(
        &self,
        train_log_id: i32,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Option<entity::train_log::Model>, DbErr> {
        let train_log = match self.get(train_log_id).await? {
            Some(train_log) => train_log,
            None => return Ok(None),
        };

        let mut train_log_am = train_log.into_active_model();
        train_log_am.start_date = ActiveValue::Set(start_date);
        train_log_am.end_date = ActiveValue::Set(end_date);

        Ok(Some(train_log_am.update(self.db).await?))
    }

    /// Deletes a train log along with its segment logs
    pub async fn delete(&self, train_log_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::TrainLog::delete_by_id(train_log_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod create {
        use chrono::NaiveDate;
        use einhorn_test_utils::prelude::*;

        use crate::{data::train_log::TrainLogRepository, model::trip::NewTrainLog};

        /// Expect success when every referenced record exists
        #[tokio::test]
        async fn creates_train_log() -> Result<(), TestError> {
            let mut test = test_setup_with_einhorn_tables!()?;
            let user = test.user().insert_user("kaede").await?;
            let (_, sheet_class, dia) = test.timetable().insert_mock_train_dia("1A").await?;
            let trip = test.trip().insert_trip_log(user.id).await?;

            let train_log_repo = TrainLogRepository::new(&test.db);
            let result = train_log_repo
                .create(
                    trip.id,
                    &NewTrainLog {
                        train_dia_id: dia.id,
                        sheet_class_id: sheet_class.id,
                        start_date: NaiveDate::from_ymd_opt(2024, 3, 1),
                        end_date: None,
                    },
                )
                .await?;

            assert_eq!(result.trip_log_id, trip.id);
            assert_eq!(result.start_date, NaiveDate::from_ymd_opt(2024, 3, 1));

            Ok(())
        }

        /// Expect Error when the train dia does not exist
        #[tokio::test]
        async fn fails_for_nonexistent_train_dia() -> Result<(), TestError> {
            let mut test = test_setup_with_einhorn_tables!()?;
            let user = test.user().insert_user("kaede").await?;
            let (_, sheet_class, dia) = test.timetable().insert_mock_train_dia("1A").await?;
            let trip = test.trip().insert_trip_log(user.id).await?;

            let train_log_repo = TrainLogRepository::new(&test.db);
            let result = train_log_repo
                .create(
                    trip.id,
                    &NewTrainLog {
                        train_dia_id: dia.id + 1,
                        sheet_class_id: sheet_class.id,
                        start_date: None,
                        end_date: None,
                    },
                )
                .await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod update_dates {
        use chrono::NaiveDate;
        use einhorn_test_utils::prelude::*;

        use crate::data::train_log::TrainLogRepository;

        /// Expect both dates to be overwritten, including clearing them
        #[tokio::test]
        async fn overwrites_dates() -> Result<(), TestError> {
            let mut test = test_setup_with_einhorn_tables!()?;
            let user = test.user().insert_user("kaede").await?;
            let (_, sheet_class, dia) = test.timetable().insert_mock_train_dia("1A").await?;
            let trip = test.trip().insert_trip_log(user.id).await?;
            let date = NaiveDate::from_ymd_opt(2024, 3, 1);
            let train_log = test
                .trip()
                .insert_train_log(trip.id, dia.id, sheet_class.id, date, date)
                .await?;

            let train_log_repo = TrainLogRepository::new(&test.db);
            let result = train_log_repo
                .update_dates(train_log.id, None, NaiveDate::from_ymd_opt(2024, 3, 2))
                .await?;

            let updated = result.expect("train log should exist");
            assert_eq!(updated.start_date, None);
            assert_eq!(updated.end_date, NaiveDate::from_ymd_opt(2024, 3, 2));

            Ok(())
        }

        /// Expect Ok(None) when the train log does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_train_log() -> Result<(), TestError> {
            let test = test_setup_with_einhorn_tables!()?;

            let train_log_repo = TrainLogRepository::new(&test.db);
            let result = train_log_repo.update_dates(1, None, None).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }
}
