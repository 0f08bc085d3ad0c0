use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

pub struct TripLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TripLogRepository<'a, C> {
    /// Creates a new instance of [`TripLogRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a trip log with empty date caches
    pub async fn create(
        &self,
        owner_id: i32,
        memo: &str,
    ) -> Result<entity::trip_log::Model, DbErr> {
        let trip_log = entity::trip_log::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            memo: ActiveValue::Set(memo.to_string()),
            start_date: ActiveValue::Set(None),
            end_date: ActiveValue::Set(None),
            ..Default::default()
        };

        trip_log.insert(self.db).await
    }

    pub async fn get(&self, trip_log_id: i32) -> Result<Option<entity::trip_log::Model>, DbErr> {
        entity::prelude::TripLog::find_by_id(trip_log_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<entity::trip_log::Model>, DbErr> {
        entity::prelude::TripLog::find()
            .filter(entity::trip_log::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::trip_log::Column::Id)
            .all(self.db)
            .await
    }

    /// IDs of every trip log, in ascending order
    pub async fn get_all_ids(&self) -> Result<Vec<i32>, DbErr> {
        entity::prelude::TripLog::find()
            .select_only()
            .column(entity::trip_log::Column::Id)
            .order_by_asc(entity::trip_log::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    pub async fn update_memo(
        &self,
        trip_log_id: i32,
        memo: &str,
    ) -> Result<Option<entity::trip_log::Model>, DbErr> {
        let trip_log = match self.get(trip_log_id).await? {
            Some(trip_log) => trip_log,
            None => return Ok(None),
        };

        let mut trip_log_am = trip_log.into_active_model();
        trip_log_am.memo = ActiveValue::Set(memo.to_string());

        Ok(Some(trip_log_am.update(self.db).await?))
    }

    /// Overwrites the cached date range of a trip log
    pub async fn update_dates(
        &self,
        trip_log_id: i32,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Option<entity::trip_log::Model>, DbErr> {
        let trip_log = match self.get(trip_log_id).await? {
            Some(trip_log) => trip_log,
            None => return Ok(None),
        };

        let mut trip_log_am = trip_log.into_active_model();
        trip_log_am.start_date = ActiveValue::Set(start_date);
        trip_log_am.end_date = ActiveValue::Set(end_date);

        Ok(Some(trip_log_am.update(self.db).await?))
    }

    /// IDs of the users who travelled along, in ascending order
    pub async fn get_partner_ids(&self, trip_log_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::TripLogPartner::find()
            .select_only()
            .column(entity::trip_log_partner::Column::UserId)
            .filter(entity::trip_log_partner::Column::TripLogId.eq(trip_log_id))
            .order_by_asc(entity::trip_log_partner::Column::UserId)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Replaces the partners of a trip log
    pub async fn set_partners(&self, trip_log_id: i32, user_ids: &[i32]) -> Result<(), DbErr> {
        entity::prelude::TripLogPartner::delete_many()
            .filter(entity::trip_log_partner::Column::TripLogId.eq(trip_log_id))
            .exec(self.db)
            .await?;

        if user_ids.is_empty() {
            return Ok(());
        }

        let partners = user_ids
            .iter()
            .map(|user_id| entity::trip_log_partner::ActiveModel {
                trip_log_id: ActiveValue::Set(trip_log_id),
                user_id: ActiveValue::Set(*user_id),
            });

        entity::prelude::TripLogPartner::insert_many(partners)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a trip log along with its train logs, segment logs and partner links
    ///
    /// Returns OK regardless of the trip log existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, trip_log_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::TripLog::delete_by_id(trip_log_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod create {
        use einhorn_test_utils::prelude::*;

        use crate::data::trip_log::TripLogRepository;

        /// Expect a new trip log to start without cached dates
        #[tokio::test]
        async fn creates_trip_without_dates() -> Result<(), TestError> {
            let mut test = test_setup_with_einhorn_tables!()?;
            let user = test.user().insert_user("kaede").await?;

            let trip_log_repo = TripLogRepository::new(&test.db);
            let result = trip_log_repo.create(user.id, "Spring trip").await?;

            assert_eq!(result.owner_id, user.id);
            assert_eq!(result.memo, "Spring trip");
            assert!(result.start_date.is_none());
            assert!(result.end_date.is_none());

            Ok(())
        }

        /// Expect Error when the owner does not exist
        #[tokio::test]
        async fn fails_for_nonexistent_owner() -> Result<(), TestError> {
            let test = test_setup_with_einhorn_tables!()?;

            let trip_log_repo = TripLogRepository::new(&test.db);
            let result = trip_log_repo.create(1, "").await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod set_partners {
        use einhorn_test_utils::prelude::*;

        use crate::data::trip_log::TripLogRepository;

        /// Expect the partner list to be replaced
        #[tokio::test]
        async fn replaces_partners() -> Result<(), TestError> {
            let mut test = test_setup_with_einhorn_tables!()?;
            let owner = test.user().insert_user("kaede").await?;
            let partner_a = test.user().insert_user("sora").await?;
            let partner_b = test.user().insert_user("hikari").await?;
            let trip = test.trip().insert_trip_log(owner.id).await?;

            let trip_log_repo = TripLogRepository::new(&test.db);
            trip_log_repo.set_partners(trip.id, &[partner_a.id]).await?;
            trip_log_repo.set_partners(trip.id, &[partner_b.id]).await?;

            assert_eq!(
                trip_log_repo.get_partner_ids(trip.id).await?,
                vec![partner_b.id]
            );

            Ok(())
        }

        /// Expect Error when a partner does not exist
        #[tokio::test]
        async fn fails_for_nonexistent_partner() -> Result<(), TestError> {
            let mut test = test_setup_with_einhorn_tables!()?;
            let owner = test.user().insert_user("kaede").await?;
            let trip = test.trip().insert_trip_log(owner.id).await?;

            let trip_log_repo = TripLogRepository::new(&test.db);
            let result = trip_log_repo.set_partners(trip.id, &[owner.id + 1]).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod delete {
        use einhorn_test_utils::prelude::*;
        use sea_orm::EntityTrait;

        use crate::data::trip_log::TripLogRepository;

        /// Expect train logs and segment logs to be removed with the trip
        #[tokio::test]
        async fn deletes_trip_with_logs() -> Result<(), TestError> {
            let mut test = test_setup_with_einhorn_tables!()?;
            let user = test.user().insert_user("kaede").await?;
            let (line, stations) = test
                .traindb()
                .insert_mock_line("Tokaido", &[("Tokyo", 0), ("Shinagawa", 68)])
                .await?;
            let (_, sheet_class, dia) = test.timetable().insert_mock_train_dia("1A").await?;
            let trip = test.trip().insert_trip_log(user.id).await?;
            let train_log = test
                .trip()
                .insert_train_log(trip.id, dia.id, sheet_class.id, None, None)
                .await?;
            let segment_log = test
                .trip()
                .insert_segment_log(train_log.id, line.id, stations[0].id, stations[1].id)
                .await?;

            let trip_log_repo = TripLogRepository::new(&test.db);
            let result = trip_log_repo.delete(trip.id).await?;

            assert_eq!(result.rows_affected, 1);
            assert!(entity::prelude::TrainLog::find_by_id(train_log.id)
                .one(&test.db)
                .await?
                .is_none());
            assert!(entity::prelude::SegmentLog::find_by_id(segment_log.id)
                .one(&test.db)
                .await?
                .is_none());

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let trip_log_repo = TripLogRepository::new(&test.db);
            let result = trip_log_repo.delete(1).await;

            assert!(result.is_err());

            Ok(())
        }
    }
}
