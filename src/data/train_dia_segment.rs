use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::timetable::NewDiaSegment;

pub struct TrainDiaSegmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrainDiaSegmentRepository<'a, C> {
    /// Creates a new instance of [`TrainDiaSegmentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        train_dia_id: i32,
        segment: &NewDiaSegment,
    ) -> Result<entity::train_dia_segment::Model, DbErr> {
        let segment = entity::train_dia_segment::ActiveModel {
            train_dia_id: ActiveValue::Set(train_dia_id),
            start_station_id: ActiveValue::Set(segment.start_station_id),
            end_station_id: ActiveValue::Set(segment.end_station_id),
            start_day: ActiveValue::Set(segment.start_day),
            end_day: ActiveValue::Set(segment.end_day),
            start_time: ActiveValue::Set(segment.start_time),
            end_time: ActiveValue::Set(segment.end_time),
            ..Default::default()
        };

        segment.insert(self.db).await
    }

    /// Segments of a dia in the order they were stored
    pub async fn get_by_train_dia(
        &self,
        train_dia_id: i32,
    ) -> Result<Vec<entity::train_dia_segment::Model>, DbErr> {
        entity::prelude::TrainDiaSegment::find()
            .filter(entity::train_dia_segment::Column::TrainDiaId.eq(train_dia_id))
            .order_by_asc(entity::train_dia_segment::Column::Id)
            .all(self.db)
            .await
    }

    /// Most recently stored segment of a dia
    pub async fn get_last(
        &self,
        train_dia_id: i32,
    ) -> Result<Option<entity::train_dia_segment::Model>, DbErr> {
        entity::prelude::TrainDiaSegment::find()
            .filter(entity::train_dia_segment::Column::TrainDiaId.eq(train_dia_id))
            .order_by_desc(entity::train_dia_segment::Column::Id)
            .one(self.db)
            .await
    }

    pub async fn delete(&self, segment_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::TrainDiaSegment::delete_by_id(segment_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use crate::model::timetable::NewDiaSegment;

    fn segment(
        start_station_id: i32,
        end_station_id: i32,
        start_day: i32,
        end_day: i32,
    ) -> NewDiaSegment {
        NewDiaSegment {
            start_station_id,
            end_station_id,
            start_day,
            end_day,
            start_time: NaiveTime::from_hms_opt(6, 0, 0),
            end_time: NaiveTime::from_hms_opt(6, 7, 0),
        }
    }

    mod create {
        use einhorn_test_utils::prelude::*;

        use super::segment;
        use crate::data::train_dia_segment::TrainDiaSegmentRepository;

        /// Expect success when creating a segment between two stations
        #[tokio::test]
        async fn creates_segment() -> Result<(), TestError> {
            let mut test = test_setup_with_einhorn_tables!()?;
            let (_, stations) = test
                .traindb()
                .insert_mock_line("Tokaido", &[("Tokyo", 0), ("Shinagawa", 68)])
                .await?;
            let (_, _, dia) = test.timetable().insert_mock_train_dia("1A").await?;

            let segment_repo = TrainDiaSegmentRepository::new(&test.db);
            let result = segment_repo
                .create(dia.id, &segment(stations[0].id, stations[1].id, 0, 0))
                .await?;

            assert_eq!(result.train_dia_id, dia.id);
            assert_eq!(result.start_time, chrono::NaiveTime::from_hms_opt(6, 0, 0));

            Ok(())
        }

        /// Expect Error when a station does not exist
        #[tokio::test]
        async fn fails_for_nonexistent_station() -> Result<(), TestError> {
            let mut test = test_setup_with_einhorn_tables!()?;
            let (_, stations) = test
                .traindb()
                .insert_mock_line("Tokaido", &[("Tokyo", 0), ("Shinagawa", 68)])
                .await?;
            let (_, _, dia) = test.timetable().insert_mock_train_dia("1A").await?;

            let segment_repo = TrainDiaSegmentRepository::new(&test.db);
            let result = segment_repo
                .create(dia.id, &segment(stations[0].id, stations[1].id + 1, 0, 0))
                .await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_last {
        use einhorn_test_utils::prelude::*;

        use super::segment;
        use crate::data::train_dia_segment::TrainDiaSegmentRepository;

        /// Expect the last stored segment of the requested dia only
        #[tokio::test]
        async fn returns_latest_segment_of_dia() -> Result<(), TestError> {
            let mut test = test_setup_with_einhorn_tables!()?;
            let (_, stations) = test
                .traindb()
                .insert_mock_line("Tokaido", &[("Tokyo", 0), ("Shinagawa", 68), ("Yokohama", 288)])
                .await?;
            let (_, _, dia) = test.timetable().insert_mock_train_dia("1A").await?;
            let (_, _, other_dia) = test.timetable().insert_mock_train_dia("3A").await?;

            let segment_repo = TrainDiaSegmentRepository::new(&test.db);
            segment_repo
                .create(dia.id, &segment(stations[0].id, stations[1].id, 0, 0))
                .await?;
            let last = segment_repo
                .create(dia.id, &segment(stations[1].id, stations[2].id, 0, 0))
                .await?;
            segment_repo
                .create(other_dia.id, &segment(stations[0].id, stations[1].id, 0, 0))
                .await?;

            let result = segment_repo.get_last(dia.id).await?;

            assert_eq!(result, Some(last));
            assert_eq!(segment_repo.get_by_train_dia(dia.id).await?.len(), 2);

            Ok(())
        }

        /// Expect None for a dia without segments
        #[tokio::test]
        async fn returns_none_for_empty_dia() -> Result<(), TestError> {
            let mut test = test_setup_with_einhorn_tables!()?;
            let (_, _, dia) = test.timetable().insert_mock_train_dia("1A").await?;

            let segment_repo = TrainDiaSegmentRepository::new(&test.db);
            let result = segment_repo.get_last(dia.id).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }
}
