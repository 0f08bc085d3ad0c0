use chrono::NaiveDate;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn trip<'a>(&'a mut self) -> TripFixtures<'a> {
        TripFixtures { setup: self }
    }
}

pub struct TripFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> TripFixtures<'a> {
    pub async fn insert_trip_log(
        &self,
        owner_id: i32,
    ) -> Result<entity::trip_log::Model, TestError> {
        Ok(
            entity::prelude::TripLog::insert(entity::trip_log::ActiveModel {
                owner_id: ActiveValue::Set(owner_id),
                memo: ActiveValue::Set(String::new()),
                start_date: ActiveValue::Set(None),
                end_date: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_train_log(
        &self,
        trip_log_id: i32,
        train_dia_id: i32,
        sheet_class_id: i32,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<entity::train_log::Model, TestError> {
        Ok(
            entity::prelude::TrainLog::insert(entity::train_log::ActiveModel {
                trip_log_id: ActiveValue::Set(trip_log_id),
                train_dia_id: ActiveValue::Set(train_dia_id),
                sheet_class_id: ActiveValue::Set(sheet_class_id),
                start_date: ActiveValue::Set(start_date),
                end_date: ActiveValue::Set(end_date),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_segment_log(
        &self,
        train_log_id: i32,
        line_id: i32,
        start_station_id: i32,
        end_station_id: i32,
    ) -> Result<entity::segment_log::Model, TestError> {
        Ok(
            entity::prelude::SegmentLog::insert(entity::segment_log::ActiveModel {
                train_log_id: ActiveValue::Set(train_log_id),
                line_id: ActiveValue::Set(line_id),
                start_station_id: ActiveValue::Set(start_station_id),
                end_station_id: ActiveValue::Set(end_station_id),
                memo: ActiveValue::Set(String::new()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
