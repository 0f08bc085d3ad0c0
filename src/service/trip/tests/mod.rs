mod delete;

use einhorn_test_utils::prelude::*;
use sea_orm::EntityTrait;

use super::*;
use crate::model::db::{ProfileModel, SheetClassModel, TrainDiaModel, UserModel};

/// A user with an empty trip on a dia whose class offers one sheet class, and a line with
/// stations at 0.0, 6.8 and 28.8 km.
struct Rider {
    user: UserModel,
    trip: TripLogModel,
    sheet_class: SheetClassModel,
    dia: TrainDiaModel,
    line_id: i32,
    station_ids: Vec<i32>,
}

async fn setup_rider(test: &mut TestSetup) -> Result<Rider, TestError> {
    let user = test.user().insert_user("kaede").await?;
    let (line, stations) = test
        .traindb()
        .insert_mock_line("Tokaido", &[("Tokyo", 0), ("Shinagawa", 68), ("Yokohama", 288)])
        .await?;
    let (_, sheet_class, dia) = test.timetable().insert_mock_train_dia("1A").await?;
    let trip = test.trip().insert_trip_log(user.id).await?;

    Ok(Rider {
        user,
        trip,
        sheet_class,
        dia,
        line_id: line.id,
        station_ids: stations.into_iter().map(|station| station.id).collect(),
    })
}

fn date(day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2024, 3, day)
}

impl Rider {
    fn train_log(&self, start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> NewTrainLog {
        NewTrainLog {
            train_dia_id: self.dia.id,
            sheet_class_id: self.sheet_class.id,
            start_date,
            end_date,
        }
    }

    fn segment(&self, start: usize, end: usize) -> NewSegmentLog {
        NewSegmentLog {
            line_id: self.line_id,
            start_station_id: self.station_ids[start],
            end_station_id: self.station_ids[end],
            memo: String::new(),
        }
    }
}

async fn find_trip(test: &TestSetup, trip_log_id: i32) -> Result<Option<TripLogModel>, TestError> {
    Ok(entity::prelude::TripLog::find_by_id(trip_log_id)
        .one(&test.db)
        .await?)
}

async fn find_profile(test: &TestSetup, user_id: i32) -> Result<Option<ProfileModel>, TestError> {
    use sea_orm::{ColumnTrait, QueryFilter};

    Ok(entity::prelude::EinhornProfile::find()
        .filter(entity::einhorn_profile::Column::UserId.eq(user_id))
        .one(&test.db)
        .await?)
}
