//! Recomputation of the cached riding totals and trip date ranges.
//!
//! `EinhornProfile::total_kilo`/`unique_kilo` and `TripLog::start_date`/`end_date` are derived
//! from a user's train and segment logs. [`CacheService`] is the only writer of these columns
//! and runs on any connection, so callers invoke it on the transaction of the triggering write.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use dioxus_logger::tracing;
use sea_orm::{prelude::Decimal, ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        profile::ProfileRepository, segment_log::SegmentLogRepository,
        train_log::TrainLogRepository, traindb::TrainDbRepository, trip_log::TripLogRepository,
        user::UserRepository,
    },
    error::{record::RecordError, validation::ValidationError, Error},
    model::db::{ProfileModel, SegmentLogModel, TrainLogModel, TripLogModel},
    util::{
        kilo::{self, RiddenSegment},
        validate,
    },
};

/// Counts of the records refreshed by [`CacheService::rebuild_all`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RebuildSummary {
    pub trip_logs: usize,
    pub profiles: usize,
}

pub struct CacheService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CacheService<'a, C> {
    /// Creates a new instance of [`CacheService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Recomputes the date range of a trip from its train logs.
    ///
    /// # Returns
    /// - `Ok(Some(TripLogModel))` - Trip with its refreshed `start_date`/`end_date`
    /// - `Ok(None)` - Trip does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn recompute_trip_dates(
        &self,
        trip_log_id: i32,
    ) -> Result<Option<TripLogModel>, Error> {
        let train_logs = TrainLogRepository::new(self.db)
            .get_by_trip_log(trip_log_id)
            .await?;
        let (start_date, end_date) = trip_dates(&train_logs);

        let trip_log = TripLogRepository::new(self.db)
            .update_dates(trip_log_id, start_date, end_date)
            .await?;

        tracing::debug!(
            trip_log_id = %trip_log_id,
            start_date = ?start_date,
            end_date = ?end_date,
            "Recomputed trip dates"
        );

        Ok(trip_log)
    }

    /// Recomputes the user's `total_kilo` and `unique_kilo`, creating the profile if missing.
    ///
    /// # Returns
    /// - `Ok(ProfileModel)` - Profile with the refreshed kilo values
    /// - `Err(Error::RecordError)` - A segment log uses a station without a kilo position on
    ///   its line
    /// - `Err(Error::ValidationError)` - A total does not fit the kilo column
    /// - `Err(Error::DbErr)` - Database operation failed, including a nonexistent user
    pub async fn recompute_user_kilo(&self, user_id: i32) -> Result<ProfileModel, Error> {
        let segment_logs = SegmentLogRepository::new(self.db)
            .get_by_owner(user_id)
            .await?;
        let ridden = self.resolve_segments(&segment_logs).await?;

        let (total_kilo, unique_kilo) = kilo_totals(&ridden)?;

        let profile_repo = ProfileRepository::new(self.db);
        let profile = profile_repo.get_or_create(user_id).await?;
        let profile = profile_repo
            .update_kilo(profile.id, total_kilo, unique_kilo)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Profile ID {} vanished while updating kilo for user ID {}",
                    profile.id, user_id
                ))
            })?;

        tracing::debug!(
            user_id = %user_id,
            total_kilo = ?total_kilo,
            unique_kilo = ?unique_kilo,
            "Recomputed user kilo"
        );

        Ok(profile)
    }

    /// Looks up the kilo positions of every segment's stations.
    async fn resolve_segments(
        &self,
        segment_logs: &[SegmentLogModel],
    ) -> Result<Vec<RiddenSegment>, Error> {
        let line_ids: Vec<i32> = segment_logs
            .iter()
            .map(|segment| segment.line_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let positions: HashMap<(i32, i32), Decimal> = TrainDbRepository::new(self.db)
            .get_positions_by_lines(&line_ids)
            .await?
            .into_iter()
            .map(|position| ((position.line_id, position.station_id), position.kilo))
            .collect();

        let kilo_of = |line_id: i32, station_id: i32| {
            positions
                .get(&(line_id, station_id))
                .copied()
                .ok_or(RecordError::StationNotOnLine {
                    line_id,
                    station_id,
                })
        };

        segment_logs
            .iter()
            .map(|segment| -> Result<RiddenSegment, Error> {
                Ok(RiddenSegment::new(
                    segment.line_id,
                    kilo_of(segment.line_id, segment.start_station_id)?,
                    kilo_of(segment.line_id, segment.end_station_id)?,
                ))
            })
            .collect()
    }
}

impl<'a> CacheService<'a, DatabaseConnection> {
    /// Recomputes every trip's dates and every user's kilo values in one transaction.
    ///
    /// Used at startup to repair caches written by older code or edited by hand.
    pub async fn rebuild_all(&self) -> Result<RebuildSummary, Error> {
        let txn = self.db.begin().await?;
        let cache = CacheService::new(&txn);

        let trip_log_ids = TripLogRepository::new(&txn).get_all_ids().await?;
        for trip_log_id in &trip_log_ids {
            cache.recompute_trip_dates(*trip_log_id).await?;
        }

        let user_ids = UserRepository::new(&txn).get_all_ids().await?;
        for user_id in &user_ids {
            cache.recompute_user_kilo(*user_id).await?;
        }

        txn.commit().await?;

        let summary = RebuildSummary {
            trip_logs: trip_log_ids.len(),
            profiles: user_ids.len(),
        };
        tracing::info!(
            "Rebuilt caches of {} trip logs and {} profiles",
            summary.trip_logs,
            summary.profiles
        );

        Ok(summary)
    }
}

/// Total and unique ridden distance at the precision stored on the profile.
pub fn kilo_totals(
    ridden: &[RiddenSegment],
) -> Result<(Option<Decimal>, Option<Decimal>), ValidationError> {
    let total_kilo = kilo::total_kilo(ridden).map(validate::kilo).transpose()?;
    let unique_kilo = kilo::unique_kilo(ridden).map(validate::kilo).transpose()?;

    Ok((total_kilo, unique_kilo))
}

/// Earliest and latest date present on any of the train logs.
///
/// Both dates of every train log take part, so a log with only an end date still widens the
/// range. Returns `(None, None)` when no train log carries a date.
pub fn trip_dates(train_logs: &[TrainLogModel]) -> (Option<NaiveDate>, Option<NaiveDate>) {
    let dates = train_logs
        .iter()
        .flat_map(|train_log| [train_log.start_date, train_log.end_date])
        .flatten();

    dates.fold((None, None), |(min, max), date| {
        (
            Some(min.map_or(date, |min: NaiveDate| min.min(date))),
            Some(max.map_or(date, |max: NaiveDate| max.max(date))),
        )
    })
}

#[cfg(test)]
mod tests {
    mod trip_dates {
        use chrono::NaiveDate;

        use crate::{model::db::TrainLogModel, service::cache::trip_dates};

        fn date(day: u32) -> Option<NaiveDate> {
            NaiveDate::from_ymd_opt(2024, 3, day)
        }

        fn train_log(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> TrainLogModel {
            TrainLogModel {
                id: 1,
                trip_log_id: 1,
                train_dia_id: 1,
                sheet_class_id: 1,
                start_date,
                end_date,
            }
        }

        #[test]
        fn empty_trip_has_no_dates() {
            assert_eq!(trip_dates(&[]), (None, None));
            assert_eq!(trip_dates(&[train_log(None, None)]), (None, None));
        }

        #[test]
        fn spans_earliest_to_latest_date() {
            let logs = [
                train_log(date(2), date(2)),
                train_log(date(1), None),
                train_log(None, date(4)),
            ];

            assert_eq!(trip_dates(&logs), (date(1), date(4)));
        }

        /// A lone end date sets both ends of the range
        #[test]
        fn single_date_bounds_both_ends() {
            let logs = [train_log(None, date(4))];

            assert_eq!(trip_dates(&logs), (date(4), date(4)));
        }
    }

    mod recompute_user_kilo {
        use einhorn_test_utils::prelude::*;
        use sea_orm::prelude::Decimal;

        use crate::{
            data::profile::ProfileRepository,
            error::{record::RecordError, Error},
            service::cache::{kilo_totals, CacheService},
            util::kilo::RiddenSegment,
        };

        /// Positions stored without a fraction still yield totals with one decimal place
        #[test]
        fn keeps_one_decimal_place_for_integral_positions() {
            let ridden = [
                RiddenSegment::new(1, Decimal::from(0), Decimal::from(5)),
                RiddenSegment::new(1, Decimal::from(5), Decimal::from(0)),
            ];

            let (total_kilo, unique_kilo) = kilo_totals(&ridden).unwrap();

            assert_eq!(total_kilo, Some(Decimal::new(100, 1)));
            assert_eq!(unique_kilo, Some(Decimal::new(50, 1)));
            assert_eq!(total_kilo.map(|kilo| kilo.scale()), Some(1));
            assert_eq!(unique_kilo.map(|kilo| kilo.scale()), Some(1));
        }

        /// Expect the profile to be created and to hold both totals
        #[tokio::test]
        async fn creates_profile_with_totals() -> Result<(), TestError> {
            let mut test = test_setup_with_einhorn_tables!()?;
            let user = test.user().insert_user("kaede").await?;
            let (line, stations) = test
                .traindb()
                .insert_mock_line("Tokaido", &[("Tokyo", 0), ("Shinagawa", 68), ("Yokohama", 288)])
                .await?;
            let (_, sheet_class, dia) = test.timetable().insert_mock_train_dia("1A").await?;
            let trip = test.trip().insert_trip_log(user.id).await?;
            let train_log = test
                .trip()
                .insert_train_log(trip.id, dia.id, sheet_class.id, None, None)
                .await?;
            test.trip()
                .insert_segment_log(train_log.id, line.id, stations[0].id, stations[2].id)
                .await?;
            test.trip()
                .insert_segment_log(train_log.id, line.id, stations[1].id, stations[0].id)
                .await?;

            let cache = CacheService::new(&test.db);
            let profile = cache.recompute_user_kilo(user.id).await.unwrap();

            assert_eq!(profile.user_id, user.id);
            assert_eq!(profile.total_kilo, Some(Decimal::new(356, 1)));
            assert_eq!(profile.unique_kilo, Some(Decimal::new(288, 1)));

            Ok(())
        }

        /// Expect both totals to be cleared once nothing is ridden
        #[tokio::test]
        async fn clears_totals_without_segments() -> Result<(), TestError> {
            let mut test = test_setup_with_einhorn_tables!()?;
            let user = test.user().insert_user("kaede").await?;
            let profile = test.user().insert_profile(user.id, false, false).await?;
            ProfileRepository::new(&test.db)
                .update_kilo(
                    profile.id,
                    Some(Decimal::new(10, 1)),
                    Some(Decimal::new(10, 1)),
                )
                .await?;

            let cache = CacheService::new(&test.db);
            let profile = cache.recompute_user_kilo(user.id).await.unwrap();

            assert_eq!(profile.total_kilo, None);
            assert_eq!(profile.unique_kilo, None);

            Ok(())
        }

        /// Expect a RecordError when a segment's station has no position on its line
        #[tokio::test]
        async fn fails_for_station_off_line() -> Result<(), TestError> {
            let mut test = test_setup_with_einhorn_tables!()?;
            let user = test.user().insert_user("kaede").await?;
            let (line, stations) = test
                .traindb()
                .insert_mock_line("Tokaido", &[("Tokyo", 0), ("Shinagawa", 68)])
                .await?;
            let stray = test.traindb().insert_station("Shinjuku").await?;
            let (_, sheet_class, dia) = test.timetable().insert_mock_train_dia("1A").await?;
            let trip = test.trip().insert_trip_log(user.id).await?;
            let train_log = test
                .trip()
                .insert_train_log(trip.id, dia.id, sheet_class.id, None, None)
                .await?;
            test.trip()
                .insert_segment_log(train_log.id, line.id, stations[0].id, stray.id)
                .await?;

            let cache = CacheService::new(&test.db);
            let result = cache.recompute_user_kilo(user.id).await;

            assert!(matches!(
                result,
                Err(Error::RecordError(RecordError::StationNotOnLine { station_id, .. }))
                    if station_id == stray.id
            ));

            Ok(())
        }
    }

    mod rebuild_all {
        use chrono::NaiveDate;
        use einhorn_test_utils::prelude::*;
        use sea_orm::{prelude::Decimal, EntityTrait};

        use crate::service::cache::{CacheService, RebuildSummary};

        /// Expect stale caches of every trip and user to be repaired
        #[tokio::test]
        async fn repairs_stale_caches() -> Result<(), TestError> {
            let mut test = test_setup_with_einhorn_tables!()?;
            let user = test.user().insert_user("kaede").await?;
            test.user().insert_user("sora").await?;
            let (line, stations) = test
                .traindb()
                .insert_mock_line("Tokaido", &[("Tokyo", 0), ("Shinagawa", 68)])
                .await?;
            let (_, sheet_class, dia) = test.timetable().insert_mock_train_dia("1A").await?;
            let trip = test.trip().insert_trip_log(user.id).await?;
            let date = NaiveDate::from_ymd_opt(2024, 3, 1);
            let train_log = test
                .trip()
                .insert_train_log(trip.id, dia.id, sheet_class.id, date, date)
                .await?;
            test.trip()
                .insert_segment_log(train_log.id, line.id, stations[0].id, stations[1].id)
                .await?;

            let cache = CacheService::new(&test.db);
            let summary = cache.rebuild_all().await.unwrap();

            assert_eq!(
                summary,
                RebuildSummary {
                    trip_logs: 1,
                    profiles: 2
                }
            );
            let trip = entity::prelude::TripLog::find_by_id(trip.id)
                .one(&test.db)
                .await?
                .expect("trip should exist");
            assert_eq!((trip.start_date, trip.end_date), (date, date));
            let profiles = entity::prelude::EinhornProfile::find().all(&test.db).await?;
            assert_eq!(profiles.len(), 2);
            let profile = profiles
                .iter()
                .find(|profile| profile.user_id == user.id)
                .expect("profile should exist");
            assert_eq!(profile.total_kilo, Some(Decimal::new(68, 1)));

            Ok(())
        }
    }
}
