//! Trip service.
//!
//! Owns every mutation of trip, train and segment logs. Writes that change what a user has
//! ridden run in one transaction with [`CacheService`], so the trip date range and the
//! profile's kilo totals are never observed out of date.

#[cfg(test)]
mod tests;

use chrono::NaiveDate;
use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        segment_log::SegmentLogRepository, sheet_class::SheetClassRepository,
        train_class::TrainClassRepository, train_dia::TrainDiaRepository,
        train_log::TrainLogRepository, traindb::TrainDbRepository, trip_log::TripLogRepository,
        user::UserRepository,
    },
    error::{record::RecordError, validation::ValidationError, Error},
    model::{
        db::{SegmentLogModel, TrainLogModel, TripLogModel},
        trip::{NewSegmentLog, NewTrainLog, NewTripLog},
    },
    service::{cache::CacheService, timetable::dedup},
    util::validate,
};

pub struct TripService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TripService<'a> {
    /// Creates a new instance of [`TripService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a trip for `owner_id` along with its partners.
    ///
    /// # Returns
    /// - `Ok(TripLogModel)` - The created trip, without dates until a train log is added
    /// - `Err(Error::RecordError)` - Owner or a partner does not exist, or the owner is listed
    ///   as their own partner
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_trip(
        &self,
        owner_id: i32,
        trip: NewTripLog,
    ) -> Result<TripLogModel, Error> {
        if UserRepository::new(self.db).get(owner_id).await?.is_none() {
            return Err(RecordError::not_found("user", owner_id).into());
        }
        let partner_ids = self.check_partners(owner_id, &trip.partner_ids).await?;

        let txn = self.db.begin().await?;
        let trip_log_repo = TripLogRepository::new(&txn);
        let trip_log = trip_log_repo.create(owner_id, &trip.memo).await?;
        trip_log_repo
            .set_partners(trip_log.id, &partner_ids)
            .await?;
        txn.commit().await?;

        tracing::debug!(trip_log_id = %trip_log.id, owner_id = %owner_id, "Created trip log");

        Ok(trip_log)
    }

    pub async fn update_memo(&self, trip_log_id: i32, memo: &str) -> Result<TripLogModel, Error> {
        TripLogRepository::new(self.db)
            .update_memo(trip_log_id, memo)
            .await?
            .ok_or_else(|| RecordError::not_found("trip log", trip_log_id).into())
    }

    /// Replaces the partners of a trip.
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - The stored partner IDs in ascending order
    /// - `Err(Error::RecordError)` - Trip or a partner does not exist, or the owner is listed
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn set_partners(
        &self,
        trip_log_id: i32,
        partner_ids: &[i32],
    ) -> Result<Vec<i32>, Error> {
        let trip_log = self.get_trip(trip_log_id).await?;
        let partner_ids = self.check_partners(trip_log.owner_id, partner_ids).await?;

        let txn = self.db.begin().await?;
        TripLogRepository::new(&txn)
            .set_partners(trip_log_id, &partner_ids)
            .await?;
        txn.commit().await?;

        Ok(partner_ids)
    }

    /// Deletes a trip with its train and segment logs and recomputes the owner's kilo totals.
    ///
    /// # Returns
    /// - `Ok(true)` - The trip was deleted
    /// - `Ok(false)` - No trip with the ID exists
    pub async fn delete_trip(&self, trip_log_id: i32) -> Result<bool, Error> {
        let trip_log = match TripLogRepository::new(self.db).get(trip_log_id).await? {
            Some(trip_log) => trip_log,
            None => return Ok(false),
        };

        let txn = self.db.begin().await?;
        let result = TripLogRepository::new(&txn).delete(trip_log_id).await?;
        CacheService::new(&txn)
            .recompute_user_kilo(trip_log.owner_id)
            .await?;
        txn.commit().await?;

        tracing::debug!(trip_log_id = %trip_log_id, "Deleted trip log");

        Ok(result.rows_affected > 0)
    }

    /// Adds a ridden train to a trip and refreshes the trip's date range.
    ///
    /// # Returns
    /// - `Ok(TrainLogModel)` - The stored train log
    /// - `Err(Error::ValidationError)` - End date before start date, or a sheet class the
    ///   dia's train class does not offer
    /// - `Err(Error::RecordError(RecordError::NotFound))` - Trip, dia or sheet class does not
    ///   exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_train_log(
        &self,
        trip_log_id: i32,
        train_log: NewTrainLog,
    ) -> Result<TrainLogModel, Error> {
        validate::date_range(train_log.start_date, train_log.end_date)?;

        self.get_trip(trip_log_id).await?;
        let train_dia = TrainDiaRepository::new(self.db)
            .get(train_log.train_dia_id)
            .await?
            .ok_or_else(|| RecordError::not_found("train dia", train_log.train_dia_id))?;
        if SheetClassRepository::new(self.db)
            .get(train_log.sheet_class_id)
            .await?
            .is_none()
        {
            return Err(RecordError::not_found("sheet class", train_log.sheet_class_id).into());
        }

        let offered = TrainClassRepository::new(self.db)
            .get_sheet_class_ids(train_dia.train_class_id)
            .await?;
        if !offered.is_empty() && !offered.contains(&train_log.sheet_class_id) {
            tracing::warn!(
                trip_log_id = %trip_log_id,
                "Rejected sheet class ID {} not offered by train class ID {}",
                train_log.sheet_class_id,
                train_dia.train_class_id
            );

            return Err(ValidationError::SheetClassNotOffered {
                sheet_class_id: train_log.sheet_class_id,
                train_class_id: train_dia.train_class_id,
            }
            .into());
        }

        let txn = self.db.begin().await?;
        let model = TrainLogRepository::new(&txn)
            .create(trip_log_id, &train_log)
            .await?;
        CacheService::new(&txn)
            .recompute_trip_dates(trip_log_id)
            .await?;
        txn.commit().await?;

        tracing::debug!(trip_log_id = %trip_log_id, train_log_id = %model.id, "Added train log");

        Ok(model)
    }

    /// Changes the dates of a train log and refreshes the trip's date range.
    pub async fn update_train_log_dates(
        &self,
        train_log_id: i32,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<TrainLogModel, Error> {
        validate::date_range(start_date, end_date)?;
        let train_log = self.get_train_log(train_log_id).await?;

        let txn = self.db.begin().await?;
        let model = TrainLogRepository::new(&txn)
            .update_dates(train_log_id, start_date, end_date)
            .await?
            .ok_or_else(|| RecordError::not_found("train log", train_log_id))?;
        CacheService::new(&txn)
            .recompute_trip_dates(train_log.trip_log_id)
            .await?;
        txn.commit().await?;

        Ok(model)
    }

    /// Deletes a train log with its segment logs, refreshing the trip dates and owner's kilo.
    ///
    /// # Returns
    /// - `Ok(true)` - The train log was deleted
    /// - `Ok(false)` - No train log with the ID exists
    pub async fn delete_train_log(&self, train_log_id: i32) -> Result<bool, Error> {
        let train_log = match TrainLogRepository::new(self.db).get(train_log_id).await? {
            Some(train_log) => train_log,
            None => return Ok(false),
        };
        let trip_log = self.get_trip(train_log.trip_log_id).await?;

        let txn = self.db.begin().await?;
        let result = TrainLogRepository::new(&txn).delete(train_log_id).await?;
        let cache = CacheService::new(&txn);
        cache.recompute_trip_dates(trip_log.id).await?;
        cache.recompute_user_kilo(trip_log.owner_id).await?;
        txn.commit().await?;

        tracing::debug!(train_log_id = %train_log_id, "Deleted train log");

        Ok(result.rows_affected > 0)
    }

    /// Records a ridden line segment and recomputes the owner's kilo totals.
    ///
    /// # Returns
    /// - `Ok(SegmentLogModel)` - The stored segment log
    /// - `Err(Error::ValidationError)` - Same start and end station, or the new totals no
    ///   longer fit the kilo column
    /// - `Err(Error::RecordError)` - Train log or line does not exist, or a station has no
    ///   kilo position on the line
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_segment_log(
        &self,
        train_log_id: i32,
        segment: NewSegmentLog,
    ) -> Result<SegmentLogModel, Error> {
        validate::distinct_stations(segment.start_station_id, segment.end_station_id)?;

        let train_log = self.get_train_log(train_log_id).await?;
        let trip_log = self.get_trip(train_log.trip_log_id).await?;

        let traindb_repo = TrainDbRepository::new(self.db);
        if traindb_repo.get_line(segment.line_id).await?.is_none() {
            return Err(RecordError::not_found("line", segment.line_id).into());
        }
        for station_id in [segment.start_station_id, segment.end_station_id] {
            if traindb_repo
                .get_position(segment.line_id, station_id)
                .await?
                .is_none()
            {
                tracing::warn!(
                    train_log_id = %train_log_id,
                    "Rejected segment with station ID {} off line ID {}",
                    station_id,
                    segment.line_id
                );

                return Err(RecordError::StationNotOnLine {
                    line_id: segment.line_id,
                    station_id,
                }
                .into());
            }
        }

        let txn = self.db.begin().await?;
        let model = SegmentLogRepository::new(&txn)
            .create(train_log_id, &segment)
            .await?;
        CacheService::new(&txn)
            .recompute_user_kilo(trip_log.owner_id)
            .await?;
        txn.commit().await?;

        tracing::debug!(
            train_log_id = %train_log_id,
            segment_log_id = %model.id,
            "Added segment log"
        );

        Ok(model)
    }

    /// Deletes a segment log and recomputes the owner's kilo totals.
    ///
    /// # Returns
    /// - `Ok(true)` - The segment log was deleted
    /// - `Ok(false)` - No segment log with the ID exists
    pub async fn delete_segment_log(&self, segment_log_id: i32) -> Result<bool, Error> {
        let segment = match SegmentLogRepository::new(self.db)
            .get(segment_log_id)
            .await?
        {
            Some(segment) => segment,
            None => return Ok(false),
        };
        let train_log = self.get_train_log(segment.train_log_id).await?;
        let trip_log = self.get_trip(train_log.trip_log_id).await?;

        let txn = self.db.begin().await?;
        let result = SegmentLogRepository::new(&txn)
            .delete(segment_log_id)
            .await?;
        CacheService::new(&txn)
            .recompute_user_kilo(trip_log.owner_id)
            .await?;
        txn.commit().await?;

        tracing::debug!(segment_log_id = %segment_log_id, "Deleted segment log");

        Ok(result.rows_affected > 0)
    }

    async fn get_trip(&self, trip_log_id: i32) -> Result<TripLogModel, Error> {
        TripLogRepository::new(self.db)
            .get(trip_log_id)
            .await?
            .ok_or_else(|| RecordError::not_found("trip log", trip_log_id).into())
    }

    async fn get_train_log(&self, train_log_id: i32) -> Result<TrainLogModel, Error> {
        TrainLogRepository::new(self.db)
            .get(train_log_id)
            .await?
            .ok_or_else(|| RecordError::not_found("train log", train_log_id).into())
    }

    /// Deduplicates partner IDs and ensures they exist and exclude the owner.
    async fn check_partners(&self, owner_id: i32, partner_ids: &[i32]) -> Result<Vec<i32>, Error> {
        let partner_ids = dedup(partner_ids);
        if partner_ids.contains(&owner_id) {
            return Err(RecordError::SelfReference(owner_id, "partner").into());
        }

        let found = UserRepository::new(self.db).get_many(&partner_ids).await?;
        match partner_ids
            .iter()
            .find(|id| !found.iter().any(|user| user.id == **id))
        {
            Some(missing) => Err(RecordError::not_found("user", *missing).into()),
            None => Ok(partner_ids),
        }
    }
}
