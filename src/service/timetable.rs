//! Timetable management: sheet classes, train classes, train dias and their segments.

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        sheet_class::SheetClassRepository, train_class::TrainClassRepository,
        train_dia::TrainDiaRepository, train_dia_segment::TrainDiaSegmentRepository,
        traindb::TrainDbRepository,
    },
    error::{record::RecordError, validation::ValidationError, Error},
    model::{
        db::{SheetClassModel, TrainClassModel, TrainDiaModel, TrainDiaSegmentModel},
        timetable::{NewDiaSegment, NewTrainClass, NewTrainDia},
    },
    util::validate,
};

pub struct TimetableService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TimetableService<'a> {
    /// Creates a new instance of [`TimetableService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a sheet class offered by the provided companies.
    ///
    /// # Returns
    /// - `Ok(SheetClassModel)` - The created sheet class
    /// - `Err(Error::ValidationError)` - Name is empty or too long
    /// - `Err(Error::RecordError(RecordError::NotFound))` - A company does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_sheet_class(
        &self,
        name: &str,
        company_ids: &[i32],
    ) -> Result<SheetClassModel, Error> {
        validate::required("name", name, validate::MAX_SHEET_CLASS_NAME_LENGTH)?;
        let company_ids = dedup(company_ids);
        self.ensure_companies_exist(&company_ids).await?;

        let txn = self.db.begin().await?;
        let sheet_class = SheetClassRepository::new(&txn)
            .create(name, &company_ids)
            .await?;
        txn.commit().await?;

        tracing::debug!(
            sheet_class_id = %sheet_class.id,
            "Created sheet class {}",
            sheet_class.name
        );

        Ok(sheet_class)
    }

    /// Creates a train class with the sheet classes it offers and the companies operating it.
    ///
    /// # Returns
    /// - `Ok(TrainClassModel)` - The created train class
    /// - `Err(Error::ValidationError)` - Unknown basic type, or a name or type that is too long
    /// - `Err(Error::RecordError(RecordError::NotFound))` - A sheet class or company does not
    ///   exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_train_class(
        &self,
        train_class: NewTrainClass,
    ) -> Result<TrainClassModel, Error> {
        let basic_type = train_class
            .basic_type()
            .ok_or_else(|| ValidationError::InvalidBasicType(train_class.basic_type.clone()))?;
        validate::required(
            "specific_type",
            &train_class.specific_type,
            validate::MAX_TRAIN_CLASS_TYPE_LENGTH,
        )?;
        validate::max_length(
            "name",
            &train_class.name,
            validate::MAX_TRAIN_CLASS_NAME_LENGTH,
        )?;

        let sheet_class_ids = dedup(&train_class.sheet_class_ids);
        let company_ids = dedup(&train_class.company_ids);
        let sheet_class_repo = SheetClassRepository::new(self.db);
        for sheet_class_id in &sheet_class_ids {
            if sheet_class_repo.get(*sheet_class_id).await?.is_none() {
                return Err(RecordError::not_found("sheet class", *sheet_class_id).into());
            }
        }
        self.ensure_companies_exist(&company_ids).await?;

        let txn = self.db.begin().await?;
        let train_class_repo = TrainClassRepository::new(&txn);
        let model = train_class_repo
            .create(basic_type, &train_class.specific_type, &train_class.name)
            .await?;
        train_class_repo
            .set_sheet_classes(model.id, &sheet_class_ids)
            .await?;
        train_class_repo
            .set_companies(model.id, &company_ids)
            .await?;
        txn.commit().await?;

        tracing::debug!(
            train_class_id = %model.id,
            basic_type = basic_type.label(),
            "Created train class {}",
            model.specific_type
        );

        Ok(model)
    }

    pub async fn create_train_dia(&self, train_dia: NewTrainDia) -> Result<TrainDiaModel, Error> {
        validate::required("train_id", &train_dia.train_id, validate::MAX_TRAIN_ID_LENGTH)?;

        if TrainClassRepository::new(self.db)
            .get(train_dia.train_class_id)
            .await?
            .is_none()
        {
            return Err(RecordError::not_found("train class", train_dia.train_class_id).into());
        }

        let model = TrainDiaRepository::new(self.db)
            .create(
                train_dia.train_class_id,
                &train_dia.train_id,
                train_dia.is_up,
                train_dia.revised_date,
            )
            .await?;

        tracing::debug!(train_dia_id = %model.id, "Created train dia {}", model.train_id);

        Ok(model)
    }

    /// Appends a segment to a train dia.
    ///
    /// The segment must depart no earlier than the previously stored segment arrives, so the
    /// dia's segments stay in running order.
    ///
    /// # Returns
    /// - `Ok(TrainDiaSegmentModel)` - The stored segment
    /// - `Err(Error::ValidationError)` - Same start and end station, day or time out of order,
    ///   or the segment departs before the previous one arrives
    /// - `Err(Error::RecordError(RecordError::NotFound))` - Dia or a station does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_dia_segment(
        &self,
        train_dia_id: i32,
        segment: NewDiaSegment,
    ) -> Result<TrainDiaSegmentModel, Error> {
        validate::distinct_stations(segment.start_station_id, segment.end_station_id)?;
        validate::day_range(
            segment.start_day,
            segment.end_day,
            segment.start_time,
            segment.end_time,
        )?;

        if TrainDiaRepository::new(self.db)
            .get(train_dia_id)
            .await?
            .is_none()
        {
            return Err(RecordError::not_found("train dia", train_dia_id).into());
        }

        let traindb_repo = TrainDbRepository::new(self.db);
        for station_id in [segment.start_station_id, segment.end_station_id] {
            if traindb_repo.get_station(station_id).await?.is_none() {
                return Err(RecordError::not_found("station", station_id).into());
            }
        }

        let txn = self.db.begin().await?;
        if TrainDiaRepository::new(&txn)
            .lock(train_dia_id)
            .await?
            .is_none()
        {
            txn.rollback().await?;

            return Err(RecordError::not_found("train dia", train_dia_id).into());
        }

        let segment_repo = TrainDiaSegmentRepository::new(&txn);
        if let Some(last) = segment_repo.get_last(train_dia_id).await? {
            if !validate::follows(
                (last.end_day, last.end_time),
                (segment.start_day, segment.start_time),
            ) {
                tracing::warn!(
                    train_dia_id = %train_dia_id,
                    "Rejected segment departing before previous segment ID {} arrives",
                    last.id
                );
                txn.rollback().await?;

                return Err(ValidationError::SegmentOutOfOrder(train_dia_id).into());
            }
        }

        let model = segment_repo.create(train_dia_id, &segment).await?;
        txn.commit().await?;

        Ok(model)
    }

    /// Segments of a train dia in running order.
    pub async fn get_dia_segments(
        &self,
        train_dia_id: i32,
    ) -> Result<Vec<TrainDiaSegmentModel>, Error> {
        if TrainDiaRepository::new(self.db)
            .get(train_dia_id)
            .await?
            .is_none()
        {
            return Err(RecordError::not_found("train dia", train_dia_id).into());
        }

        Ok(TrainDiaSegmentRepository::new(self.db)
            .get_by_train_dia(train_dia_id)
            .await?)
    }

    async fn ensure_companies_exist(&self, company_ids: &[i32]) -> Result<(), Error> {
        let found = TrainDbRepository::new(self.db)
            .get_companies(company_ids)
            .await?;

        match company_ids
            .iter()
            .find(|id| !found.iter().any(|company| company.id == **id))
        {
            Some(missing) => Err(RecordError::not_found("company", *missing).into()),
            None => Ok(()),
        }
    }
}

/// Sorted IDs without duplicates, so join rows are never inserted twice.
pub(crate) fn dedup(ids: &[i32]) -> Vec<i32> {
    let mut ids = ids.to_vec();
    ids.sort_unstable();
    ids.dedup();
    ids
}
