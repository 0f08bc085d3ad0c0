//! Read access to the railway reference tables (companies, lines, stations and kilo positions).
//!
//! These tables are maintained outside of Einhorn; the riding log only reads them to validate
//! references and to measure ridden distances.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct TrainDbRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrainDbRepository<'a, C> {
    /// Creates a new instance of [`TrainDbRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_line(
        &self,
        line_id: i32,
    ) -> Result<Option<entity::traindb_line::Model>, DbErr> {
        entity::prelude::TraindbLine::find_by_id(line_id)
            .one(self.db)
            .await
    }

    pub async fn get_station(
        &self,
        station_id: i32,
    ) -> Result<Option<entity::traindb_station::Model>, DbErr> {
        entity::prelude::TraindbStation::find_by_id(station_id)
            .one(self.db)
            .await
    }

    /// Returns the companies that exist out of the provided IDs
    pub async fn get_companies(
        &self,
        company_ids: &[i32],
    ) -> Result<Vec<entity::traindb_company::Model>, DbErr> {
        if company_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::TraindbCompany::find()
            .filter(entity::traindb_company::Column::Id.is_in(company_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Kilo position of a station on a line, `None` if the station is not on the line
    pub async fn get_position(
        &self,
        line_id: i32,
        station_id: i32,
    ) -> Result<Option<entity::traindb_line_station::Model>, DbErr> {
        entity::prelude::TraindbLineStation::find_by_id((line_id, station_id))
            .one(self.db)
            .await
    }

    /// Every station position on the provided lines
    pub async fn get_positions_by_lines(
        &self,
        line_ids: &[i32],
    ) -> Result<Vec<entity::traindb_line_station::Model>, DbErr> {
        if line_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::TraindbLineStation::find()
            .filter(entity::traindb_line_station::Column::LineId.is_in(line_ids.iter().copied()))
            .all(self.db)
            .await
    }
}
