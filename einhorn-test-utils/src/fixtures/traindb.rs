use sea_orm::{prelude::Decimal, ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn traindb<'a>(&'a mut self) -> TraindbFixtures<'a> {
        TraindbFixtures { setup: self }
    }
}

pub struct TraindbFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> TraindbFixtures<'a> {
    pub async fn insert_company(
        &self,
        name: &str,
    ) -> Result<entity::traindb_company::Model, TestError> {
        Ok(
            entity::prelude::TraindbCompany::insert(entity::traindb_company::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_line(
        &self,
        company_id: i32,
        name: &str,
    ) -> Result<entity::traindb_line::Model, TestError> {
        Ok(
            entity::prelude::TraindbLine::insert(entity::traindb_line::ActiveModel {
                company_id: ActiveValue::Set(company_id),
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_station(
        &self,
        name: &str,
    ) -> Result<entity::traindb_station::Model, TestError> {
        Ok(
            entity::prelude::TraindbStation::insert(entity::traindb_station::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Places a station on a line, `kilo_tenths` is the position in tenths of a kilometre.
    pub async fn insert_line_station(
        &self,
        line_id: i32,
        station_id: i32,
        kilo_tenths: i64,
    ) -> Result<(), TestError> {
        entity::prelude::TraindbLineStation::insert(entity::traindb_line_station::ActiveModel {
            line_id: ActiveValue::Set(line_id),
            station_id: ActiveValue::Set(station_id),
            kilo: ActiveValue::Set(Decimal::new(kilo_tenths, 1)),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(())
    }

    /// Inserts a company, a line and one station per entry of `stations` positioned at the
    /// given kilo (in tenths of a kilometre).
    ///
    /// # Returns
    /// - The line and its stations in the order provided
    pub async fn insert_mock_line(
        &self,
        name: &str,
        stations: &[(&str, i64)],
    ) -> Result<
        (
            entity::traindb_line::Model,
            Vec<entity::traindb_station::Model>,
        ),
        TestError,
    > {
        let company = self.insert_company(&format!("{} Company", name)).await?;
        let line = self.insert_line(company.id, name).await?;

        let mut station_models = Vec::with_capacity(stations.len());
        for (station_name, kilo_tenths) in stations {
            let station = self.insert_station(station_name).await?;
            self.insert_line_station(line.id, station.id, *kilo_tenths)
                .await?;
            station_models.push(station);
        }

        Ok((line, station_models))
    }
}
