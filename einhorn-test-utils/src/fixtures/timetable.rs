use chrono::NaiveDate;
use entity::train_class::BasicType;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn timetable<'a>(&'a mut self) -> TimetableFixtures<'a> {
        TimetableFixtures { setup: self }
    }
}

pub struct TimetableFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> TimetableFixtures<'a> {
    pub async fn insert_sheet_class(
        &self,
        name: &str,
    ) -> Result<entity::sheet_class::Model, TestError> {
        Ok(
            entity::prelude::SheetClass::insert(entity::sheet_class::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_train_class(
        &self,
        basic_type: BasicType,
        specific_type: &str,
    ) -> Result<entity::train_class::Model, TestError> {
        Ok(
            entity::prelude::TrainClass::insert(entity::train_class::ActiveModel {
                basic_type: ActiveValue::Set(basic_type),
                specific_type: ActiveValue::Set(specific_type.to_string()),
                name: ActiveValue::Set(String::new()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn link_sheet_class(
        &self,
        train_class_id: i32,
        sheet_class_id: i32,
    ) -> Result<(), TestError> {
        entity::prelude::TrainClassSheetClass::insert(
            entity::train_class_sheet_class::ActiveModel {
                train_class_id: ActiveValue::Set(train_class_id),
                sheet_class_id: ActiveValue::Set(sheet_class_id),
            },
        )
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(())
    }

    pub async fn insert_train_dia(
        &self,
        train_class_id: i32,
        train_id: &str,
    ) -> Result<entity::train_dia::Model, TestError> {
        let revised_date = NaiveDate::from_ymd_opt(2024, 3, 16)
            .ok_or_else(|| TestError::Fixture("invalid revised date".to_string()))?;

        Ok(
            entity::prelude::TrainDia::insert(entity::train_dia::ActiveModel {
                train_class_id: ActiveValue::Set(train_class_id),
                train_id: ActiveValue::Set(train_id.to_string()),
                is_up: ActiveValue::Set(false),
                revised_date: ActiveValue::Set(revised_date),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts an `HSR` train class offering one "Ordinary" sheet class and a dia of it.
    pub async fn insert_mock_train_dia(
        &self,
        train_id: &str,
    ) -> Result<
        (
            entity::train_class::Model,
            entity::sheet_class::Model,
            entity::train_dia::Model,
        ),
        TestError,
    > {
        let sheet_class = self.insert_sheet_class("Ordinary").await?;
        let train_class = self
            .insert_train_class(BasicType::HighSpeedRailway, "Nozomi")
            .await?;
        self.link_sheet_class(train_class.id, sheet_class.id)
            .await?;
        let train_dia = self.insert_train_dia(train_class.id, train_id).await?;

        Ok((train_class, sheet_class, train_dia))
    }
}
