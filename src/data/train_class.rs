use entity::train_class::BasicType;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

pub struct TrainClassRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrainClassRepository<'a, C> {
    /// Creates a new instance of [`TrainClassRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a train class without any sheet class or company links
    pub async fn create(
        &self,
        basic_type: BasicType,
        specific_type: &str,
        name: &str,
    ) -> Result<entity::train_class::Model, DbErr> {
        let train_class = entity::train_class::ActiveModel {
            basic_type: ActiveValue::Set(basic_type),
            specific_type: ActiveValue::Set(specific_type.to_string()),
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        train_class.insert(self.db).await
    }

    pub async fn get(
        &self,
        train_class_id: i32,
    ) -> Result<Option<entity::train_class::Model>, DbErr> {
        entity::prelude::TrainClass::find_by_id(train_class_id)
            .one(self.db)
            .await
    }

    /// IDs of the sheet classes the train class offers, in ascending order
    pub async fn get_sheet_class_ids(&self, train_class_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::TrainClassSheetClass::find()
            .select_only()
            .column(entity::train_class_sheet_class::Column::SheetClassId)
            .filter(entity::train_class_sheet_class::Column::TrainClassId.eq(train_class_id))
            .order_by_asc(entity::train_class_sheet_class::Column::SheetClassId)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Replaces the sheet classes the train class offers
    pub async fn set_sheet_classes(
        &self,
        train_class_id: i32,
        sheet_class_ids: &[i32],
    ) -> Result<(), DbErr> {
        entity::prelude::TrainClassSheetClass::delete_many()
            .filter(entity::train_class_sheet_class::Column::TrainClassId.eq(train_class_id))
            .exec(self.db)
            .await?;

        if sheet_class_ids.is_empty() {
            return Ok(());
        }

        let links = sheet_class_ids
            .iter()
            .map(|sheet_class_id| entity::train_class_sheet_class::ActiveModel {
                train_class_id: ActiveValue::Set(train_class_id),
                sheet_class_id: ActiveValue::Set(*sheet_class_id),
            });

        entity::prelude::TrainClassSheetClass::insert_many(links)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Replaces the companies operating the train class
    pub async fn set_companies(
        &self,
        train_class_id: i32,
        company_ids: &[i32],
    ) -> Result<(), DbErr> {
        entity::prelude::TrainClassCompany::delete_many()
            .filter(entity::train_class_company::Column::TrainClassId.eq(train_class_id))
            .exec(self.db)
            .await?;

        if company_ids.is_empty() {
            return Ok(());
        }

        let links = company_ids
            .iter()
            .map(|company_id| entity::train_class_company::ActiveModel {
                train_class_id: ActiveValue::Set(train_class_id),
                company_id: ActiveValue::Set(*company_id),
            });

        entity::prelude::TrainClassCompany::insert_many(links)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a train class
    ///
    /// Fails with a foreign key violation while any train dia of the class exists.
    pub async fn delete(&self, train_class_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::TrainClass::delete_by_id(train_class_id)
            .exec(self.db)
            .await
    }
}
