use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, JoinType, ModelTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

pub struct SheetClassRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SheetClassRepository<'a, C> {
    /// Creates a new instance of [`SheetClassRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a sheet class offered by the provided companies
    pub async fn create(
        &self,
        name: &str,
        company_ids: &[i32],
    ) -> Result<entity::sheet_class::Model, DbErr> {
        let sheet_class = entity::sheet_class::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        if !company_ids.is_empty() {
            let links = company_ids
                .iter()
                .map(|company_id| entity::sheet_class_company::ActiveModel {
                    sheet_class_id: ActiveValue::Set(sheet_class.id),
                    company_id: ActiveValue::Set(*company_id),
                });

            entity::prelude::SheetClassCompany::insert_many(links)
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(sheet_class)
    }

    pub async fn get(
        &self,
        sheet_class_id: i32,
    ) -> Result<Option<entity::sheet_class::Model>, DbErr> {
        entity::prelude::SheetClass::find_by_id(sheet_class_id)
            .one(self.db)
            .await
    }

    /// Companies offering the sheet class
    pub async fn get_companies(
        &self,
        sheet_class: &entity::sheet_class::Model,
    ) -> Result<Vec<entity::traindb_company::Model>, DbErr> {
        sheet_class
            .find_related(entity::prelude::TraindbCompany)
            .order_by_asc(entity::traindb_company::Column::Id)
            .all(self.db)
            .await
    }

    /// Sheet classes listed by a train class
    pub async fn get_by_train_class(
        &self,
        train_class_id: i32,
    ) -> Result<Vec<entity::sheet_class::Model>, DbErr> {
        entity::prelude::SheetClass::find()
            .join(
                JoinType::InnerJoin,
                entity::sheet_class::Relation::TrainClassSheetClass.def(),
            )
            .filter(entity::train_class_sheet_class::Column::TrainClassId.eq(train_class_id))
            .order_by_asc(entity::sheet_class::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update_name(
        &self,
        sheet_class_id: i32,
        name: &str,
    ) -> Result<Option<entity::sheet_class::Model>, DbErr> {
        let sheet_class = match self.get(sheet_class_id).await? {
            Some(sheet_class) => sheet_class,
            None => return Ok(None),
        };

        let mut sheet_class_am = sheet_class.into_active_model();
        sheet_class_am.name = ActiveValue::Set(name.to_string());

        Ok(Some(sheet_class_am.update(self.db).await?))
    }

    /// Deletes a sheet class
    ///
    /// Fails with a foreign key violation while a train log still references the sheet class.
    pub async fn delete(&self, sheet_class_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::SheetClass::delete_by_id(sheet_class_id)
            .exec(self.db)
            .await
    }
}
