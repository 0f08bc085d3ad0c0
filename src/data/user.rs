use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    pub async fn create(&self, username: &str) -> Result<entity::auth_user::Model, DbErr> {
        let user = entity::auth_user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::auth_user::Model>, DbErr> {
        entity::prelude::AuthUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Returns the users that exist out of the provided IDs
    pub async fn get_many(&self, user_ids: &[i32]) -> Result<Vec<entity::auth_user::Model>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::AuthUser::find()
            .filter(entity::auth_user::Column::Id.is_in(user_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// IDs of every user, in ascending order
    pub async fn get_all_ids(&self) -> Result<Vec<i32>, DbErr> {
        entity::prelude::AuthUser::find()
            .select_only()
            .column(entity::auth_user::Column::Id)
            .order_by_asc(entity::auth_user::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Deletes a user along with their profile and trip logs
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::AuthUser::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod create {
        use einhorn_test_utils::prelude::*;

        use crate::data::user::UserRepository;

        /// Expect success when creating a new user
        #[tokio::test]
        async fn creates_user() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::AuthUser)?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.create("kaede").await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap().username, "kaede");

            Ok(())
        }

        /// Expect Error when creating a user whose username is already taken
        #[tokio::test]
        async fn fails_for_duplicate_username() -> Result<(), TestError> {
            let mut test = test_setup_with_tables!(entity::prelude::AuthUser)?;
            test.user().insert_user("kaede").await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.create("kaede").await;

            assert!(result.is_err());

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.create("kaede").await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_many {
        use einhorn_test_utils::prelude::*;

        use crate::data::user::UserRepository;

        /// Expect only existing users to be returned
        #[tokio::test]
        async fn skips_nonexistent_users() -> Result<(), TestError> {
            let mut test = test_setup_with_tables!(entity::prelude::AuthUser)?;
            let user_a = test.user().insert_user("kaede").await?;
            let user_b = test.user().insert_user("sora").await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo
                .get_many(&[user_a.id, user_b.id, user_b.id + 1])
                .await?;

            assert_eq!(result.len(), 2);

            Ok(())
        }

        /// Expect an empty list without querying when no IDs are provided
        #[tokio::test]
        async fn returns_empty_for_no_ids() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.get_many(&[]).await;

            assert!(matches!(result, Ok(users) if users.is_empty()));

            Ok(())
        }
    }

    mod delete {
        use einhorn_test_utils::prelude::*;
        use sea_orm::EntityTrait;

        use crate::data::user::UserRepository;

        /// Expect the user's profile and trip logs to be removed with the user
        #[tokio::test]
        async fn deletes_user_with_dependents() -> Result<(), TestError> {
            let mut test = test_setup_with_einhorn_tables!()?;
            let (user, profile) = test
                .user()
                .insert_user_with_profile("kaede", false, false)
                .await?;
            let trip = test.trip().insert_trip_log(user.id).await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.delete(user.id).await?;

            assert_eq!(result.rows_affected, 1);
            let profile_exists = entity::prelude::EinhornProfile::find_by_id(profile.id)
                .one(&test.db)
                .await?;
            assert!(profile_exists.is_none());
            let trip_exists = entity::prelude::TripLog::find_by_id(trip.id)
                .one(&test.db)
                .await?;
            assert!(trip_exists.is_none());

            Ok(())
        }

        /// Expect no rows to be affected when deleting user that does not exist
        #[tokio::test]
        async fn returns_no_rows_for_nonexistent_user() -> Result<(), TestError> {
            let test = test_setup_with_einhorn_tables!()?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.delete(1).await?;

            assert_eq!(result.rows_affected, 0);

            Ok(())
        }
    }
}
