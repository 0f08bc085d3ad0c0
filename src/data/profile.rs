use migration::OnConflict;
use sea_orm::{
    prelude::Decimal, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QuerySelect,
};

use crate::model::profile::ProfileSettings;

/// Which of the profile's user lists an operation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserList {
    Accept,
    Deny,
}

pub struct ProfileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProfileRepository<'a, C> {
    /// Creates a new instance of [`ProfileRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a public profile with no URL and empty kilo caches
    pub async fn create(&self, user_id: i32) -> Result<entity::einhorn_profile::Model, DbErr> {
        blank_profile(user_id).insert(self.db).await
    }

    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::einhorn_profile::Model>, DbErr> {
        entity::prelude::EinhornProfile::find()
            .filter(entity::einhorn_profile::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Returns the user's profile, inserting a blank one if there is none yet
    ///
    /// The insert ignores a conflict on `user_id`, so a profile created concurrently by
    /// another writer is read back instead of failing on the unique index.
    pub async fn get_or_create(
        &self,
        user_id: i32,
    ) -> Result<entity::einhorn_profile::Model, DbErr> {
        if let Some(profile) = self.get_by_user_id(user_id).await? {
            return Ok(profile);
        }

        entity::prelude::EinhornProfile::insert(blank_profile(user_id))
            .on_conflict(
                OnConflict::column(entity::einhorn_profile::Column::UserId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        self.get_by_user_id(user_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("einhorn_profile for user {}", user_id)))
    }

    /// Updates the user editable settings of a profile
    ///
    /// Returns `None` if the profile does not exist.
    pub async fn update_settings(
        &self,
        profile_id: i32,
        settings: &ProfileSettings,
    ) -> Result<Option<entity::einhorn_profile::Model>, DbErr> {
        let profile = match entity::prelude::EinhornProfile::find_by_id(profile_id)
            .one(self.db)
            .await?
        {
            Some(profile) => profile,
            None => return Ok(None),
        };

        let mut profile_am = profile.into_active_model();
        profile_am.profile_url = ActiveValue::Set(settings.profile_url.clone());
        profile_am.private = ActiveValue::Set(settings.private);
        profile_am.default_accept = ActiveValue::Set(settings.default_accept);

        Ok(Some(profile_am.update(self.db).await?))
    }

    /// Overwrites the cached kilo values of a profile
    pub async fn update_kilo(
        &self,
        profile_id: i32,
        total_kilo: Option<Decimal>,
        unique_kilo: Option<Decimal>,
    ) -> Result<Option<entity::einhorn_profile::Model>, DbErr> {
        let profile = match entity::prelude::EinhornProfile::find_by_id(profile_id)
            .one(self.db)
            .await?
        {
            Some(profile) => profile,
            None => return Ok(None),
        };

        let mut profile_am = profile.into_active_model();
        profile_am.total_kilo = ActiveValue::Set(total_kilo);
        profile_am.unique_kilo = ActiveValue::Set(unique_kilo);

        Ok(Some(profile_am.update(self.db).await?))
    }

    /// Adds a user to one of the profile's lists
    ///
    /// Adding a user that is already listed is a no-op, the returned count is the number of
    /// rows inserted.
    pub async fn add_user(
        &self,
        list: UserList,
        profile_id: i32,
        user_id: i32,
    ) -> Result<u64, DbErr> {
        match list {
            UserList::Accept => {
                entity::prelude::EinhornProfileAcceptUser::insert(
                    entity::einhorn_profile_accept_user::ActiveModel {
                        profile_id: ActiveValue::Set(profile_id),
                        user_id: ActiveValue::Set(user_id),
                    },
                )
                .on_conflict(
                    OnConflict::columns([
                        entity::einhorn_profile_accept_user::Column::ProfileId,
                        entity::einhorn_profile_accept_user::Column::UserId,
                    ])
                    .do_nothing()
                    .to_owned(),
                )
                .exec_without_returning(self.db)
                .await
            }
            UserList::Deny => {
                entity::prelude::EinhornProfileDenyUser::insert(
                    entity::einhorn_profile_deny_user::ActiveModel {
                        profile_id: ActiveValue::Set(profile_id),
                        user_id: ActiveValue::Set(user_id),
                    },
                )
                .on_conflict(
                    OnConflict::columns([
                        entity::einhorn_profile_deny_user::Column::ProfileId,
                        entity::einhorn_profile_deny_user::Column::UserId,
                    ])
                    .do_nothing()
                    .to_owned(),
                )
                .exec_without_returning(self.db)
                .await
            }
        }
    }

    /// Removes a user from one of the profile's lists
    pub async fn remove_user(
        &self,
        list: UserList,
        profile_id: i32,
        user_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        match list {
            UserList::Accept => {
                entity::prelude::EinhornProfileAcceptUser::delete_by_id((profile_id, user_id))
                    .exec(self.db)
                    .await
            }
            UserList::Deny => {
                entity::prelude::EinhornProfileDenyUser::delete_by_id((profile_id, user_id))
                    .exec(self.db)
                    .await
            }
        }
    }

    /// IDs of the users on one of the profile's lists
    pub async fn get_user_ids(&self, list: UserList, profile_id: i32) -> Result<Vec<i32>, DbErr> {
        match list {
            UserList::Accept => {
                entity::prelude::EinhornProfileAcceptUser::find()
                    .select_only()
                    .column(entity::einhorn_profile_accept_user::Column::UserId)
                    .filter(entity::einhorn_profile_accept_user::Column::ProfileId.eq(profile_id))
                    .into_tuple::<i32>()
                    .all(self.db)
                    .await
            }
            UserList::Deny => {
                entity::prelude::EinhornProfileDenyUser::find()
                    .select_only()
                    .column(entity::einhorn_profile_deny_user::Column::UserId)
                    .filter(entity::einhorn_profile_deny_user::Column::ProfileId.eq(profile_id))
                    .into_tuple::<i32>()
                    .all(self.db)
                    .await
            }
        }
    }

    pub async fn is_listed(
        &self,
        list: UserList,
        profile_id: i32,
        user_id: i32,
    ) -> Result<bool, DbErr> {
        let count = match list {
            UserList::Accept => {
                entity::prelude::EinhornProfileAcceptUser::find_by_id((profile_id, user_id))
                    .count(self.db)
                    .await?
            }
            UserList::Deny => {
                entity::prelude::EinhornProfileDenyUser::find_by_id((profile_id, user_id))
                    .count(self.db)
                    .await?
            }
        };

        Ok(count > 0)
    }
}

fn blank_profile(user_id: i32) -> entity::einhorn_profile::ActiveModel {
    entity::einhorn_profile::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        profile_url: ActiveValue::Set(String::new()),
        private: ActiveValue::Set(false),
        default_accept: ActiveValue::Set(false),
        total_kilo: ActiveValue::Set(None),
        unique_kilo: ActiveValue::Set(None),
        ..Default::default()
    }
}
