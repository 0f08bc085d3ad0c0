use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> UserFixtures<'a> {
    pub async fn insert_user(&self, username: &str) -> Result<entity::auth_user::Model, TestError> {
        Ok(
            entity::prelude::AuthUser::insert(entity::auth_user::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_profile(
        &self,
        user_id: i32,
        private: bool,
        default_accept: bool,
    ) -> Result<entity::einhorn_profile::Model, TestError> {
        Ok(
            entity::prelude::EinhornProfile::insert(entity::einhorn_profile::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                profile_url: ActiveValue::Set(String::new()),
                private: ActiveValue::Set(private),
                default_accept: ActiveValue::Set(default_accept),
                total_kilo: ActiveValue::Set(None),
                unique_kilo: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_user_with_profile(
        &self,
        username: &str,
        private: bool,
        default_accept: bool,
    ) -> Result<(entity::auth_user::Model, entity::einhorn_profile::Model), TestError> {
        let user = self.insert_user(username).await?;
        let profile = self.insert_profile(user.id, private, default_accept).await?;

        Ok((user, profile))
    }
}
