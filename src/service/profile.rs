use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        profile::{ProfileRepository, UserList},
        user::UserRepository,
    },
    error::{record::RecordError, Error},
    model::{db::ProfileModel, profile::ProfileSettings},
    util::validate,
};

/// Where a viewer appears on the record owner's profile lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Listing {
    Unlisted,
    Accepted,
    Denied,
}

/// Decides whether `viewer_id` may see the records of `owner_id`.
///
/// Rules apply in order: the owner always sees their own records, a denied viewer is refused,
/// an accepted viewer is allowed, a public profile (or no profile at all) is visible to
/// everyone, an anonymous viewer of a private profile is refused, and otherwise the profile's
/// `default_accept` decides.
pub fn is_visible(
    profile: Option<&ProfileModel>,
    owner_id: i32,
    viewer_id: Option<i32>,
    listing: Listing,
) -> bool {
    if viewer_id == Some(owner_id) {
        return true;
    }

    match listing {
        Listing::Denied => return false,
        Listing::Accepted => return true,
        Listing::Unlisted => (),
    }

    let profile = match profile {
        Some(profile) if profile.private => profile,
        _ => return true,
    };

    match viewer_id {
        Some(_) => profile.default_accept,
        None => false,
    }
}

/// Service managing profiles, their visibility settings and accept/deny lists.
pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    /// Creates a new instance of [`ProfileService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the user's profile, creating a public one if it does not exist yet.
    ///
    /// # Returns
    /// - `Ok(ProfileModel)` - Existing or newly created profile
    /// - `Err(Error::RecordError(RecordError::NotFound))` - User does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_or_create_profile(&self, user_id: i32) -> Result<ProfileModel, Error> {
        if UserRepository::new(self.db).get(user_id).await?.is_none() {
            return Err(RecordError::not_found("user", user_id).into());
        }

        Ok(ProfileRepository::new(self.db).get_or_create(user_id).await?)
    }

    /// Updates the user editable profile settings.
    ///
    /// The kilo caches are left untouched.
    pub async fn update_settings(
        &self,
        user_id: i32,
        settings: ProfileSettings,
    ) -> Result<ProfileModel, Error> {
        validate::profile_url(&settings.profile_url)?;

        let profile = self.get_or_create_profile(user_id).await?;
        let profile = ProfileRepository::new(self.db)
            .update_settings(profile.id, &settings)
            .await?
            .ok_or_else(|| RecordError::not_found("profile", profile.id))?;

        tracing::debug!(user_id = %user_id, private = profile.private, "Updated profile settings");

        Ok(profile)
    }

    /// Allows `other_user_id` to view the user's records, removing them from the deny list.
    pub async fn accept_user(&self, user_id: i32, other_user_id: i32) -> Result<(), Error> {
        self.move_to_list(user_id, other_user_id, UserList::Accept)
            .await
    }

    /// Refuses `other_user_id` from viewing the user's records, removing them from the accept
    /// list.
    pub async fn deny_user(&self, user_id: i32, other_user_id: i32) -> Result<(), Error> {
        self.move_to_list(user_id, other_user_id, UserList::Deny)
            .await
    }

    /// Removes `other_user_id` from both lists.
    ///
    /// # Returns
    /// - `Ok(true)` - The user was on one of the lists
    /// - `Ok(false)` - The user was on neither list or no profile exists
    pub async fn clear_user(&self, user_id: i32, other_user_id: i32) -> Result<bool, Error> {
        let profile = match ProfileRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?
        {
            Some(profile) => profile,
            None => return Ok(false),
        };

        let txn = self.db.begin().await?;
        let profile_repo = ProfileRepository::new(&txn);
        let accepted = profile_repo
            .remove_user(UserList::Accept, profile.id, other_user_id)
            .await?;
        let denied = profile_repo
            .remove_user(UserList::Deny, profile.id, other_user_id)
            .await?;

        txn.commit().await?;

        Ok(accepted.rows_affected + denied.rows_affected > 0)
    }

    /// Whether `viewer_id` may see the records of `owner_id`, `None` being an anonymous viewer.
    ///
    /// See [`is_visible`] for the rules applied.
    pub async fn can_view(&self, owner_id: i32, viewer_id: Option<i32>) -> Result<bool, Error> {
        let profile_repo = ProfileRepository::new(self.db);
        let profile = profile_repo.get_by_user_id(owner_id).await?;

        let listing = match (&profile, viewer_id) {
            (Some(profile), Some(viewer_id)) if viewer_id != owner_id => {
                if profile_repo
                    .is_listed(UserList::Deny, profile.id, viewer_id)
                    .await?
                {
                    Listing::Denied
                } else if profile_repo
                    .is_listed(UserList::Accept, profile.id, viewer_id)
                    .await?
                {
                    Listing::Accepted
                } else {
                    Listing::Unlisted
                }
            }
            _ => Listing::Unlisted,
        };

        Ok(is_visible(profile.as_ref(), owner_id, viewer_id, listing))
    }

    /// Puts `other_user_id` on `list` and takes them off the opposite list.
    async fn move_to_list(
        &self,
        user_id: i32,
        other_user_id: i32,
        list: UserList,
    ) -> Result<(), Error> {
        let (target, opposite, name) = match list {
            UserList::Accept => (UserList::Accept, UserList::Deny, "accept"),
            UserList::Deny => (UserList::Deny, UserList::Accept, "deny"),
        };

        if user_id == other_user_id {
            return Err(RecordError::SelfReference(user_id, name).into());
        }

        let user_repo = UserRepository::new(self.db);
        for id in [user_id, other_user_id] {
            if user_repo.get(id).await?.is_none() {
                return Err(RecordError::not_found("user", id).into());
            }
        }

        let txn = self.db.begin().await?;
        let profile_repo = ProfileRepository::new(&txn);
        let profile = profile_repo.get_or_create(user_id).await?;
        profile_repo
            .remove_user(opposite, profile.id, other_user_id)
            .await?;
        profile_repo
            .add_user(target, profile.id, other_user_id)
            .await?;

        txn.commit().await?;

        tracing::debug!(
            user_id = %user_id,
            other_user_id = %other_user_id,
            "Added user to {} list",
            name
        );

        Ok(())
    }
}
