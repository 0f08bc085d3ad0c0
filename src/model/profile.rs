use serde::{Deserialize, Serialize};

/// User editable profile fields, the kilo caches are never part of an update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSettings {
    #[serde(default)]
    pub profile_url: String,
    pub private: bool,
    pub default_accept: bool,
}
