//! Factory functions for in-memory models.
//!
//! These build entity models with standard test values without touching the database,
//! for unit tests of pure logic.

use sea_orm::prelude::Decimal;

/// Create a profile model with empty caches.
pub fn mock_profile_model(
    user_id: i32,
    private: bool,
    default_accept: bool,
) -> entity::einhorn_profile::Model {
    entity::einhorn_profile::Model {
        id: user_id,
        user_id,
        profile_url: String::new(),
        private,
        default_accept,
        total_kilo: None,
        unique_kilo: None,
    }
}

/// Create a profile model carrying cached kilo values, given in tenths of a kilometre.
pub fn mock_profile_model_with_kilo(
    user_id: i32,
    total_tenths: i64,
    unique_tenths: i64,
) -> entity::einhorn_profile::Model {
    entity::einhorn_profile::Model {
        total_kilo: Some(Decimal::new(total_tenths, 1)),
        unique_kilo: Some(Decimal::new(unique_tenths, 1)),
        ..mock_profile_model(user_id, false, false)
    }
}
