//! Pure helpers shared by the services.
//!
//! `validate` holds the field constraints of the schema, `kilo` the distance arithmetic
//! behind the profile kilo caches.

pub mod kilo;
pub mod validate;
