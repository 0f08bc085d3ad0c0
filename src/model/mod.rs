//! Data models shared between the services and their callers.
//!
//! `db` aliases the SeaORM entity models; the remaining modules hold the input types an
//! external web layer deserializes and hands to the services.

pub mod db;
pub mod profile;
pub mod timetable;
pub mod trip;
