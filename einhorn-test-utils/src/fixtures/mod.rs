//! Fixtures inserting records into the test database.
//!
//! - `user` - users and their profiles
//! - `traindb` - companies, lines, stations and kilo positions
//! - `timetable` - sheet classes, train classes and train dias
//! - `trip` - trip, train and segment logs
//! - `factory` - in-memory models for tests that need no database

pub mod factory;
pub mod timetable;
pub mod traindb;
pub mod trip;
pub mod user;
