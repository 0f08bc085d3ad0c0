//! Database model type aliases.
//!
//! Short names for the SeaORM entity models so service signatures stay readable without
//! importing from the `entity` crate everywhere.

pub type UserModel = entity::auth_user::Model;

/// Profile with visibility settings and the cached `total_kilo`/`unique_kilo` values.
pub type ProfileModel = entity::einhorn_profile::Model;

pub type SheetClassModel = entity::sheet_class::Model;

pub type TrainClassModel = entity::train_class::Model;

pub type TrainDiaModel = entity::train_dia::Model;

pub type TrainDiaSegmentModel = entity::train_dia_segment::Model;

/// Trip with the cached `start_date`/`end_date` derived from its train logs.
pub type TripLogModel = entity::trip_log::Model;

pub type TrainLogModel = entity::train_log::Model;

pub type SegmentLogModel = entity::segment_log::Model;

pub type LineStationModel = entity::traindb_line_station::Model;
