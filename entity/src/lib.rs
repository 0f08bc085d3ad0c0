pub mod prelude;

pub mod auth_user;
pub mod einhorn_profile;
pub mod einhorn_profile_accept_user;
pub mod einhorn_profile_deny_user;
pub mod segment_log;
pub mod sheet_class;
pub mod sheet_class_company;
pub mod train_class;
pub mod train_class_company;
pub mod train_class_sheet_class;
pub mod train_dia;
pub mod train_dia_segment;
pub mod train_log;
pub mod traindb_company;
pub mod traindb_line;
pub mod traindb_line_station;
pub mod traindb_station;
pub mod trip_log;
pub mod trip_log_partner;
