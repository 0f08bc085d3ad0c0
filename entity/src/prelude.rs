pub use super::auth_user::Entity as AuthUser;
pub use super::einhorn_profile::Entity as EinhornProfile;
pub use super::einhorn_profile_accept_user::Entity as EinhornProfileAcceptUser;
pub use super::einhorn_profile_deny_user::Entity as EinhornProfileDenyUser;
pub use super::segment_log::Entity as SegmentLog;
pub use super::sheet_class::Entity as SheetClass;
pub use super::sheet_class_company::Entity as SheetClassCompany;
pub use super::train_class::Entity as TrainClass;
pub use super::train_class_company::Entity as TrainClassCompany;
pub use super::train_class_sheet_class::Entity as TrainClassSheetClass;
pub use super::train_dia::Entity as TrainDia;
pub use super::train_dia_segment::Entity as TrainDiaSegment;
pub use super::train_log::Entity as TrainLog;
pub use super::traindb_company::Entity as TraindbCompany;
pub use super::traindb_line::Entity as TraindbLine;
pub use super::traindb_line_station::Entity as TraindbLineStation;
pub use super::traindb_station::Entity as TraindbStation;
pub use super::trip_log::Entity as TripLog;
pub use super::trip_log_partner::Entity as TripLogPartner;
