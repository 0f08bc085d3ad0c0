use sea_orm::prelude::Decimal;
use thiserror::Error;

/// Field constraint and invariant violations detected before a write.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field {field} is {len} characters long, the maximum is {max}")]
    TooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },
    #[error("Field {0} must not be empty")]
    Empty(&'static str),
    #[error("Unknown train basic type {0:?}, expected one of HSR, LTD, EXP, RPD or LOC")]
    InvalidBasicType(String),
    #[error("Profile URL {0:?} is not an http(s) URL")]
    InvalidUrl(String),
    #[error("Segment starts and ends at the same station ID {0}")]
    SameStation(i32),
    #[error("Segment ends on day {end_day} before it starts on day {start_day}")]
    DayOrder { start_day: i32, end_day: i32 },
    #[error("Segment ends before it starts on day {0}")]
    TimeOrder(i32),
    #[error("Segment departs before the previous segment of train dia ID {0} arrives")]
    SegmentOutOfOrder(i32),
    #[error("Train log ends before it starts")]
    DateOrder,
    #[error("Kilo value {0} does not fit in 6 digits with 1 decimal place")]
    KiloOverflow(Decimal),
    #[error("Sheet class ID {sheet_class_id} is not offered by train class ID {train_class_id}")]
    SheetClassNotOffered {
        sheet_class_id: i32,
        train_class_id: i32,
    },
}
