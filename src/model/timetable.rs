use chrono::{NaiveDate, NaiveTime};
use entity::train_class::BasicType;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTrainClass {
    /// One of `HSR`, `LTD`, `EXP`, `RPD` or `LOC`.
    pub basic_type: String,
    pub specific_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sheet_class_ids: Vec<i32>,
    #[serde(default)]
    pub company_ids: Vec<i32>,
}

impl NewTrainClass {
    /// Parses the basic type code into its enum value.
    pub fn basic_type(&self) -> Option<BasicType> {
        use sea_orm::ActiveEnum;

        BasicType::try_from_value(&self.basic_type).ok()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTrainDia {
    pub train_class_id: i32,
    pub train_id: String,
    pub is_up: bool,
    pub revised_date: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDiaSegment {
    pub start_station_id: i32,
    pub end_station_id: i32,
    pub start_day: i32,
    pub end_day: i32,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
}
