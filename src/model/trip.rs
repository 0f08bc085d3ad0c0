use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTripLog {
    #[serde(default)]
    pub memo: String,
    #[serde(default)]
    pub partner_ids: Vec<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTrainLog {
    pub train_dia_id: i32,
    pub sheet_class_id: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSegmentLog {
    pub line_id: i32,
    pub start_station_id: i32,
    pub end_station_id: i32,
    #[serde(default)]
    pub memo: String,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    /// Optional fields may be omitted by the caller
    #[test]
    fn deserializes_with_blank_defaults() -> Result<(), serde_json::Error> {
        let trip: NewTripLog = serde_json::from_str("{}")?;
        assert_eq!(trip, NewTripLog::default());

        let segment: NewSegmentLog = serde_json::from_str(
            r#"{"line_id": 1, "start_station_id": 2, "end_station_id": 3}"#,
        )?;
        assert_eq!(segment.memo, "");

        let train: NewTrainLog = serde_json::from_str(
            r#"{"train_dia_id": 1, "sheet_class_id": 2, "start_date": "2024-03-01", "end_date": null}"#,
        )?;
        assert_eq!(train.start_date, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(train.end_date, None);

        Ok(())
    }
}
