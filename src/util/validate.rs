//! Field constraints of the riding log schema.
//!
//! Every write issued by the services passes through these checks first, so a violation
//! surfaces as a typed [`ValidationError`] instead of a database constraint failure.

use chrono::{NaiveDate, NaiveTime};
use sea_orm::prelude::Decimal;

use crate::error::validation::ValidationError;

/// Total digits of a kilo value, one of which is the decimal place.
pub const MAX_KILO_DIGITS: u32 = 6;
pub const KILO_DECIMAL_PLACES: u32 = 1;
pub const MAX_TRAIN_ID_LENGTH: usize = 16;
pub const MAX_TRAIN_CLASS_NAME_LENGTH: usize = 32;
pub const MAX_TRAIN_CLASS_TYPE_LENGTH: usize = 32;
pub const MAX_SHEET_CLASS_NAME_LENGTH: usize = 32;
pub const MAX_PROFILE_URL_LENGTH: usize = 200;

/// Rejects values longer than `max` characters.
pub fn max_length(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len > max {
        return Err(ValidationError::TooLong { field, len, max });
    }

    Ok(())
}

/// Rejects blank values for fields that have no empty default.
pub fn required(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty(field));
    }

    max_length(field, value, max)
}

/// Profile URLs may be empty, otherwise they must be absolute http(s) URLs.
pub fn profile_url(value: &str) -> Result<(), ValidationError> {
    max_length("profile_url", value, MAX_PROFILE_URL_LENGTH)?;

    if value.is_empty() {
        return Ok(());
    }

    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));

    match rest {
        Some(host) if !host.is_empty() && !host.starts_with('/') && !value.contains(' ') => {
            Ok(())
        }
        _ => Err(ValidationError::InvalidUrl(value.to_string())),
    }
}

pub fn distinct_stations(
    start_station_id: i32,
    end_station_id: i32,
) -> Result<(), ValidationError> {
    if start_station_id == end_station_id {
        return Err(ValidationError::SameStation(start_station_id));
    }

    Ok(())
}

/// Checks a segment's own departure/arrival pair.
///
/// `start_day` must not exceed `end_day`; on the same day the end time must not precede the
/// start time when both are known.
pub fn day_range(
    start_day: i32,
    end_day: i32,
    start_time: Option<NaiveTime>,
    end_time: Option<NaiveTime>,
) -> Result<(), ValidationError> {
    if start_day > end_day {
        return Err(ValidationError::DayOrder { start_day, end_day });
    }

    if let (Some(start), Some(end)) = (start_time, end_time) {
        if start_day == end_day && end < start {
            return Err(ValidationError::TimeOrder(start_day));
        }
    }

    Ok(())
}

/// Whether a segment departing at `next` may follow a segment arriving at `prev`.
///
/// Unknown times only compare by day.
pub fn follows(prev: (i32, Option<NaiveTime>), next: (i32, Option<NaiveTime>)) -> bool {
    match next.0.cmp(&prev.0) {
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Equal => match (prev.1, next.1) {
            (Some(arrival), Some(departure)) => departure >= arrival,
            _ => true,
        },
    }
}

pub fn date_range(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<(), ValidationError> {
    if let (Some(start), Some(end)) = (start_date, end_date) {
        if end < start {
            return Err(ValidationError::DateOrder);
        }
    }

    Ok(())
}

/// Rounds a kilo value to its stored precision and rejects values wider than the column.
///
/// The result always carries exactly one decimal place, integral inputs included.
pub fn kilo(value: Decimal) -> Result<Decimal, ValidationError> {
    let mut rounded = value.round_dp(KILO_DECIMAL_PLACES);
    rounded.rescale(KILO_DECIMAL_PLACES);
    let limit = Decimal::from(10_i64.pow(MAX_KILO_DIGITS - KILO_DECIMAL_PLACES));

    if rounded.abs() >= limit {
        return Err(ValidationError::KiloOverflow(rounded));
    }

    Ok(rounded)
}
