//! Everyday calendar questions answered with `chrono` value types.
//!
//! Dates, times and date-times are separate immutable types, so truncating
//! to a date or attaching a time never needs field-by-field resets.
//! Formats use strftime syntax (`%d/%m/%Y %H:%M:%S`).

use chrono::{
    DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc,
    Weekday,
};
use chrono_tz::Tz;

use crate::error::{DateTimeError, DateTimeResult};

pub fn a_date(year: i32, month: u32, day: u32) -> DateTimeResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(DateTimeError::InvalidDate { year, month, day })
}

pub fn parse_date(text: &str, format: &str) -> DateTimeResult<NaiveDate> {
    Ok(NaiveDate::parse_from_str(text, format)?)
}

pub fn parse_date_time(text: &str, format: &str) -> DateTimeResult<NaiveDateTime> {
    Ok(NaiveDateTime::parse_from_str(text, format)?)
}

pub fn parse_time(text: &str, format: &str) -> DateTimeResult<NaiveTime> {
    Ok(NaiveTime::parse_from_str(text, format)?)
}

pub fn truncate_to_date(date_time: NaiveDateTime) -> NaiveDate {
    date_time.date()
}

pub fn set_time(date: NaiveDate, time: &str, format: &str) -> DateTimeResult<NaiveDateTime> {
    Ok(date.and_time(parse_time(time, format)?))
}

/// Whole calendar days from `from` to `to`; negative when `to` is earlier.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

pub fn month_of(date: NaiveDate) -> u32 {
    date.month()
}

pub fn add_days(date: NaiveDate, days: i64) -> DateTimeResult<NaiveDate> {
    TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or(DateTimeError::OutOfRange)
}

pub fn shift_date(date: NaiveDate, period: Days) -> DateTimeResult<NaiveDate> {
    date.checked_add_days(period).ok_or(DateTimeError::OutOfRange)
}

/// Wraps around midnight.
pub fn shift_time(time: NaiveTime, by: TimeDelta) -> NaiveTime {
    time + by
}

pub fn is_leap_year(date: NaiveDate) -> bool {
    NaiveDate::from_ymd_opt(date.year(), 2, 29).is_some()
}

pub fn length_of_month(date: NaiveDate) -> u32 {
    (28..=31)
        .rev()
        .find(|&day| date.with_day(day).is_some())
        .unwrap_or(28)
}

/// First `weekday` strictly after `date`.
pub fn next_weekday(date: NaiveDate, weekday: Weekday) -> DateTimeResult<NaiveDate> {
    let ahead = (7 + weekday.num_days_from_monday() - date.weekday().num_days_from_monday()) % 7;
    let ahead = if ahead == 0 { 7 } else { ahead };
    shift_date(date, Days::new(u64::from(ahead)))
}

/// Reads a wall-clock date-time as local time in the IANA zone `zone`.
///
/// An ambiguous local time (clocks going back) resolves to the earlier
/// instant; one inside a gap is an error.
pub fn zoned(text: &str, format: &str, zone: &str) -> DateTimeResult<DateTime<Tz>> {
    let tz: Tz = zone
        .parse()
        .map_err(|_| DateTimeError::UnknownZone(zone.to_string()))?;
    let local = parse_date_time(text, format)?;
    tz.from_local_datetime(&local)
        .earliest()
        .ok_or_else(|| DateTimeError::NonexistentLocalTime { zone: zone.to_string() })
}

pub fn to_utc(date_time: DateTime<Tz>) -> DateTime<Utc> {
    date_time.with_timezone(&Utc)
}
