// Date utility functions
// Clock notations ("9:00", "00:30") and zone-aware day boundaries

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{LayoutError, LayoutResult};

/// Parse a time of day written as `H:MM` or `HH:MM` (e.g. "9:00", "18:30").
pub fn parse_time_of_day(value: &str) -> LayoutResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|e| LayoutError::InvalidConfig(format!("invalid time of day '{}': {}", value, e)))
}

/// Parse a clock-style duration `H:MM` (e.g. "00:30", "1:00").
pub fn parse_clock_duration(value: &str) -> LayoutResult<Duration> {
    let invalid = || LayoutError::InvalidConfig(format!("invalid duration '{}'", value));

    let (hours, minutes) = value.trim().split_once(':').ok_or_else(invalid)?;
    let hours: i64 = hours.parse().map_err(|_| invalid())?;
    let minutes: i64 = minutes.parse().map_err(|_| invalid())?;

    if hours < 0 || !(0..60).contains(&minutes) {
        return Err(invalid());
    }

    Ok(Duration::hours(hours) + Duration::minutes(minutes))
}

/// Format a duration back into `H:MM`. Seconds are dropped.
pub fn format_clock_duration(duration: Duration) -> String {
    let total_minutes = duration.num_minutes();
    format!("{}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// Resolve a wall-clock time in `zone` to an absolute instant.
///
/// On a DST overlap the earlier instant wins; a wall clock skipped by a
/// DST gap is an error.
pub fn localize(zone: &Tz, naive: NaiveDateTime) -> LayoutResult<DateTime<Utc>> {
    zone.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or(LayoutError::NonexistentLocalTime(naive))
}

/// Instant at which `time` occurs on `date` in `zone`.
pub fn at_time_on(zone: &Tz, date: NaiveDate, time: NaiveTime) -> LayoutResult<DateTime<Utc>> {
    localize(zone, date.and_time(time))
}

/// Calendar date of an instant on the wall clock of `zone`.
pub fn local_date(zone: &Tz, instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(zone).date_naive()
}

/// Duration from whole milliseconds of a fractional number of `unit`s.
///
/// Non-finite factors and results beyond the range of `Duration` are
/// `OutOfRange`.
pub fn scale_duration(unit: Duration, factor: f64) -> LayoutResult<Duration> {
    let millis = (unit.num_milliseconds() as f64 * factor).round();
    if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
        return Err(LayoutError::OutOfRange(format!(
            "{} × {} is not a representable duration",
            factor, unit
        )));
    }
    millis_to_duration(millis as i64)
}

/// `count` whole `unit`s, or `OutOfRange` on overflow.
pub fn multiply_duration(unit: Duration, count: i64) -> LayoutResult<Duration> {
    unit.num_milliseconds()
        .checked_mul(count)
        .ok_or_else(|| {
            LayoutError::OutOfRange(format!("{} × {} overflows", count, unit))
        })
        .and_then(millis_to_duration)
}

/// Instant `by` after `instant`, or `OutOfRange` past the calendar limits.
pub fn offset_instant(instant: DateTime<Utc>, by: Duration) -> LayoutResult<DateTime<Utc>> {
    instant.checked_add_signed(by).ok_or_else(|| {
        LayoutError::OutOfRange(format!("{} + {} is past the supported dates", instant, by))
    })
}

fn millis_to_duration(millis: i64) -> LayoutResult<Duration> {
    Duration::try_milliseconds(millis)
        .ok_or_else(|| LayoutError::OutOfRange(format!("{} ms is not a valid duration", millis)))
}

/// How many `unit`s fit in `span` (fractional).
pub fn ratio(span: Duration, unit: Duration) -> f64 {
    span.num_milliseconds() as f64 / unit.num_milliseconds() as f64
}
