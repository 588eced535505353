//! Shared time parsing and naive interval arithmetic.
//!
//! All scheduling arithmetic is naive local time: times of day are anchored
//! to a fixed reference date and compared there, with no timezone
//! conversion. The one zone-aware helper, [`local_date_in`], converts a UTC
//! instant to a calendar date in a caller-chosen zone and is the only place
//! a timezone enters the crate.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;

/// Parse a time-of-day string. Accepts `HH:MM` and `HH:MM:SS` (24h).
pub fn parse_time_of_day(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()
}

/// Parse a `YYYY-MM-DD` service date.
pub fn parse_service_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Anchor a bare time-of-day to the reference date.
pub(crate) fn anchored(t: NaiveTime) -> NaiveDateTime {
    DateTime::<Utc>::UNIX_EPOCH.date_naive().and_time(t)
}

/// Half-open occupied interval for a start time and duration, anchored to
/// the reference date.
///
/// The end may land past the anchor midnight (23:00 plus 2 hours);
/// comparisons stay correct because every interval shares the same anchor.
/// Returns `None` when the duration is not a positive finite number or the
/// arithmetic would overflow.
pub fn anchored_interval(
    start: NaiveTime,
    duration_hours: f64,
) -> Option<(NaiveDateTime, NaiveDateTime)> {
    if !duration_hours.is_finite() || duration_hours <= 0.0 {
        return None;
    }
    let start_dt = anchored(start);
    let duration = Duration::try_seconds((duration_hours * 3600.0).round() as i64)?;
    let end_dt = start_dt.checked_add_signed(duration)?;
    Some((start_dt, end_dt))
}

/// Calendar date of a UTC instant in the given zone.
///
/// The privacy window is day-granular, so a viewer's "now" must first be
/// resolved to a calendar date in whatever zone the deployment treats as
/// local. Keeping the zone a parameter here keeps it out of the evaluators.
pub fn local_date_in(now: DateTime<Utc>, tz: Tz) -> NaiveDate {
    now.with_timezone(&tz).date_naive()
}
