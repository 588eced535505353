//! Compute a provider's open time within a working day.
//!
//! Uses the same filtering as the conflict evaluator (occupying statuses on
//! the requested date, malformed records skipped), clips occupied intervals
//! to the working window, merges overlapping or adjacent busy periods, and
//! returns the gaps sorted by start time.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::booking::Booking;
use crate::conflict;
use crate::error::{Result, SlotError};
use crate::time;

/// An open stretch of a provider's working day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub duration_minutes: i64,
}

/// Free windows between a provider's occupying bookings on one date,
/// within the `[day_start, day_end)` working window.
///
/// # Errors
/// Returns `SlotError::InvalidDate` when `date` does not parse and
/// `SlotError::EmptyWindow` when `day_start` is not before `day_end`.
pub fn free_windows(
    bookings: &[Booking],
    date: &str,
    day_start: NaiveTime,
    day_end: NaiveTime,
) -> Result<Vec<FreeWindow>> {
    if day_start >= day_end {
        return Err(SlotError::EmptyWindow);
    }
    let date =
        time::parse_service_date(date).ok_or_else(|| SlotError::InvalidDate(date.to_string()))?;

    let window_start = time::anchored(day_start);
    let window_end = time::anchored(day_end);

    // Occupied intervals on the date, clipped to the window. Intervals
    // entirely outside the window are discarded.
    let mut intervals: Vec<(NaiveDateTime, NaiveDateTime)> = bookings
        .iter()
        .filter(|b| b.status.is_occupying())
        .filter(|b| time::parse_service_date(&b.scheduled_date) == Some(date))
        .filter_map(conflict::occupied_interval)
        .filter(|&(s, e)| s < window_end && e > window_start)
        .map(|(s, e)| (s.max(window_start), e.min(window_end)))
        .collect();

    intervals.sort_by_key(|&(s, e)| (s, e));

    // Merge overlapping or adjacent busy periods.
    let mut merged: Vec<(NaiveDateTime, NaiveDateTime)> = Vec::new();
    for (s, e) in intervals {
        if let Some(last) = merged.last_mut() {
            if s <= last.1 {
                last.1 = last.1.max(e);
                continue;
            }
        }
        merged.push((s, e));
    }

    let mut windows = Vec::new();
    let mut cursor = window_start;
    for (busy_start, busy_end) in &merged {
        if cursor < *busy_start {
            windows.push(window(cursor, *busy_start));
        }
        cursor = cursor.max(*busy_end);
    }

    // Trailing gap after the last busy period.
    if cursor < window_end {
        windows.push(window(cursor, window_end));
    }

    Ok(windows)
}

/// First free window long enough to hold `duration_hours`.
///
/// # Errors
/// Same as [`free_windows`], plus `SlotError::InvalidDuration` when the
/// requested duration is not a positive finite number.
pub fn first_fit(
    bookings: &[Booking],
    date: &str,
    day_start: NaiveTime,
    day_end: NaiveTime,
    duration_hours: f64,
) -> Result<Option<FreeWindow>> {
    if !duration_hours.is_finite() || duration_hours <= 0.0 {
        return Err(SlotError::InvalidDuration {
            hours: duration_hours,
        });
    }
    let needed_minutes = (duration_hours * 60.0).ceil() as i64;
    Ok(free_windows(bookings, date, day_start, day_end)?
        .into_iter()
        .find(|w| w.duration_minutes >= needed_minutes))
}

fn window(start: NaiveDateTime, end: NaiveDateTime) -> FreeWindow {
    FreeWindow {
        start: start.time(),
        end: end.time(),
        duration_minutes: (end - start).num_minutes(),
    }
}
