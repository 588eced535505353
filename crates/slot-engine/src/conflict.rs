//! Decide whether a candidate slot collides with a provider's bookings.
//!
//! Only `CONFIRMED` and `IN_PROGRESS` bookings occupy time, and only
//! bookings on the candidate's own date are considered. Intervals are
//! half-open: a booking that ends exactly when another starts is NOT a
//! conflict, so back-to-back bookings are allowed.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::booking::{Booking, SlotRequest};
use crate::error::{Result, SlotError};
use crate::time;

/// A booking found to collide with a candidate slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotConflict {
    /// Identifier of the colliding booking.
    pub booking_id: String,
    /// When the colliding booking starts, as a time of day.
    pub start: NaiveTime,
    /// When it ends. A booking running past midnight reports the wrapped
    /// time of day.
    pub end: NaiveTime,
    /// How long the two intervals share, in whole minutes.
    pub overlap_minutes: i64,
}

/// Find every occupying booking whose time range overlaps the candidate.
///
/// Bookings are filtered to the candidate's date and to occupying statuses
/// before any time arithmetic. Records with a missing or malformed time or
/// duration are skipped: they come from an external API and one bad record
/// must not abort the scan.
///
/// Two intervals `[a, b)` and `[c, d)` overlap iff `a < d && c < b`.
/// Touching endpoints do not count as overlap.
///
/// # Errors
/// Returns `SlotError::InvalidDuration` when the candidate duration is not
/// a positive finite number, and `SlotError::InvalidDate` /
/// `SlotError::InvalidTime` when the candidate date or start time does not
/// parse. Candidate fields are caller-built, so these surface as errors
/// rather than being skipped.
pub fn find_slot_conflicts(
    bookings: &[Booking],
    request: &SlotRequest,
) -> Result<Vec<SlotConflict>> {
    if !request.duration_hours.is_finite() || request.duration_hours <= 0.0 {
        return Err(SlotError::InvalidDuration {
            hours: request.duration_hours,
        });
    }
    let date = time::parse_service_date(&request.date)
        .ok_or_else(|| SlotError::InvalidDate(request.date.clone()))?;
    let start = time::parse_time_of_day(&request.start_time)
        .ok_or_else(|| SlotError::InvalidTime(request.start_time.clone()))?;
    let (cand_start, cand_end) = time::anchored_interval(start, request.duration_hours)
        .ok_or(SlotError::InvalidDuration {
            hours: request.duration_hours,
        })?;

    let mut conflicts = Vec::new();
    for booking in bookings {
        if !booking.status.is_occupying() {
            continue;
        }
        if time::parse_service_date(&booking.scheduled_date) != Some(date) {
            continue;
        }
        let Some((start, end)) = occupied_interval(booking) else {
            continue;
        };
        // Half-open intersection; end == cand_start is adjacency, not overlap.
        if start < cand_end && cand_start < end {
            let overlap_start = start.max(cand_start);
            let overlap_end = end.min(cand_end);
            conflicts.push(SlotConflict {
                booking_id: booking.id.clone(),
                start: start.time(),
                end: end.time(),
                overlap_minutes: (overlap_end - overlap_start).num_minutes(),
            });
        }
    }
    Ok(conflicts)
}

/// Whether any occupying booking collides with the candidate slot.
///
/// `false` when `bookings` is empty or nothing passes the date and status
/// filters.
///
/// # Errors
/// Same as [`find_slot_conflicts`].
pub fn is_slot_busy(bookings: &[Booking], request: &SlotRequest) -> Result<bool> {
    Ok(!find_slot_conflicts(bookings, request)?.is_empty())
}

/// Anchored occupied interval of a single booking, or `None` when the
/// record's time or duration is missing or malformed.
pub(crate) fn occupied_interval(booking: &Booking) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let start = time::parse_time_of_day(booking.scheduled_time.as_deref()?)?;
    time::anchored_interval(start, booking.duration_hours?)
}
