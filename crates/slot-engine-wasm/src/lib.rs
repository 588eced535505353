//! WASM bindings for slot-engine.
//!
//! Exposes slot-conflict checks, contact-privacy decisions, and free-window
//! computation to the JavaScript dashboards via `wasm-bindgen`. Booking
//! lists cross the boundary as JSON strings in the same record shape the
//! dashboards already fetch from the REST API; results come back as JSON.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/slot-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use chrono::{NaiveDate, NaiveTime};
use slot_engine::booking::{Booking, SlotRequest, ViewerRole};
use slot_engine::{availability, conflict, privacy, time};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers: parse boundary inputs, fail with a JsValue message
// ---------------------------------------------------------------------------

fn parse_bookings_json(json: &str) -> Result<Vec<Booking>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid bookings JSON: {}", e)))
}

fn parse_date(s: &str) -> Result<NaiveDate, JsValue> {
    time::parse_service_date(s)
        .ok_or_else(|| JsValue::from_str(&format!("Invalid date '{}': expected YYYY-MM-DD", s)))
}

fn parse_time(s: &str) -> Result<NaiveTime, JsValue> {
    time::parse_time_of_day(s)
        .ok_or_else(|| JsValue::from_str(&format!("Invalid time '{}': expected HH:MM", s)))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Whether any occupying booking collides with the candidate slot.
///
/// `bookings_json` must be a JSON array of booking records
/// (`{id, scheduledDate, scheduledTime, durationHours, status}`; unknown
/// extra fields are ignored). Malformed individual records are skipped, as
/// in the core evaluator.
#[wasm_bindgen(js_name = "isSlotBusy")]
pub fn is_slot_busy(
    bookings_json: &str,
    date: &str,
    start_time: &str,
    duration_hours: f64,
) -> Result<bool, JsValue> {
    let bookings = parse_bookings_json(bookings_json)?;
    let request = SlotRequest {
        date: date.to_string(),
        start_time: start_time.to_string(),
        duration_hours,
    };

    conflict::is_slot_busy(&bookings, &request).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Every occupying booking that collides with the candidate slot.
///
/// Returns a JSON array of `{bookingId, start, end, overlapMinutes}`
/// objects, in the order the bookings were supplied.
#[wasm_bindgen(js_name = "findSlotConflicts")]
pub fn find_slot_conflicts(
    bookings_json: &str,
    date: &str,
    start_time: &str,
    duration_hours: f64,
) -> Result<String, JsValue> {
    let bookings = parse_bookings_json(bookings_json)?;
    let request = SlotRequest {
        date: date.to_string(),
        start_time: start_time.to_string(),
        duration_hours,
    };

    let conflicts = conflict::find_slot_conflicts(&bookings, &request)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    to_json(&conflicts)
}

/// Decide contact-detail visibility for a viewer.
///
/// `role` is the wire role string (`ADMIN`, `CUSTOMER`, `PROVIDER`);
/// anything else fails closed rather than erroring, as does an unparseable
/// `scheduled_date`. `today` is the viewer's current calendar date and must
/// be well-formed — the caller owns the clock. Returns a JSON
/// `{visible, reason}` object.
#[wasm_bindgen(js_name = "checkContactVisibility")]
pub fn check_contact_visibility(
    scheduled_date: &str,
    role: &str,
    today: &str,
) -> Result<String, JsValue> {
    let today = parse_date(today)?;
    let decision =
        privacy::check_contact_visibility_raw(scheduled_date, ViewerRole::from_wire(role), today);

    to_json(&decision)
}

/// Render a contact field under a visibility decision.
///
/// The real value is returned only when `visible` is true; a hidden field
/// always renders as the protected placeholder.
#[wasm_bindgen(js_name = "formatProtectedField")]
pub fn format_protected_field(value: Option<String>, visible: bool) -> String {
    privacy::format_protected_field(value.as_deref(), visible)
}

/// Free windows between occupying bookings on one date, within the
/// `[day_start, day_end)` working window.
///
/// Returns a JSON array of `{start, end, durationMinutes}` objects.
#[wasm_bindgen(js_name = "freeWindows")]
pub fn free_windows(
    bookings_json: &str,
    date: &str,
    day_start: &str,
    day_end: &str,
) -> Result<String, JsValue> {
    let bookings = parse_bookings_json(bookings_json)?;
    let start = parse_time(day_start)?;
    let end = parse_time(day_end)?;

    let windows = availability::free_windows(&bookings, date, start, end)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    to_json(&windows)
}
