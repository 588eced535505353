//! The booking data model as delivered by the platform's REST API.
//!
//! Records arrive as JSON from an external service and are not fully
//! trusted: time and duration fields stay optional, and unknown status or
//! role strings fold into an `Unrecognized` variant instead of failing
//! deserialization of a whole response.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a booking.
///
/// Only `Confirmed` and `InProgress` occupy a provider's time. A pending
/// booking does not block a slot — time is reserved once a provider
/// accepts, not before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
    /// Any wire value not listed above. Never occupies a slot.
    #[serde(other)]
    Unrecognized,
}

impl BookingStatus {
    /// Whether this status reserves the provider's time.
    pub fn is_occupying(self) -> bool {
        matches!(self, BookingStatus::Confirmed | BookingStatus::InProgress)
    }
}

/// Role of the user asking a visibility question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViewerRole {
    Admin,
    Customer,
    Provider,
    /// Any wire value not listed above. Never granted access.
    #[serde(other)]
    Unrecognized,
}

impl ViewerRole {
    /// Map a bare wire string to a role. Anything unknown is `Unrecognized`.
    pub fn from_wire(s: &str) -> Self {
        match s {
            "ADMIN" => ViewerRole::Admin,
            "CUSTOMER" => ViewerRole::Customer,
            "PROVIDER" => ViewerRole::Provider,
            _ => ViewerRole::Unrecognized,
        }
    }
}

/// A booking record — the subset of the API's shape relevant to scheduling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Opaque identifier.
    pub id: String,
    /// Calendar date of the service, `YYYY-MM-DD`. Kept as the wire string
    /// and parsed at evaluation time, so one bad record cannot abort
    /// deserialization of the list it arrived in.
    pub scheduled_date: String,
    /// Start time of day, `HH:MM` 24h, naive local. A missing or malformed
    /// value excludes the record from conflict evaluation.
    #[serde(default)]
    pub scheduled_time: Option<String>,
    /// Length of the service in hours. Fractional values allowed.
    #[serde(default)]
    pub duration_hours: Option<f64>,
    pub status: BookingStatus,
}

/// A candidate slot being checked for feasibility.
///
/// Built by the caller rather than read from the API, so shape violations
/// here are programming errors and the evaluators surface them instead of
/// skipping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotRequest {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Start time of day, `HH:MM` 24h.
    pub start_time: String,
    /// Requested length in hours.
    pub duration_hours: f64,
}
