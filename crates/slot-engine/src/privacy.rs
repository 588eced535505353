//! Decide whether customer contact details may be shown to a viewer.
//!
//! Admins and customers always see contact fields. Providers see them only
//! inside a day-granular window from one day before the service date to
//! one day after, both boundary days included. Every ambiguous input —
//! unknown role, missing or malformed date — resolves to hidden: denying
//! access is the safe default when certainty is unavailable.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::booking::ViewerRole;
use crate::time;

/// Placeholder shown in place of a contact field the viewer may not see.
pub const PROTECTED_PLACEHOLDER: &str = "Protected";

/// Placeholder shown when the viewer may see a field but it has no value.
pub const MISSING_PLACEHOLDER: &str = "Not available";

/// Outcome of a contact-visibility check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactVisibility {
    pub visible: bool,
    /// Human-readable explanation suitable for a tooltip or badge.
    pub reason: String,
}

/// Decide whether a viewer may see a customer's contact fields.
///
/// `today` is the viewer's current calendar date; derive it from an
/// instant with [`crate::time::local_date_in`]. `None` for
/// `scheduled_date` means the upstream record had no parseable date and —
/// for the provider role — always yields a hidden result.
///
/// This function never fails: every bad input maps to `visible = false`.
pub fn check_contact_visibility(
    scheduled_date: Option<NaiveDate>,
    role: ViewerRole,
    today: NaiveDate,
) -> ContactVisibility {
    match role {
        ViewerRole::Admin | ViewerRole::Customer => ContactVisibility {
            visible: true,
            reason: "Full contact access for this role".to_string(),
        },
        ViewerRole::Provider => {
            let Some(date) = scheduled_date else {
                return hidden("Service date is missing or invalid; contact details stay hidden");
            };
            provider_window(date, today)
        }
        ViewerRole::Unrecognized => hidden("Role not recognized; access denied by default"),
    }
}

/// [`check_contact_visibility`] over the raw wire date string.
///
/// An empty or unparseable date fails closed rather than erroring.
pub fn check_contact_visibility_raw(
    scheduled_date: &str,
    role: ViewerRole,
    today: NaiveDate,
) -> ContactVisibility {
    check_contact_visibility(time::parse_service_date(scheduled_date), role, today)
}

/// Render a contact field under a visibility decision.
///
/// The real value is returned only when `visible` is true. A hidden field
/// always renders as [`PROTECTED_PLACEHOLDER`], even when a value is
/// present.
pub fn format_protected_field(value: Option<&str>, visible: bool) -> String {
    if !visible {
        return PROTECTED_PLACEHOLDER.to_string();
    }
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => MISSING_PLACEHOLDER.to_string(),
    }
}

/// The provider window spans the day before the service through the day
/// after, inclusive on both ends.
fn provider_window(date: NaiveDate, today: NaiveDate) -> ContactVisibility {
    let (Some(window_start), Some(window_end)) = (
        date.checked_sub_days(Days::new(1)),
        date.checked_add_days(Days::new(1)),
    ) else {
        return hidden("Service date is out of range; contact details stay hidden");
    };
    if today < window_start {
        hidden("Not yet available; contact details open 24 hours before the service")
    } else if today > window_end {
        hidden("Expired; contact details were available until 24 hours after the service")
    } else {
        ContactVisibility {
            visible: true,
            reason: "Available within the service window".to_string(),
        }
    }
}

fn hidden(reason: &str) -> ContactVisibility {
    ContactVisibility {
        visible: false,
        reason: reason.to_string(),
    }
}
