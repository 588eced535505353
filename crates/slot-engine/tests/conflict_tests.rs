//! Tests for the slot conflict evaluator.

use slot_engine::booking::{Booking, BookingStatus, SlotRequest};
use slot_engine::error::SlotError;
use slot_engine::{find_slot_conflicts, is_slot_busy, time};

/// Helper to build a booking record with a well-formed time and duration.
fn booking(id: &str, date: &str, time: &str, hours: f64, status: BookingStatus) -> Booking {
    Booking {
        id: id.to_string(),
        scheduled_date: date.to_string(),
        scheduled_time: Some(time.to_string()),
        duration_hours: Some(hours),
        status,
    }
}

fn request(date: &str, time: &str, hours: f64) -> SlotRequest {
    SlotRequest {
        date: date.to_string(),
        start_time: time.to_string(),
        duration_hours: hours,
    }
}

// ── Overlap semantics ───────────────────────────────────────────────────────

#[test]
fn partial_overlap_is_busy() {
    // Booking 10:00-11:00, candidate 10:30-11:30 → 30-min overlap
    let bookings = vec![booking("b1", "2024-06-15", "10:00", 1.0, BookingStatus::Confirmed)];
    let req = request("2024-06-15", "10:30", 1.0);

    assert!(is_slot_busy(&bookings, &req).unwrap());

    let conflicts = find_slot_conflicts(&bookings, &req).unwrap();
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].booking_id, "b1");
    assert_eq!(conflicts[0].overlap_minutes, 30);
    // The conflict reports the booking's own occupied range.
    assert_eq!(conflicts[0].start, time::parse_time_of_day("10:00").unwrap());
    assert_eq!(conflicts[0].end, time::parse_time_of_day("11:00").unwrap());
}

#[test]
fn touching_boundaries_are_not_a_conflict() {
    // Booking 09:00-10:00, candidate 10:00-11:00 → back-to-back, allowed
    let bookings = vec![booking("b1", "2024-06-15", "09:00", 1.0, BookingStatus::Confirmed)];

    assert!(
        !is_slot_busy(&bookings, &request("2024-06-15", "10:00", 1.0)).unwrap(),
        "a slot starting exactly when a booking ends must not be busy"
    );
    // And the mirror case: candidate ends exactly when the booking starts.
    assert!(!is_slot_busy(&bookings, &request("2024-06-15", "08:00", 1.0)).unwrap());
}

#[test]
fn fully_contained_candidate_reports_its_own_length() {
    // Booking 09:00-12:00, candidate 10:00-11:00 → 60-min overlap
    let bookings = vec![booking("b1", "2024-06-15", "09:00", 3.0, BookingStatus::Confirmed)];
    let conflicts = find_slot_conflicts(&bookings, &request("2024-06-15", "10:00", 1.0)).unwrap();

    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].overlap_minutes, 60);
}

#[test]
fn fractional_durations_overlap_by_the_fraction() {
    // Booking 10:00-11:30 (1.5h), candidate 11:00-12:00 → 30-min overlap
    let bookings = vec![booking("b1", "2024-06-15", "10:00", 1.5, BookingStatus::Confirmed)];
    let conflicts = find_slot_conflicts(&bookings, &request("2024-06-15", "11:00", 1.0)).unwrap();

    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].overlap_minutes, 30);
}

#[test]
fn multiple_conflicts_all_reported_in_input_order() {
    let bookings = vec![
        booking("b1", "2024-06-15", "09:00", 2.0, BookingStatus::Confirmed),
        booking("b2", "2024-06-15", "10:30", 1.0, BookingStatus::InProgress),
        booking("b3", "2024-06-15", "14:00", 1.0, BookingStatus::Confirmed),
    ];
    // Candidate 10:00-11:00 overlaps b1 (10:00-11:00) and b2 (10:30-11:00).
    let conflicts = find_slot_conflicts(&bookings, &request("2024-06-15", "10:00", 1.0)).unwrap();

    assert_eq!(conflicts.len(), 2);
    assert_eq!(conflicts[0].booking_id, "b1");
    assert_eq!(conflicts[0].overlap_minutes, 60);
    assert_eq!(conflicts[1].booking_id, "b2");
    assert_eq!(conflicts[1].overlap_minutes, 30);
}

// ── Status filtering ────────────────────────────────────────────────────────

#[test]
fn pending_booking_never_blocks() {
    let bookings = vec![booking("b1", "2024-06-15", "10:00", 1.0, BookingStatus::Pending)];
    assert!(!is_slot_busy(&bookings, &request("2024-06-15", "10:00", 1.0)).unwrap());
}

#[test]
fn confirmed_booking_blocks_the_same_interval() {
    let bookings = vec![booking("b1", "2024-06-15", "10:00", 1.0, BookingStatus::Confirmed)];
    assert!(is_slot_busy(&bookings, &request("2024-06-15", "10:00", 1.0)).unwrap());
}

#[test]
fn in_progress_booking_blocks() {
    let bookings = vec![booking("b1", "2024-06-15", "10:00", 1.0, BookingStatus::InProgress)];
    assert!(is_slot_busy(&bookings, &request("2024-06-15", "10:00", 1.0)).unwrap());
}

#[test]
fn completed_and_cancelled_bookings_never_block() {
    let bookings = vec![
        booking("b1", "2024-06-15", "10:00", 1.0, BookingStatus::Completed),
        booking("b2", "2024-06-15", "10:00", 1.0, BookingStatus::Cancelled),
    ];
    assert!(!is_slot_busy(&bookings, &request("2024-06-15", "10:00", 1.0)).unwrap());
}

// ── Date isolation ──────────────────────────────────────────────────────────

#[test]
fn bookings_on_another_date_never_block() {
    let bookings = vec![booking("b1", "2024-01-01", "10:00", 1.0, BookingStatus::Confirmed)];
    assert!(
        !is_slot_busy(&bookings, &request("2024-01-02", "10:00", 1.0)).unwrap(),
        "time-of-day overlap on a different date is not a conflict"
    );
}

// ── Malformed records are skipped, never fatal ──────────────────────────────

#[test]
fn empty_booking_list_is_not_busy() {
    assert!(!is_slot_busy(&[], &request("2024-06-15", "10:00", 1.0)).unwrap());
}

#[test]
fn missing_or_unparseable_time_is_skipped() {
    let mut no_time = booking("b1", "2024-06-15", "10:00", 1.0, BookingStatus::Confirmed);
    no_time.scheduled_time = None;
    let bad_time = Booking {
        scheduled_time: Some("whenever".to_string()),
        ..booking("b2", "2024-06-15", "10:00", 1.0, BookingStatus::Confirmed)
    };

    assert!(!is_slot_busy(&[no_time, bad_time], &request("2024-06-15", "10:00", 1.0)).unwrap());
}

#[test]
fn missing_or_non_positive_duration_is_skipped() {
    let mut no_duration = booking("b1", "2024-06-15", "10:00", 1.0, BookingStatus::Confirmed);
    no_duration.duration_hours = None;
    let negative = booking("b2", "2024-06-15", "10:00", -2.0, BookingStatus::Confirmed);
    let zero = booking("b3", "2024-06-15", "10:00", 0.0, BookingStatus::Confirmed);

    assert!(
        !is_slot_busy(&[no_duration, negative, zero], &request("2024-06-15", "10:00", 1.0))
            .unwrap()
    );
}

#[test]
fn one_bad_record_does_not_hide_a_real_conflict() {
    let bad = Booking {
        scheduled_time: Some("??".to_string()),
        ..booking("b1", "2024-06-15", "10:00", 1.0, BookingStatus::Confirmed)
    };
    let real = booking("b2", "2024-06-15", "10:00", 1.0, BookingStatus::Confirmed);

    let conflicts =
        find_slot_conflicts(&[bad, real], &request("2024-06-15", "10:30", 1.0)).unwrap();
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].booking_id, "b2");
}

// ── Candidate validation raises ─────────────────────────────────────────────

#[test]
fn non_positive_candidate_duration_is_an_error() {
    let bookings = vec![booking("b1", "2024-06-15", "10:00", 1.0, BookingStatus::Confirmed)];

    assert!(matches!(
        is_slot_busy(&bookings, &request("2024-06-15", "10:00", 0.0)),
        Err(SlotError::InvalidDuration { .. })
    ));
    assert!(matches!(
        is_slot_busy(&bookings, &request("2024-06-15", "10:00", -1.5)),
        Err(SlotError::InvalidDuration { .. })
    ));
}

#[test]
fn unparseable_candidate_date_is_an_error() {
    assert!(matches!(
        is_slot_busy(&[], &request("June 15th", "10:00", 1.0)),
        Err(SlotError::InvalidDate(_))
    ));
}

#[test]
fn unparseable_candidate_time_is_an_error() {
    assert!(matches!(
        is_slot_busy(&[], &request("2024-06-15", "10 o'clock", 1.0)),
        Err(SlotError::InvalidTime(_))
    ));
}

// ── Wire-format records ─────────────────────────────────────────────────────

#[test]
fn api_records_deserialize_and_evaluate() {
    // A realistic API response: camelCase keys, an unknown status, an extra
    // field, and a record missing its time.
    let raw = r#"[
        {"id": "a1", "scheduledDate": "2024-06-15", "scheduledTime": "10:00",
         "durationHours": 1.5, "status": "CONFIRMED", "customerName": "J. Doe"},
        {"id": "a2", "scheduledDate": "2024-06-15", "scheduledTime": "10:00",
         "durationHours": 1.0, "status": "ARCHIVED"},
        {"id": "a3", "scheduledDate": "2024-06-15", "durationHours": 1.0,
         "status": "CONFIRMED"}
    ]"#;
    let bookings: Vec<Booking> = serde_json::from_str(raw).unwrap();

    assert_eq!(bookings[1].status, BookingStatus::Unrecognized);
    assert_eq!(bookings[2].scheduled_time, None);

    // Only a1 occupies: 10:00-11:30. Candidate 11:00-12:00 overlaps it.
    let conflicts = find_slot_conflicts(&bookings, &request("2024-06-15", "11:00", 1.0)).unwrap();
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].booking_id, "a1");
}
