//! Error types for slot-engine operations.
//!
//! These cover caller-built inputs only. Malformed booking *records* never
//! produce an error: they are excluded from evaluation instead, because
//! they arrive from an external API response that is not fully trusted.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid duration: {hours} (must be a positive number of hours)")]
    InvalidDuration { hours: f64 },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Working window is empty (start must be before end)")]
    EmptyWindow,
}

pub type Result<T> = std::result::Result<T, SlotError>;
