// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The half-hour booking grid.
//!
//! Bookings are placed on a fixed grid of half-hour marks from 08:00
//! through 18:30 inclusive (22 slots). Slots are exchanged as
//! zero-padded `HH:MM` strings, which order lexicographically the same
//! way they order chronologically.

use crate::error::DomainError;
use chrono::{DateTime, NaiveDateTime, Timelike};

/// First grid slot, in minutes since midnight (08:00).
const GRID_FIRST_MINUTE: u32 = 8 * 60;

/// Last grid slot, in minutes since midnight (18:30).
const GRID_LAST_MINUTE: u32 = 18 * 60 + 30;

/// Produces the ordered sequence of bookable half-hour slots.
///
/// The sequence is always the same 22 entries, `"08:00"` through
/// `"18:30"`, strictly increasing. Pure and restartable; safe to call
/// once per picker render.
#[must_use]
pub fn generate_slots() -> Vec<String> {
    let mut slots: Vec<String> = Vec::with_capacity(22);
    for hour in 8..=18 {
        slots.push(format!("{hour:02}:00"));
        slots.push(format!("{hour:02}:30"));
    }
    slots
}

/// Parses a strict `HH:MM` string into minutes since midnight.
///
/// Returns `None` unless the input is exactly five characters,
/// zero-padded, with a valid hour (00-23) and minute (00-59). This is
/// deliberately stricter than the grid check so callers can distinguish
/// "not a time" from "a time outside the grid".
#[must_use]
pub fn time_of_day_minutes(value: &str) -> Option<u32> {
    let bytes = value.as_bytes();
    if bytes.len() != 5 {
        return None;
    }
    minutes_from_window(bytes)
}

/// Parses a five-byte `HH:MM` window into minutes since midnight.
fn minutes_from_window(window: &[u8]) -> Option<u32> {
    if window.len() != 5 || window[2] != b':' {
        return None;
    }
    if !window[0].is_ascii_digit()
        || !window[1].is_ascii_digit()
        || !window[3].is_ascii_digit()
        || !window[4].is_ascii_digit()
    {
        return None;
    }

    let hour = u32::from(window[0] - b'0') * 10 + u32::from(window[1] - b'0');
    let minute = u32::from(window[3] - b'0') * 10 + u32::from(window[4] - b'0');
    if hour > 23 || minute > 59 {
        return None;
    }
    Some(hour * 60 + minute)
}

/// Returns true if the value is one of the fixed half-hour grid slots.
///
/// The UI only offers grid values, but this check is the trust boundary
/// before submission: off-grid values handed to the validator directly
/// are rejected here.
#[must_use]
pub fn is_grid_slot(value: &str) -> bool {
    time_of_day_minutes(value).is_some_and(|minutes| {
        (GRID_FIRST_MINUTE..=GRID_LAST_MINUTE).contains(&minutes) && minutes % 30 == 0
    })
}

/// Computes the duration in minutes between two grid slots.
///
/// Returns `None` if either value is not a parseable time or the end is
/// not after the start.
#[must_use]
pub fn duration_minutes(start: &str, end: &str) -> Option<u32> {
    let start_minutes = time_of_day_minutes(start)?;
    let end_minutes = time_of_day_minutes(end)?;
    end_minutes.checked_sub(start_minutes).filter(|d| *d > 0)
}

/// Extracts the embedded `HH:MM` time of day from a datetime string.
///
/// Booking records carry start/end as ISO-8601-ish datetime strings
/// whose exact shape varies by server serializer. Two strategies are
/// tried in order:
///
/// 1. scan for the first plausible `HH:MM` substring (hour 00-23,
///    minute 00-59),
/// 2. parse the whole string as an RFC 3339 or RFC 2822 datetime and
///    read the time components.
///
/// # Errors
///
/// Returns [`DomainError::UnparsableTime`] when neither strategy
/// succeeds. Callers must handle the failure explicitly; it is never
/// conflated with midnight.
pub fn extract_time_of_day(datetime: &str) -> Result<String, DomainError> {
    // Strategy 1: first HH:MM substring. Scans bytes so arbitrary
    // (including non-ASCII) input cannot panic on a slice boundary.
    for window in datetime.as_bytes().windows(5) {
        if let Some(minutes) = minutes_from_window(window) {
            return Ok(format!("{:02}:{:02}", minutes / 60, minutes % 60));
        }
    }

    // Strategy 2: full datetime parse.
    if let Ok(parsed) = DateTime::parse_from_rfc3339(datetime) {
        return Ok(format!("{:02}:{:02}", parsed.hour(), parsed.minute()));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(datetime) {
        return Ok(format!("{:02}:{:02}", parsed.hour(), parsed.minute()));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(datetime, "%Y-%m-%d %H:%M:%S") {
        return Ok(format!("{:02}:{:02}", parsed.hour(), parsed.minute()));
    }

    Err(DomainError::UnparsableTime {
        value: datetime.to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_slots_is_complete_grid() {
        let slots = generate_slots();

        assert_eq!(slots.len(), 22);
        assert_eq!(slots.first().map(String::as_str), Some("08:00"));
        assert_eq!(slots.last().map(String::as_str), Some("18:30"));

        // Strictly increasing: lexicographic order on zero-padded HH:MM
        // is chronological order.
        for pair in slots.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_generate_slots_is_restartable() {
        assert_eq!(generate_slots(), generate_slots());
    }

    #[test]
    fn test_every_generated_slot_is_on_grid() {
        for slot in generate_slots() {
            assert!(is_grid_slot(&slot), "{slot} rejected by grid check");
        }
    }

    #[test]
    fn test_off_grid_values_rejected() {
        assert!(!is_grid_slot("07:30")); // before the grid
        assert!(!is_grid_slot("19:00")); // after the grid
        assert!(!is_grid_slot("09:15")); // not a half-hour mark
        assert!(!is_grid_slot("9:00")); // not zero-padded
        assert!(!is_grid_slot("25:00")); // not a time at all
        assert!(!is_grid_slot(""));
    }

    #[test]
    fn test_time_of_day_minutes() {
        assert_eq!(time_of_day_minutes("00:00"), Some(0));
        assert_eq!(time_of_day_minutes("08:30"), Some(510));
        assert_eq!(time_of_day_minutes("23:59"), Some(1439));
        assert_eq!(time_of_day_minutes("24:00"), None);
        assert_eq!(time_of_day_minutes("12:60"), None);
        assert_eq!(time_of_day_minutes("1200"), None);
    }

    #[test]
    fn test_duration_minutes() {
        assert_eq!(duration_minutes("09:00", "10:00"), Some(60));
        assert_eq!(duration_minutes("08:00", "08:30"), Some(30));
        assert_eq!(duration_minutes("10:00", "10:00"), None);
        assert_eq!(duration_minutes("10:00", "09:00"), None);
        assert_eq!(duration_minutes("bogus", "10:00"), None);
    }

    #[test]
    fn test_extract_time_from_iso_datetime() {
        let extracted = extract_time_of_day("2026-08-06T09:30:00").expect("parseable");
        assert_eq!(extracted, "09:30");
    }

    #[test]
    fn test_extract_time_round_trip_over_grid() {
        for slot in generate_slots() {
            let datetime = format!("2026-08-06T{slot}:00");
            assert_eq!(extract_time_of_day(&datetime).expect("parseable"), slot);
        }
    }

    #[test]
    fn test_extract_time_from_bare_time() {
        assert_eq!(extract_time_of_day("14:00").expect("parseable"), "14:00");
    }

    #[test]
    fn test_extract_time_with_offset_suffix() {
        let extracted = extract_time_of_day("2026-08-06T09:30:00-03:00").expect("parseable");
        assert_eq!(extracted, "09:30");
    }

    #[test]
    fn test_extract_time_failure_is_typed() {
        let result = extract_time_of_day("not a datetime");
        assert!(matches!(result, Err(DomainError::UnparsableTime { .. })));

        let result = extract_time_of_day("");
        assert!(matches!(result, Err(DomainError::UnparsableTime { .. })));
    }
}
