// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, RangeField};
use chrono::NaiveDate;

#[test]
fn test_date_in_past_display() {
    let err = DomainError::DateInPast {
        date: NaiveDate::from_ymd_opt(2026, 8, 5).unwrap(),
        today: NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
    };

    assert_eq!(
        err.to_string(),
        "Booking date 2026-08-05 is in the past (today is 2026-08-06)"
    );
}

#[test]
fn test_time_off_grid_display_names_field() {
    let err = DomainError::TimeOffGrid {
        field: RangeField::Start,
        value: String::from("09:15"),
    };

    let message = err.to_string();
    assert!(message.contains("09:15"));
    assert!(message.contains("'start'"));
}

#[test]
fn test_unparsable_time_display() {
    let err = DomainError::UnparsableTime {
        value: String::from("noonish"),
    };

    assert_eq!(
        err.to_string(),
        "Could not extract a time of day from 'noonish'"
    );
}

#[test]
fn test_transition_error_display() {
    let err = DomainError::InvalidStatusTransition {
        from: String::from("cancelled"),
        to: String::from("confirmed"),
        reason: String::from("cannot transition from a terminal state"),
    };

    assert_eq!(
        err.to_string(),
        "Invalid status transition from 'cancelled' to 'confirmed': cannot transition from a terminal state"
    );
}

#[test]
fn test_lifecycle_errors_are_not_field_tagged() {
    let err = DomainError::InvalidStatus {
        status: String::from("approved"),
    };
    assert_eq!(err.field(), None);

    let err = DomainError::CoffeeBreakHeadcountMissing;
    assert_eq!(err.field(), None);
}

#[test]
fn test_range_field_names() {
    assert_eq!(RangeField::Date.as_str(), "date");
    assert_eq!(RangeField::Start.as_str(), "start");
    assert_eq!(RangeField::End.as_str(), "end");
}
