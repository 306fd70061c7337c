// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, RangeField, generate_slots, validate_coffee_break, validate_range,
};
use chrono::NaiveDate;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
}

#[test]
fn test_valid_range_today_succeeds() {
    let range = validate_range(today(), "09:00", "10:00", today()).unwrap();

    assert_eq!(range.date, today());
    assert_eq!(range.start, "09:00");
    assert_eq!(range.end, "10:00");
    assert_eq!(range.duration_minutes(), 60);
}

#[test]
fn test_valid_range_future_date_succeeds() {
    let date = NaiveDate::from_ymd_opt(2026, 12, 24).unwrap();
    assert!(validate_range(date, "08:00", "18:30", today()).is_ok());
}

#[test]
fn test_every_ordered_grid_pair_is_valid() {
    let slots = generate_slots();

    for (i, start) in slots.iter().enumerate() {
        for end in &slots[i + 1..] {
            assert!(
                validate_range(today(), start, end, today()).is_ok(),
                "{start}-{end} rejected"
            );
        }
    }
}

#[test]
fn test_past_date_rejected_tagged_on_date() {
    let yesterday = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
    let err = validate_range(yesterday, "09:00", "10:00", today()).unwrap_err();

    assert!(matches!(err, DomainError::DateInPast { .. }));
    assert_eq!(err.field(), Some(RangeField::Date));
}

#[test]
fn test_equal_start_and_end_rejected_tagged_on_end() {
    let err = validate_range(today(), "09:00", "09:00", today()).unwrap_err();

    assert!(matches!(err, DomainError::EndNotAfterStart { .. }));
    assert_eq!(err.field(), Some(RangeField::End));
}

#[test]
fn test_inverted_range_rejected_tagged_on_end() {
    let err = validate_range(today(), "10:00", "09:00", today()).unwrap_err();

    assert!(matches!(err, DomainError::EndNotAfterStart { .. }));
    assert_eq!(err.field(), Some(RangeField::End));
}

#[test]
fn test_off_grid_start_rejected() {
    let err = validate_range(today(), "09:15", "10:00", today()).unwrap_err();

    assert!(matches!(
        err,
        DomainError::TimeOffGrid {
            field: RangeField::Start,
            ..
        }
    ));
    assert_eq!(err.field(), Some(RangeField::Start));
}

#[test]
fn test_off_grid_end_rejected() {
    let err = validate_range(today(), "09:00", "19:00", today()).unwrap_err();

    assert!(matches!(
        err,
        DomainError::TimeOffGrid {
            field: RangeField::End,
            ..
        }
    ));
}

#[test]
fn test_range_normalizes_to_iso_datetimes() {
    let range = validate_range(today(), "14:30", "16:00", today()).unwrap();

    assert_eq!(range.start_datetime(), "2026-08-06T14:30:00");
    assert_eq!(range.end_datetime(), "2026-08-06T16:00:00");
}

#[test]
fn test_coffee_break_flag_with_headcount_is_valid() {
    assert!(validate_coffee_break(true, Some(12)).is_ok());
}

#[test]
fn test_no_coffee_break_without_headcount_is_valid() {
    assert!(validate_coffee_break(false, None).is_ok());
}

#[test]
fn test_coffee_break_without_headcount_rejected() {
    assert_eq!(
        validate_coffee_break(true, None),
        Err(DomainError::CoffeeBreakHeadcountMissing)
    );
}

#[test]
fn test_coffee_break_with_nonpositive_headcount_rejected() {
    assert!(matches!(
        validate_coffee_break(true, Some(0)),
        Err(DomainError::CoffeeBreakHeadcountNotPositive { count: 0 })
    ));
    assert!(matches!(
        validate_coffee_break(true, Some(-3)),
        Err(DomainError::CoffeeBreakHeadcountNotPositive { count: -3 })
    ));
}

#[test]
fn test_stray_headcount_without_flag_rejected() {
    assert!(matches!(
        validate_coffee_break(false, Some(8)),
        Err(DomainError::CoffeeBreakHeadcountWithoutFlag { count: 8 })
    ));
}
