// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for booking classification, labels and partitioning.

use crate::tests::helpers::{
    create_test_booking, create_test_manager, create_test_user, today, tomorrow, yesterday,
};
use crate::{BookingPhase, BookingRecord, classify, partition, status_label};
use room_booking_domain::BookingStatus;

#[test]
fn test_pending_today_classifies_as_pending() {
    let booking = create_test_booking(1, 5, BookingStatus::Pending, today());

    let classification = classify(&booking, today());
    assert_eq!(classification.phase, BookingPhase::Pending);
    assert!(!classification.malformed);
}

#[test]
fn test_confirmed_future_classifies_as_upcoming() {
    let booking = create_test_booking(1, 5, BookingStatus::Confirmed, tomorrow());

    assert_eq!(
        classify(&booking, today()).phase,
        BookingPhase::UpcomingConfirmed
    );
}

#[test]
fn test_confirmed_yesterday_classifies_as_past_regardless_of_status() {
    // Display-only reclassification: the stored status stays confirmed.
    let booking = create_test_booking(1, 5, BookingStatus::Confirmed, yesterday());

    assert_eq!(classify(&booking, today()).phase, BookingPhase::PastOrClosed);
    assert_eq!(booking.status, Some(BookingStatus::Confirmed));
}

#[test]
fn test_terminal_statuses_classify_as_past_even_with_future_date() {
    for status in [BookingStatus::Cancelled, BookingStatus::Completed] {
        let booking = create_test_booking(1, 5, status, tomorrow());
        assert_eq!(classify(&booking, today()).phase, BookingPhase::PastOrClosed);
    }
}

#[test]
fn test_record_without_date_fails_closed_with_flag() {
    let mut booking = create_test_booking(1, 5, BookingStatus::Confirmed, today());
    booking.date_booking = None;

    let classification = classify(&booking, today());
    assert_eq!(classification.phase, BookingPhase::PastOrClosed);
    assert!(classification.malformed);
}

#[test]
fn test_record_without_status_fails_closed_with_flag() {
    let mut booking = create_test_booking(1, 5, BookingStatus::Confirmed, today());
    booking.status = None;

    assert!(classify(&booking, today()).malformed);
}

#[test]
fn test_status_labels() {
    let pending = create_test_booking(1, 5, BookingStatus::Pending, today());
    assert_eq!(status_label(&pending, today()), "Pending");

    let upcoming = create_test_booking(2, 5, BookingStatus::Confirmed, tomorrow());
    assert_eq!(status_label(&upcoming, today()), "Confirmed");

    let stale_confirmed = create_test_booking(3, 5, BookingStatus::Confirmed, yesterday());
    assert_eq!(status_label(&stale_confirmed, today()), "Completed");

    let cancelled = create_test_booking(4, 5, BookingStatus::Cancelled, tomorrow());
    assert_eq!(status_label(&cancelled, today()), "Cancelled");

    let completed = create_test_booking(5, 5, BookingStatus::Completed, yesterday());
    assert_eq!(status_label(&completed, today()), "Completed");

    let mut malformed = create_test_booking(6, 5, BookingStatus::Pending, today());
    malformed.date_booking = None;
    assert_eq!(status_label(&malformed, today()), "Unknown");
}

#[test]
fn test_partition_buckets_and_order() {
    let records = vec![
        create_test_booking(1, 5, BookingStatus::Pending, today()),
        create_test_booking(2, 5, BookingStatus::Confirmed, tomorrow()),
        create_test_booking(3, 5, BookingStatus::Cancelled, today()),
        create_test_booking(4, 5, BookingStatus::Pending, tomorrow()),
        create_test_booking(5, 5, BookingStatus::Confirmed, yesterday()),
    ];

    let partitioned = partition(records, &create_test_user(5), today());

    let ids = |bucket: &[crate::ClassifiedBooking]| {
        bucket
            .iter()
            .map(|c| c.booking.id.unwrap())
            .collect::<Vec<i64>>()
    };

    // Stable: input order preserved within each bucket.
    assert_eq!(ids(&partitioned.pending), vec![1, 4]);
    assert_eq!(ids(&partitioned.upcoming), vec![2]);
    assert_eq!(ids(&partitioned.past), vec![3, 5]);
    assert_eq!(partitioned.total(), 5);
}

#[test]
fn test_partition_hides_other_users_bookings_from_plain_user() {
    let records = vec![
        create_test_booking(1, 5, BookingStatus::Pending, today()),
        create_test_booking(2, 9, BookingStatus::Pending, today()),
        create_test_booking(3, 5, BookingStatus::Confirmed, tomorrow()),
        create_test_booking(4, 11, BookingStatus::Confirmed, tomorrow()),
    ];

    let partitioned = partition(records, &create_test_user(5), today());

    // No foreign booking appears in any bucket, and the total matches
    // the viewer's own bookings in the input.
    assert_eq!(partitioned.total(), 2);
    for bucket in [
        &partitioned.pending,
        &partitioned.upcoming,
        &partitioned.past,
    ] {
        for classified in bucket.iter() {
            assert_eq!(classified.booking.owner_id(), Some(5));
        }
    }
}

#[test]
fn test_partition_shows_everything_to_privileged_viewer() {
    let records = vec![
        create_test_booking(1, 5, BookingStatus::Pending, today()),
        create_test_booking(2, 9, BookingStatus::Pending, today()),
    ];

    let partitioned = partition(records, &create_test_manager(7), today());
    assert_eq!(partitioned.total(), 2);
}

#[test]
fn test_partition_keeps_malformed_records_flagged() {
    let mut broken = create_test_booking(2, 5, BookingStatus::Pending, today());
    broken.date_booking = None;

    let records = vec![
        create_test_booking(1, 5, BookingStatus::Pending, today()),
        broken,
    ];

    let partitioned = partition(records, &create_test_user(5), today());

    assert_eq!(partitioned.total(), 2);
    assert_eq!(partitioned.past.len(), 1);
    assert!(partitioned.past[0].malformed);
    assert!(!partitioned.pending[0].malformed);
}

#[test]
fn test_partition_hides_ownerless_record_from_plain_user() {
    let mut ownerless: BookingRecord =
        create_test_booking(1, 5, BookingStatus::Pending, today());
    ownerless.manager = None;

    let partitioned = partition(vec![ownerless.clone()], &create_test_user(5), today());
    assert_eq!(partitioned.total(), 0);

    // Privileged viewers still see it, flagged through classification
    // only if the date/status is also missing.
    let partitioned = partition(vec![ownerless], &create_test_manager(7), today());
    assert_eq!(partitioned.total(), 1);
}
