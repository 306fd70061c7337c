// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The booking view model.
//!
//! Combines a raw booking record with the action policy and the
//! current date to produce what a screen renders: a display bucket, a
//! status label and the permitted actions. Everything here is derived
//! state; the stored status is never modified. In particular a
//! `confirmed` booking whose date has passed displays as completed
//! even though the server may not have flipped its status yet.

use crate::auth::AuthenticatedUser;
use crate::capabilities::{BookingCapabilities, PolicyOptions, compute_booking_capabilities};
use crate::request_response::BookingRecord;
use chrono::NaiveDate;
use room_booking_domain::BookingStatus;
use tracing::warn;

/// Display bucket of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingPhase {
    /// Awaiting manager moderation.
    Pending,
    /// Confirmed with a booking date of today or later.
    UpcomingConfirmed,
    /// Terminal status or a booking date in the past.
    PastOrClosed,
}

/// Result of classifying a booking for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// The display bucket.
    pub phase: BookingPhase,
    /// True when the record was missing required fields and was
    /// classified by failing closed. Screens surface this as a
    /// warning; the record is kept, not dropped.
    pub malformed: bool,
}

/// Classifies a booking into its display bucket.
///
/// Rules:
///
/// - a terminal status (`cancelled`/`completed`) or a booking date
///   before `today` classifies as [`BookingPhase::PastOrClosed`]
///   regardless of stored status,
/// - otherwise `pending` classifies as [`BookingPhase::Pending`],
/// - otherwise (`confirmed`, today or later) as
///   [`BookingPhase::UpcomingConfirmed`].
///
/// A record missing its date or status cannot crash a list view: it
/// fails closed into [`BookingPhase::PastOrClosed`] with the
/// `malformed` flag set.
#[must_use]
pub fn classify(record: &BookingRecord, today: NaiveDate) -> Classification {
    let (Some(date), Some(status)) = (record.date_booking, record.status) else {
        return Classification {
            phase: BookingPhase::PastOrClosed,
            malformed: true,
        };
    };

    let phase = if status.is_terminal() || date < today {
        BookingPhase::PastOrClosed
    } else if status == BookingStatus::Pending {
        BookingPhase::Pending
    } else {
        BookingPhase::UpcomingConfirmed
    };

    Classification {
        phase,
        malformed: false,
    }
}

/// Derives the display label for a booking's status.
///
/// The label follows the classification, not the raw status: a
/// confirmed booking with a past date reads "Completed". Cancelled
/// bookings keep their own label inside the past bucket. Locale
/// rendering is the embedding UI's concern; these are stable keys.
#[must_use]
pub fn status_label(record: &BookingRecord, today: NaiveDate) -> &'static str {
    let classification = classify(record, today);
    if classification.malformed {
        return "Unknown";
    }

    match classification.phase {
        BookingPhase::Pending => "Pending",
        BookingPhase::UpcomingConfirmed => "Confirmed",
        BookingPhase::PastOrClosed => match record.status {
            Some(BookingStatus::Cancelled) => "Cancelled",
            _ => "Completed",
        },
    }
}

/// Computes the actions a viewer may take on a booking record.
///
/// Delegates to the action policy. A record missing its owner or
/// status fails closed: nothing is permitted, not even view, since
/// ownership cannot be established.
#[must_use]
pub fn permitted_actions(
    record: &BookingRecord,
    viewer: &AuthenticatedUser,
    options: PolicyOptions,
) -> BookingCapabilities {
    let (Some(owner_id), Some(status)) = (record.owner_id(), record.status) else {
        return BookingCapabilities::none();
    };
    compute_booking_capabilities(viewer, owner_id, status, options)
}

/// A booking together with its display classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedBooking {
    /// The raw record, untouched.
    pub booking: BookingRecord,
    /// Whether the record failed closed during classification.
    pub malformed: bool,
}

/// A collection of bookings split into display buckets.
///
/// Relative order within each bucket matches the input order; no
/// re-sorting happens here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionedBookings {
    /// Bookings awaiting moderation.
    pub pending: Vec<ClassifiedBooking>,
    /// Confirmed bookings for today or later.
    pub upcoming: Vec<ClassifiedBooking>,
    /// Closed, cancelled or past-dated bookings.
    pub past: Vec<ClassifiedBooking>,
}

impl PartitionedBookings {
    /// Total number of bookings across all buckets.
    #[must_use]
    pub fn total(&self) -> usize {
        self.pending.len() + self.upcoming.len() + self.past.len()
    }
}

/// Splits a fetched booking collection into display buckets for a
/// viewer.
///
/// Privileged viewers see every booking; a plain `user` sees only
/// their own (a record with no owner is invisible to them). Within
/// each bucket the input order is preserved. Malformed records land in
/// the past bucket with their flag set rather than being dropped.
#[must_use]
pub fn partition(
    records: Vec<BookingRecord>,
    viewer: &AuthenticatedUser,
    today: NaiveDate,
) -> PartitionedBookings {
    let mut partitioned = PartitionedBookings::default();

    for record in records {
        let visible: bool = viewer.role.is_privileged()
            || record.owner_id().is_some_and(|owner| viewer.is_owner_of(owner));
        if !visible {
            continue;
        }

        let classification = classify(&record, today);
        if classification.malformed {
            warn!(booking_id = ?record.id, "Malformed booking record, classified as past/closed");
        }

        let classified = ClassifiedBooking {
            booking: record,
            malformed: classification.malformed,
        };
        match classification.phase {
            BookingPhase::Pending => partitioned.pending.push(classified),
            BookingPhase::UpcomingConfirmed => partitioned.upcoming.push(classified),
            BookingPhase::PastOrClosed => partitioned.past.push(classified),
        }
    }

    partitioned
}
