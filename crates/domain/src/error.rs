// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDate;

/// Form field a validation error is attributed to.
///
/// Range validation errors carry the field they belong to so the UI can
/// attach the message to the right input instead of showing a generic
/// banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeField {
    /// The booking date.
    Date,
    /// The start time slot.
    Start,
    /// The end time slot.
    End,
}

impl RangeField {
    /// Returns the wire/form name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The booking date is earlier than today (calendar-day comparison).
    DateInPast {
        /// The rejected date.
        date: NaiveDate,
        /// The calendar day the comparison was made against.
        today: NaiveDate,
    },
    /// A time value is not one of the fixed half-hour grid slots.
    TimeOffGrid {
        /// Which field carried the value.
        field: RangeField,
        /// The rejected value.
        value: String,
    },
    /// The end time is not strictly after the start time.
    EndNotAfterStart {
        /// The start slot.
        start: String,
        /// The end slot.
        end: String,
    },
    /// No time of day could be extracted from a datetime string.
    UnparsableTime {
        /// The input that could not be parsed.
        value: String,
    },
    /// A status string is not a valid booking status.
    InvalidStatus {
        /// The rejected status string.
        status: String,
    },
    /// A status transition is not permitted by the booking lifecycle.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition is not allowed.
        reason: String,
    },
    /// A role string is not a valid viewer role.
    InvalidRole {
        /// The rejected role string.
        role: String,
    },
    /// The coffee-break flag is set but no headcount was provided.
    CoffeeBreakHeadcountMissing,
    /// The coffee-break headcount is zero or negative.
    CoffeeBreakHeadcountNotPositive {
        /// The rejected count.
        count: i64,
    },
    /// A coffee-break headcount was provided without the flag being set.
    CoffeeBreakHeadcountWithoutFlag {
        /// The stray count.
        count: i64,
    },
}

impl DomainError {
    /// Returns the form field this error is tagged with, if any.
    ///
    /// Range validation errors are field-tagged; lifecycle and parse
    /// errors are not tied to a single input.
    #[must_use]
    pub const fn field(&self) -> Option<RangeField> {
        match self {
            Self::DateInPast { .. } => Some(RangeField::Date),
            Self::TimeOffGrid { field, .. } => Some(*field),
            Self::EndNotAfterStart { .. } => Some(RangeField::End),
            _ => None,
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateInPast { date, today } => {
                write!(f, "Booking date {date} is in the past (today is {today})")
            }
            Self::TimeOffGrid { field, value } => {
                write!(
                    f,
                    "Value '{value}' for '{}' is not a half-hour slot between 08:00 and 18:30",
                    field.as_str()
                )
            }
            Self::EndNotAfterStart { start, end } => {
                write!(f, "End time {end} must be after start time {start}")
            }
            Self::UnparsableTime { value } => {
                write!(f, "Could not extract a time of day from '{value}'")
            }
            Self::InvalidStatus { status } => {
                write!(f, "Invalid booking status: '{status}'")
            }
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(
                    f,
                    "Invalid status transition from '{from}' to '{to}': {reason}"
                )
            }
            Self::InvalidRole { role } => {
                write!(f, "Invalid role: '{role}'")
            }
            Self::CoffeeBreakHeadcountMissing => {
                write!(f, "Coffee break requested without a headcount")
            }
            Self::CoffeeBreakHeadcountNotPositive { count } => {
                write!(f, "Coffee break headcount must be positive, got {count}")
            }
            Self::CoffeeBreakHeadcountWithoutFlag { count } => {
                write!(
                    f,
                    "Coffee break headcount {count} provided but the coffee break flag is not set"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
