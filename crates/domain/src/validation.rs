// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{DomainError, RangeField};
use crate::slots::{duration_minutes, is_grid_slot};
use chrono::NaiveDate;

/// A booking time range that passed validation.
///
/// Construction goes through [`validate_range`]; holding one of these
/// means the date is not in the past, both marks are on the grid, and
/// the range is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRange {
    /// The booking date.
    pub date: NaiveDate,
    /// The start slot (`HH:MM`).
    pub start: String,
    /// The end slot (`HH:MM`).
    pub end: String,
}

impl ValidatedRange {
    /// Returns the length of the range in minutes.
    ///
    /// Always a positive multiple of 30 for a validated range.
    #[must_use]
    pub fn duration_minutes(&self) -> u32 {
        duration_minutes(&self.start, &self.end).unwrap_or(0)
    }

    /// Renders the start of the range as a naive ISO 8601 datetime
    /// string (`YYYY-MM-DDTHH:MM:00`), the format the booking API
    /// expects on create and update.
    #[must_use]
    pub fn start_datetime(&self) -> String {
        format!("{}T{}:00", self.date, self.start)
    }

    /// Renders the end of the range as a naive ISO 8601 datetime string.
    #[must_use]
    pub fn end_datetime(&self) -> String {
        format!("{}T{}:00", self.date, self.end)
    }
}

/// Validates a booking time range before it reaches the server.
///
/// This is structural validation only: the server remains authoritative
/// for availability and conflict checking. Rules:
///
/// - `date` must not be earlier than `today` (calendar-day comparison;
///   booking for today is allowed),
/// - `start` and `end` must each be one of the fixed half-hour grid
///   slots between 08:00 and 18:30 inclusive,
/// - `end` must be strictly after `start`.
///
/// # Arguments
///
/// * `date` - The requested booking date
/// * `start` - The requested start slot (`HH:MM`)
/// * `end` - The requested end slot (`HH:MM`)
/// * `today` - The current calendar day at submission time
///
/// # Returns
///
/// A normalized [`ValidatedRange`] on success.
///
/// # Errors
///
/// Returns a field-tagged [`DomainError`] identifying the first rule
/// that failed; see [`DomainError::field`].
pub fn validate_range(
    date: NaiveDate,
    start: &str,
    end: &str,
    today: NaiveDate,
) -> Result<ValidatedRange, DomainError> {
    // Rule: no bookings in the past, but today is fine.
    if date < today {
        return Err(DomainError::DateInPast { date, today });
    }

    // Rule: both marks must be on the half-hour grid. The picker only
    // offers grid values; this is the trust boundary for direct callers.
    if !is_grid_slot(start) {
        return Err(DomainError::TimeOffGrid {
            field: RangeField::Start,
            value: start.to_string(),
        });
    }
    if !is_grid_slot(end) {
        return Err(DomainError::TimeOffGrid {
            field: RangeField::End,
            value: end.to_string(),
        });
    }

    // Rule: the range must be non-empty. Lexicographic comparison is
    // sufficient for zero-padded same-day HH:MM strings.
    if end <= start {
        return Err(DomainError::EndNotAfterStart {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    Ok(ValidatedRange {
        date,
        start: start.to_string(),
        end: end.to_string(),
    })
}

/// Validates the coffee-break fields of a booking request.
///
/// The headcount must be present and positive exactly when the flag is
/// set.
///
/// # Errors
///
/// Returns an error if the headcount is missing while the flag is set,
/// not positive, or present while the flag is clear.
pub fn validate_coffee_break(
    has_coffee_break: bool,
    headcount: Option<i64>,
) -> Result<(), DomainError> {
    match (has_coffee_break, headcount) {
        (true, None) => Err(DomainError::CoffeeBreakHeadcountMissing),
        (true, Some(count)) if count <= 0 => {
            Err(DomainError::CoffeeBreakHeadcountNotPositive { count })
        }
        (false, Some(count)) => Err(DomainError::CoffeeBreakHeadcountWithoutFlag { count }),
        _ => Ok(()),
    }
}
