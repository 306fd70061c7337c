// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking operations.
//!
//! Create and update run the slot/time validator locally before any
//! request leaves the client; the server stays authoritative for
//! availability and conflict detection, and its conflict answers are
//! surfaced verbatim. After a mutation the caller re-fetches whatever
//! list it renders; nothing here patches local state.

use crate::client::BookingClient;
use crate::http::{Auth, encode};
use chrono::{Local, NaiveDate};
use reqwest::Method;
use room_booking_api::{
    ApiError, BookingQuery, BookingRecord, CancelBookingRequest, CreateBookingRequest, Paginated,
    UpdateBookingRequest,
};
use room_booking_domain::{ValidatedRange, validate_coffee_break, validate_range};

/// Reason recorded when the owner cancels without giving one.
const DEFAULT_CANCEL_REASON: &str = "Cancelled by the user";

/// Reason recorded when a manager rejects without giving one.
const DEFAULT_REJECT_REASON: &str = "Rejected by the manager";

/// User input for creating or editing a booking.
///
/// The time range is carried as a date plus two grid slots, exactly
/// as the form collects it; composition into ISO datetimes happens
/// after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    /// Id of the room to book.
    pub room: i64,
    /// The booking date.
    pub date: NaiveDate,
    /// Start slot (`HH:MM`, on the half-hour grid).
    pub start: String,
    /// End slot (`HH:MM`, on the half-hour grid).
    pub end: String,
    /// Whether a coffee break is requested.
    pub has_coffee_break: bool,
    /// Coffee-break headcount; required iff the flag is set.
    pub coffee_break_headcount: Option<i64>,
    /// Free-text notes.
    pub notes: Option<String>,
}

impl BookingDraft {
    /// Runs local validation and returns the normalized range.
    fn validate(&self, today: NaiveDate) -> Result<ValidatedRange, ApiError> {
        let range = validate_range(self.date, &self.start, &self.end, today)?;
        validate_coffee_break(self.has_coffee_break, self.coffee_break_headcount)?;
        Ok(range)
    }
}

impl BookingClient {
    /// Lists bookings with optional filters and pagination.
    ///
    /// # Errors
    ///
    /// Returns any server or transport error.
    pub async fn list_bookings(
        &self,
        query: &BookingQuery,
    ) -> Result<Paginated<BookingRecord>, ApiError> {
        self.http
            .request_json(
                Method::GET,
                "/booking/",
                &query.to_query_pairs(),
                None,
                Auth::Session,
            )
            .await
    }

    /// Lists bookings awaiting moderation.
    ///
    /// # Errors
    ///
    /// Returns any server or transport error.
    pub async fn list_pending_bookings(
        &self,
        query: &BookingQuery,
    ) -> Result<Paginated<BookingRecord>, ApiError> {
        self.http
            .request_json(
                Method::GET,
                "/booking/pending/",
                &query.to_query_pairs(),
                None,
                Auth::Session,
            )
            .await
    }

    /// Queries room availability for the given filters.
    ///
    /// # Errors
    ///
    /// Returns any server or transport error.
    pub async fn check_availability(
        &self,
        query: &BookingQuery,
    ) -> Result<Paginated<BookingRecord>, ApiError> {
        self.http
            .request_json(
                Method::GET,
                "/booking/availability/",
                &query.to_query_pairs(),
                None,
                Auth::Session,
            )
            .await
    }

    /// Fetches a single booking by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown id, or any other
    /// server or transport error.
    pub async fn get_booking(&self, id: i64) -> Result<BookingRecord, ApiError> {
        self.http
            .request_json(
                Method::GET,
                &format!("/booking/{id}/"),
                &[],
                None,
                Auth::Session,
            )
            .await
    }

    /// Creates a booking from a validated draft.
    ///
    /// The draft is validated locally first (date not in the past,
    /// grid slots, non-empty range, coffee-break invariant); nothing
    /// invalid reaches the network. The created record comes back with
    /// a server-assigned id and status `pending`.
    ///
    /// # Errors
    ///
    /// Returns a field-tagged [`ApiError::InvalidInput`] on local
    /// validation failure, [`ApiError::Conflict`] when the server
    /// reports the slot unavailable, or any other server or transport
    /// error.
    pub async fn create_booking(&self, draft: &BookingDraft) -> Result<BookingRecord, ApiError> {
        let Some(session) = self.http.session().await else {
            return Err(ApiError::AuthenticationExpired {
                reason: String::from("not signed in"),
            });
        };

        let range = draft.validate(Local::now().date_naive())?;
        let request = CreateBookingRequest {
            room: draft.room,
            date_booking: range.date,
            start_datetime: range.start_datetime(),
            end_datetime: range.end_datetime(),
            manager: session.identity.id,
            has_coffee_break: draft.has_coffee_break,
            coffee_break_headcount: if draft.has_coffee_break {
                draft.coffee_break_headcount
            } else {
                None
            },
            notes: draft.notes.clone(),
        };

        self.http
            .request_json(
                Method::POST,
                "/booking/",
                &[],
                Some(encode(&request)?),
                Auth::Session,
            )
            .await
            .map_err(into_conflict)
    }

    /// Updates a booking from a validated draft.
    ///
    /// Partial update: the draft's fields replace the server's, and
    /// the same local validation as on create applies.
    ///
    /// # Errors
    ///
    /// Returns a field-tagged [`ApiError::InvalidInput`] on local
    /// validation failure, [`ApiError::Conflict`] when the server
    /// reports the slot unavailable, or any other server or transport
    /// error.
    pub async fn update_booking(
        &self,
        id: i64,
        draft: &BookingDraft,
    ) -> Result<BookingRecord, ApiError> {
        let range = draft.validate(Local::now().date_naive())?;
        let request = UpdateBookingRequest {
            room: Some(draft.room),
            date_booking: Some(range.date),
            start_datetime: Some(range.start_datetime()),
            end_datetime: Some(range.end_datetime()),
            has_coffee_break: Some(draft.has_coffee_break),
            coffee_break_headcount: if draft.has_coffee_break {
                draft.coffee_break_headcount
            } else {
                None
            },
            notes: draft.notes.clone(),
        };

        self.http
            .request_json(
                Method::PATCH,
                &format!("/booking/{id}/"),
                &[],
                Some(encode(&request)?),
                Auth::Session,
            )
            .await
            .map_err(into_conflict)
    }

    /// Cancels a booking as its owner.
    ///
    /// # Errors
    ///
    /// Returns any server or transport error.
    pub async fn cancel_booking(
        &self,
        id: i64,
        reason: Option<String>,
    ) -> Result<BookingRecord, ApiError> {
        self.post_cancellation(id, reason.unwrap_or_else(|| DEFAULT_CANCEL_REASON.to_string()))
            .await
    }

    /// Rejects a pending booking as a manager.
    ///
    /// Rejection is a cancellation with moderation semantics; the
    /// reason is effectively required, so a default is recorded when
    /// the manager gives none.
    ///
    /// # Errors
    ///
    /// Returns any server or transport error.
    pub async fn reject_booking(
        &self,
        id: i64,
        reason: Option<String>,
    ) -> Result<BookingRecord, ApiError> {
        self.post_cancellation(id, reason.unwrap_or_else(|| DEFAULT_REJECT_REASON.to_string()))
            .await
    }

    /// Confirms a pending booking as a manager.
    ///
    /// # Errors
    ///
    /// Returns any server or transport error.
    pub async fn confirm_booking(&self, id: i64) -> Result<BookingRecord, ApiError> {
        self.http
            .request_json(
                Method::POST,
                &format!("/booking/{id}/confirm/"),
                &[],
                Some(serde_json::json!({})),
                Auth::Session,
            )
            .await
    }

    /// Permanently deletes a booking.
    ///
    /// Administrative escape hatch only; the normal end of a booking's
    /// life is cancellation, which keeps the record.
    ///
    /// # Errors
    ///
    /// Returns any server or transport error.
    pub async fn delete_booking(&self, id: i64) -> Result<(), ApiError> {
        self.http
            .request_no_content(
                Method::DELETE,
                &format!("/booking/{id}/"),
                None,
                Auth::Session,
            )
            .await
    }

    async fn post_cancellation(&self, id: i64, reason: String) -> Result<BookingRecord, ApiError> {
        let request = CancelBookingRequest {
            cancellation_reason: Some(reason),
        };
        self.http
            .request_json(
                Method::POST,
                &format!("/booking/{id}/cancel/"),
                &[],
                Some(encode(&request)?),
                Auth::Session,
            )
            .await
    }
}

/// Remaps a server-side rejection of a create/update into the conflict
/// class.
///
/// By the time a create or update reaches the network it has passed
/// local validation, so a 400 from the server is its conflict check
/// speaking; the message passes through verbatim.
fn into_conflict(err: ApiError) -> ApiError {
    match err {
        ApiError::InvalidInput { field, message } if field == "request" => {
            ApiError::Conflict { message }
        }
        other => other,
    }
}
