// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Field names mirror the booking service's wire contract. These DTOs
//! are distinct from domain types and carry `Option` wherever the
//! server may omit a field; the view model decides what a missing
//! field means, never the deserializer.

use chrono::NaiveDate;
use room_booking_domain::{BookingStatus, Role};
use serde::{Deserialize, Serialize};

/// A paginated collection as returned by every list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Total number of records across all pages.
    pub count: i64,
    /// Opaque link to the next page, if any.
    pub next: Option<String>,
    /// Opaque link to the previous page, if any.
    pub previous: Option<String>,
    /// The records on this page.
    pub results: Vec<T>,
}

/// Optional filters for the booking list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingQuery {
    /// Restrict to a single room.
    pub room: Option<i64>,
    /// Restrict to a single booking date.
    pub date_booking: Option<NaiveDate>,
    /// Restrict to bookings owned by this user (wire name `manager`).
    pub owner: Option<i64>,
    /// Server-side sort order (e.g. `"date_booking"` or
    /// `"-date_booking"`).
    pub ordering: Option<String>,
    /// Page number, 1-based.
    pub page: Option<u32>,
}

impl BookingQuery {
    /// Renders the filters as query-string pairs, skipping unset ones.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs: Vec<(&'static str, String)> = Vec::new();
        if let Some(room) = self.room {
            pairs.push(("room", room.to_string()));
        }
        if let Some(date) = self.date_booking {
            pairs.push(("date_booking", date.to_string()));
        }
        if let Some(owner) = self.owner {
            pairs.push(("manager", owner.to_string()));
        }
        if let Some(ordering) = &self.ordering {
            pairs.push(("ordering", ordering.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        pairs
    }
}

/// A booking record as returned by the booking API.
///
/// The `manager` field is the id of the user who created the booking
/// (the owner). The name is the API's; it is unrelated to the
/// `manager` role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingRecord {
    /// Server-assigned identifier.
    pub id: Option<i64>,
    /// Soft-activity flag maintained by the server.
    pub is_active: Option<bool>,
    /// Creation timestamp (ISO 8601), read-only.
    pub created_at: Option<String>,
    /// Last-update timestamp (ISO 8601), read-only.
    pub updated_at: Option<String>,
    /// The calendar date of the booking.
    pub date_booking: Option<NaiveDate>,
    /// Start of the booked range (ISO 8601 datetime).
    pub start_datetime: Option<String>,
    /// End of the booked range (ISO 8601 datetime).
    pub end_datetime: Option<String>,
    /// Server-derived range length in minutes.
    pub duration_minutes: Option<i64>,
    /// Whether a coffee break was requested.
    pub has_coffee_break: Option<bool>,
    /// Headcount for the coffee break; present only with the flag.
    pub coffee_break_headcount: Option<i64>,
    /// Id of the owning user (wire name `manager`).
    pub manager: Option<i64>,
    /// Denormalized owner display name.
    pub manager_name: Option<String>,
    /// Denormalized owner email.
    pub manager_email: Option<String>,
    /// Denormalized owner phone number.
    pub manager_phone: Option<String>,
    /// Id of the booked room.
    pub room: Option<i64>,
    /// Denormalized room name.
    pub room_name: Option<String>,
    /// Denormalized room capacity.
    pub room_capacity: Option<i64>,
    /// Denormalized resource names available in the room.
    pub room_resources: Option<Vec<String>>,
    /// Denormalized location name.
    pub location: Option<String>,
    /// Denormalized location street address.
    pub location_address: Option<String>,
    /// Denormalized location city.
    pub location_city: Option<String>,
    /// Lifecycle status, server-assigned.
    pub status: Option<BookingStatus>,
    /// Server-rendered status label, informational only.
    pub status_display: Option<String>,
    /// Id of the manager who confirmed the booking, read-only.
    pub confirmed_by: Option<i64>,
    /// Display name of the confirming manager.
    pub confirmed_by_name: Option<String>,
    /// Confirmation timestamp (ISO 8601), read-only.
    pub confirmed_at: Option<String>,
    /// Id of the user who cancelled the booking, read-only.
    pub cancelled_by: Option<i64>,
    /// Display name of the cancelling user.
    pub cancelled_by_name: Option<String>,
    /// Cancellation timestamp (ISO 8601), read-only.
    pub cancelled_at: Option<String>,
    /// Reason recorded at cancellation time.
    pub cancellation_reason: Option<String>,
    /// Free-text notes.
    pub notes: Option<String>,
}

impl BookingRecord {
    /// Returns the id of the owning user, if present.
    ///
    /// Accessor for the wire field `manager`, named to avoid the
    /// collision with the `manager` role.
    #[must_use]
    pub const fn owner_id(&self) -> Option<i64> {
        self.manager
    }
}

/// Request body for creating a booking.
///
/// Datetimes are composed from a validated range; the status is always
/// assigned by the server (`pending` on create).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    /// Id of the room to book.
    pub room: i64,
    /// The booking date.
    pub date_booking: NaiveDate,
    /// Range start (`YYYY-MM-DDTHH:MM:00`).
    pub start_datetime: String,
    /// Range end (`YYYY-MM-DDTHH:MM:00`).
    pub end_datetime: String,
    /// Id of the owning user (wire name `manager`).
    pub manager: i64,
    /// Whether a coffee break is requested.
    pub has_coffee_break: bool,
    /// Headcount for the coffee break; required iff the flag is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coffee_break_headcount: Option<i64>,
    /// Free-text notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Request body for partially updating a booking.
///
/// Only set fields are serialized; the server keeps the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBookingRequest {
    /// New room id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<i64>,
    /// New booking date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_booking: Option<NaiveDate>,
    /// New range start (`YYYY-MM-DDTHH:MM:00`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_datetime: Option<String>,
    /// New range end (`YYYY-MM-DDTHH:MM:00`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_datetime: Option<String>,
    /// New coffee-break flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_coffee_break: Option<bool>,
    /// New coffee-break headcount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coffee_break_headcount: Option<i64>,
    /// New notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Request body for cancelling (or rejecting) a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelBookingRequest {
    /// Reason recorded with the cancellation. Optional for a
    /// self-cancel; a manager rejection always carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
}

// ========================================================================
// Authentication
// ========================================================================

/// Request body for the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// The account email address.
    pub email: String,
    /// The account password.
    pub password: String,
}

/// The user identity attached to a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// The server-assigned user id.
    pub id: i64,
    /// The login username, when the server includes it.
    #[serde(default)]
    pub username: Option<String>,
    /// The account email address.
    pub email: String,
    /// First name, when set.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name, when set.
    #[serde(default)]
    pub last_name: Option<String>,
    /// The role assigned by the server.
    #[serde(default = "default_role")]
    pub role: Role,
}

/// Role fallback when the server omits one.
const fn default_role() -> Role {
    Role::User
}

/// Response body for the login endpoint: a token pair plus the
/// authenticated identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The access token.
    pub access: String,
    /// The refresh token.
    pub refresh: String,
    /// The authenticated identity, when the server includes it inline.
    #[serde(default)]
    pub user: Option<UserIdentity>,
}

/// Request body for the token refresh endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRefreshRequest {
    /// The refresh token.
    pub refresh: String,
}

/// Response body for the token refresh endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRefreshResponse {
    /// The new access token.
    pub access: String,
}

/// Request body for the token verification endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenVerifyRequest {
    /// The token to verify.
    pub token: String,
}

/// Request body for the logout endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutRequest {
    /// The refresh token of the session to invalidate.
    pub refresh: String,
}

// ========================================================================
// Catalog records (rooms, locations, resources, user accounts)
// ========================================================================

/// A meeting room as returned by the room API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomRecord {
    /// Server-assigned identifier.
    pub id: Option<i64>,
    /// Soft-activity flag.
    pub is_active: Option<bool>,
    /// Creation timestamp, read-only.
    pub created_at: Option<String>,
    /// Last-update timestamp, read-only.
    pub updated_at: Option<String>,
    /// Display name.
    pub name: String,
    /// Seating capacity.
    pub capacity: i64,
    /// Id of the containing location.
    pub location: i64,
    /// Ids of the resources available in the room.
    pub resources: Option<Vec<i64>>,
}

/// Request body for creating or replacing a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomPayload {
    /// Display name.
    pub name: String,
    /// Seating capacity.
    pub capacity: i64,
    /// Id of the containing location.
    pub location: i64,
    /// Ids of the resources available in the room.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<i64>>,
}

/// A location as returned by the location API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationRecord {
    /// Server-assigned identifier.
    pub id: Option<i64>,
    /// Soft-activity flag.
    pub is_active: Option<bool>,
    /// Creation timestamp, read-only.
    pub created_at: Option<String>,
    /// Last-update timestamp, read-only.
    pub updated_at: Option<String>,
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State or region code.
    pub state: String,
    /// Postal code (wire name `cep`).
    pub cep: String,
    /// Free-text description.
    pub description: Option<String>,
}

/// Request body for creating or replacing a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationPayload {
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State or region code.
    pub state: String,
    /// Postal code (wire name `cep`).
    pub cep: String,
    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A bookable resource (projector, whiteboard, …).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceRecord {
    /// Server-assigned identifier.
    pub id: Option<i64>,
    /// Soft-activity flag.
    pub is_active: Option<bool>,
    /// Creation timestamp, read-only.
    pub created_at: Option<String>,
    /// Last-update timestamp, read-only.
    pub updated_at: Option<String>,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
}

/// Request body for creating or replacing a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePayload {
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
}

/// A user account as returned by the user management API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    /// Server-assigned identifier.
    pub id: Option<i64>,
    /// Account email address.
    pub email: String,
    /// Login username.
    pub username: String,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Assigned role.
    pub role: Option<Role>,
    /// Server-rendered role label, informational only.
    pub role_display: Option<String>,
    /// Whether the account is active.
    pub is_active: Option<bool>,
    /// Account creation timestamp, read-only.
    pub date_joined: Option<String>,
    /// Record creation timestamp, read-only.
    pub created_at: Option<String>,
    /// Record update timestamp, read-only.
    pub updated_at: Option<String>,
}

/// Request body for creating or updating a user account through the
/// administrative user management endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    /// Account email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Login username.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Assigned role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Whether the account is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Request body for registering a new user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRegistration {
    /// Account email address.
    pub email: String,
    /// Login username.
    pub username: String,
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Chosen password.
    pub password: String,
    /// Password confirmation; must match.
    pub password_confirm: String,
}

/// Request body for updating a user's own profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfileUpdate {
    /// New first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// New last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// New phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Request body for changing the current user's password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    /// The current password.
    pub old_password: String,
    /// The new password.
    pub new_password: String,
    /// New password confirmation; must match.
    pub new_password_confirm: String,
}
