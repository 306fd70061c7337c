// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod auth;
mod capabilities;
mod error;
mod request_response;
mod view;

#[cfg(test)]
mod tests;

pub use auth::AuthenticatedUser;
pub use capabilities::{
    BookingAction, BookingCapabilities, Capability, PolicyOptions, compute_booking_capabilities,
};
pub use error::{ApiError, translate_domain_error};
pub use request_response::{
    BookingQuery, BookingRecord, CancelBookingRequest, ChangePasswordRequest,
    CreateBookingRequest, LocationPayload, LocationRecord, LoginRequest, LoginResponse,
    LogoutRequest, Paginated, ResourcePayload, ResourceRecord, RoomPayload, RoomRecord,
    TokenRefreshRequest, TokenRefreshResponse, TokenVerifyRequest, UpdateBookingRequest,
    UserIdentity, UserPayload, UserProfileUpdate, UserRecord, UserRegistration,
};
pub use view::{
    BookingPhase, Classification, ClassifiedBooking, PartitionedBookings, classify, partition,
    permitted_actions, status_label,
};
