// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Async HTTP client for the meeting room booking service.
//!
//! [`BookingClient`] wraps the REST API behind typed operations:
//! authentication with a persisted session and transparent token
//! refresh, the booking lifecycle (create, edit, cancel, confirm,
//! reject), and catalog CRUD for rooms, locations, resources and user
//! accounts. Booking input is validated locally against the half-hour
//! grid before anything reaches the network; the server stays
//! authoritative for availability and permissions.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod bookings;
mod catalog;
mod client;
mod config;
mod http;
mod session;

pub use bookings::BookingDraft;
pub use client::BookingClient;
pub use config::ClientConfig;
pub use session::{Session, SessionStore, SessionStoreError};
