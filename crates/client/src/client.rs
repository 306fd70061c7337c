// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::config::ClientConfig;
use crate::http::HttpClient;
use crate::session::Session;
use room_booking_api::{ApiError, AuthenticatedUser};

/// Client for the meeting room booking service.
///
/// One instance is shared by all screens. It owns the HTTP plumbing
/// and the session; API operations live in the `auth`, `bookings` and
/// `catalog` modules as methods on this type.
///
/// Mutating operations return the affected record but never patch a
/// local cache: the caller is expected to re-fetch the list it renders
/// after every mutation (reload-after-mutate), keeping the server the
/// single source of truth.
pub struct BookingClient {
    pub(crate) http: HttpClient,
}

impl BookingClient {
    /// Builds a client from the given configuration, loading any
    /// persisted session.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed or
    /// the persisted session cannot be read.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    /// Builds a client from environment configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed or
    /// the persisted session cannot be read.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(&ClientConfig::from_env())
    }

    /// Returns a snapshot of the current session, if signed in.
    pub async fn session(&self) -> Option<Session> {
        self.http.session().await
    }

    /// Returns the authenticated viewer, if signed in.
    ///
    /// This is the identity the action policy and view model take as
    /// input; pass it explicitly wherever it is needed.
    pub async fn viewer(&self) -> Option<AuthenticatedUser> {
        self.http.session().await.map(|session| session.viewer())
    }

    /// Returns true if a session is present.
    pub async fn is_authenticated(&self) -> bool {
        self.http.session().await.is_some()
    }
}
