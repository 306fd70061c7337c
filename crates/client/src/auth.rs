// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication operations.
//!
//! Login exchanges credentials for a token pair plus the user's
//! identity and persists them as one session. Logout invalidates the
//! session server-side best-effort and always clears local state; the
//! already-cleared local state is the only place an error is
//! deliberately swallowed.

use crate::client::BookingClient;
use crate::http::{Auth, encode};
use crate::session::Session;
use reqwest::Method;
use room_booking_api::{
    ApiError, AuthenticatedUser, LoginRequest, LoginResponse, LogoutRequest, TokenVerifyRequest,
};
use tracing::{info, warn};

impl BookingClient {
    /// Signs in with email and password.
    ///
    /// On success the token pair and identity are persisted as the
    /// current session and the authenticated viewer is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] on rejected credentials, a
    /// malformed-record error when the server omits the identity
    /// payload, or any transport error.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthenticatedUser, ApiError> {
        let body = encode(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })?;
        let response: LoginResponse = self
            .http
            .request_json(Method::POST, "/token/", &[], Some(body), Auth::None)
            .await
            .map_err(|err| match err {
                // A 401 from the login endpoint is a credential
                // rejection, not an expired session.
                ApiError::AuthenticationExpired { reason } => {
                    ApiError::Unauthorized { message: reason }
                }
                other => other,
            })?;

        // The token stays opaque to the client, so the inline identity
        // is the only accepted source.
        let Some(identity) = response.user else {
            return Err(ApiError::MalformedRecord {
                message: String::from("login response carried no user identity"),
            });
        };

        let session = Session {
            access_token: response.access,
            refresh_token: response.refresh,
            identity,
        };
        self.http.install_session(session.clone()).await?;
        info!(user_id = session.identity.id, "Signed in");
        Ok(session.viewer())
    }

    /// Forces a refresh of the access token.
    ///
    /// Normally the request layer refreshes on demand; this exists for
    /// callers that want to revalidate a restored session eagerly.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::AuthenticationExpired`] if there is no
    /// session or the refresh is rejected (the session is torn down).
    pub async fn refresh_session(&self) -> Result<(), ApiError> {
        let Some(session) = self.http.session().await else {
            return Err(ApiError::AuthenticationExpired {
                reason: String::from("no session to refresh"),
            });
        };
        self.http.refresh_access_token(&session.access_token).await
    }

    /// Checks whether a token is still accepted by the server.
    ///
    /// # Errors
    ///
    /// Returns transport errors; a rejected token is `Ok(false)`, not
    /// an error.
    pub async fn verify_token(&self, token: &str) -> Result<bool, ApiError> {
        let body = encode(&TokenVerifyRequest {
            token: token.to_string(),
        })?;
        match self
            .http
            .request_no_content(Method::POST, "/token/verify/", Some(body), Auth::None)
            .await
        {
            Ok(()) => Ok(true),
            Err(
                ApiError::AuthenticationExpired { .. }
                | ApiError::Unauthorized { .. }
                | ApiError::InvalidInput { .. },
            ) => Ok(false),
            Err(other) => Err(other),
        }
    }

    /// Signs out of the current session.
    ///
    /// The server-side invalidation is best-effort; local credentials
    /// are cleared regardless of its outcome.
    pub async fn logout(&self) {
        if let Some(session) = self.http.session().await {
            let invalidate = async {
                let body = encode(&LogoutRequest {
                    refresh: session.refresh_token.clone(),
                })?;
                self.http
                    .request_no_content(Method::POST, "/logout/", Some(body), Auth::Session)
                    .await
            };
            if let Err(err) = invalidate.await {
                warn!(error = %err, "Server-side logout failed, clearing local session anyway");
            }
        }
        self.http.teardown_session().await;
    }

    /// Signs out of every session of this account, on every device.
    ///
    /// Local credentials are cleared even when the server call fails;
    /// the failure is still returned so the caller can tell the user.
    ///
    /// # Errors
    ///
    /// Returns the server or transport error of the invalidation call.
    pub async fn logout_all(&self) -> Result<(), ApiError> {
        let result = self
            .http
            .request_no_content(Method::POST, "/logout-all/", None, Auth::Session)
            .await;
        self.http.teardown_session().await;
        result
    }
}
