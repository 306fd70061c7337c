// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The request layer.
//!
//! Every call shares one `reqwest` client with a single timeout
//! budget. Authenticated requests carry the session's bearer token; a
//! 401 triggers at most one refresh-and-retry, and concurrent 401s are
//! deduplicated behind an in-flight guard so only one refresh call
//! reaches the server per expiry. A failed refresh tears the session
//! down and surfaces as an authentication-expired error.

use crate::config::ClientConfig;
use crate::session::{Session, SessionStore, SessionStoreError};
use reqwest::{Method, Response, StatusCode};
use room_booking_api::{ApiError, TokenRefreshRequest, TokenRefreshResponse};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

/// Whether a request is made with the session's bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Auth {
    /// Attach the access token and refresh-and-retry on 401.
    Session,
    /// Send without credentials (login, refresh, verify).
    None,
}

/// Shared HTTP plumbing for all API modules.
pub(crate) struct HttpClient {
    http: reqwest::Client,
    base_url: String,
    store: SessionStore,
    session: RwLock<Option<Session>>,
    refresh_gate: Mutex<()>,
}

impl HttpClient {
    /// Builds the client and loads any persisted session.
    ///
    /// This is the single point where persisted storage is read; from
    /// here on the in-memory session is authoritative and written
    /// through on every change.
    pub(crate) fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| ApiError::Internal {
                message: format!("Failed to build HTTP client: {err}"),
            })?;
        let store = SessionStore::new(config.session_path.clone());
        let session: Option<Session> = store.load().map_err(translate_storage_error)?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            store,
            session: RwLock::new(session),
            refresh_gate: Mutex::new(()),
        })
    }

    /// Returns a snapshot of the current session, if any.
    pub(crate) async fn session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    /// Installs and persists a new session.
    pub(crate) async fn install_session(&self, session: Session) -> Result<(), ApiError> {
        self.store
            .save(&session)
            .map_err(translate_storage_error)?;
        *self.session.write().await = Some(session);
        Ok(())
    }

    /// Clears the session from memory and storage.
    ///
    /// Best-effort on the storage side: the in-memory session is gone
    /// either way, which is what logout teardown needs.
    pub(crate) async fn teardown_session(&self) {
        if let Err(err) = self.store.clear() {
            warn!(error = %err, "Failed to remove persisted session");
        }
        *self.session.write().await = None;
    }

    /// Performs a request and decodes the JSON response body.
    pub(crate) async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<serde_json::Value>,
        auth: Auth,
    ) -> Result<T, ApiError> {
        let response = self.request(method, path, query, body, auth).await?;
        decode(response).await
    }

    /// Performs a request and discards the response body.
    pub(crate) async fn request_no_content(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        auth: Auth,
    ) -> Result<(), ApiError> {
        self.request(method, path, &[], body, auth).await?;
        Ok(())
    }

    /// Performs a request, handling authentication and error
    /// translation, and returns the successful response.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<serde_json::Value>,
        auth: Auth,
    ) -> Result<Response, ApiError> {
        let token: Option<String> = match auth {
            Auth::Session => self
                .session
                .read()
                .await
                .as_ref()
                .map(|s| s.access_token.clone()),
            Auth::None => None,
        };

        let response = self
            .dispatch(method.clone(), path, query, body.as_ref(), token.as_deref())
            .await?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return ensure_success(response).await;
        }
        let (Auth::Session, Some(stale_token)) = (auth, token) else {
            // Credential-less call rejected; nothing to refresh.
            return Err(translate_status(response).await);
        };

        // One refresh, then one retry. A second 401 means the session
        // is beyond saving.
        self.refresh_access_token(&stale_token).await?;
        let fresh_token: Option<String> = self
            .session
            .read()
            .await
            .as_ref()
            .map(|s| s.access_token.clone());
        let Some(fresh_token) = fresh_token else {
            return Err(ApiError::AuthenticationExpired {
                reason: String::from("session disappeared during token refresh"),
            });
        };

        let retried = self
            .dispatch(method, path, query, body.as_ref(), Some(&fresh_token))
            .await?;
        if retried.status() == StatusCode::UNAUTHORIZED {
            warn!("Server rejected a freshly refreshed token, tearing session down");
            self.teardown_session().await;
            return Err(ApiError::AuthenticationExpired {
                reason: String::from("the server rejected a freshly refreshed token"),
            });
        }
        ensure_success(retried).await
    }

    /// Sends one HTTP request without any retry logic.
    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<&serde_json::Value>,
        token: Option<&str>,
    ) -> Result<Response, ApiError> {
        let mut builder = self.http.request(method, format!("{}{path}", self.base_url));
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        builder.send().await.map_err(translate_transport_error)
    }

    /// Exchanges the refresh token for a new access token.
    ///
    /// Serialized behind a gate so concurrent expired-token failures
    /// produce a single refresh call: whoever waits on the gate
    /// re-checks the session afterwards and skips the network round
    /// trip when the token already changed. Any refresh failure tears
    /// the session down.
    pub(crate) async fn refresh_access_token(&self, stale_token: &str) -> Result<(), ApiError> {
        let _guard = self.refresh_gate.lock().await;

        let refresh_token: String = {
            let session = self.session.read().await;
            match session.as_ref() {
                None => {
                    return Err(ApiError::AuthenticationExpired {
                        reason: String::from("no session to refresh"),
                    });
                }
                // Another caller refreshed while this one waited.
                Some(current) if current.access_token != stale_token => return Ok(()),
                Some(current) => current.refresh_token.clone(),
            }
        };

        debug!("Access token rejected, attempting refresh");
        let request_body =
            serde_json::to_value(TokenRefreshRequest {
                refresh: refresh_token,
            })
            .map_err(|err| ApiError::Internal {
                message: format!("Failed to encode refresh request: {err}"),
            })?;

        let response = match self
            .dispatch(Method::POST, "/token/refresh/", &[], Some(&request_body), None)
            .await
        {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "Token refresh failed, tearing session down");
                self.teardown_session().await;
                return Err(ApiError::AuthenticationExpired {
                    reason: err.to_string(),
                });
            }
        };
        if !response.status().is_success() {
            let status = response.status();
            warn!(status = status.as_u16(), "Token refresh rejected, tearing session down");
            self.teardown_session().await;
            return Err(ApiError::AuthenticationExpired {
                reason: format!("refresh rejected with HTTP {}", status.as_u16()),
            });
        }

        let refreshed: TokenRefreshResponse = match decode(response).await {
            Ok(refreshed) => refreshed,
            Err(err) => {
                self.teardown_session().await;
                return Err(ApiError::AuthenticationExpired {
                    reason: err.to_string(),
                });
            }
        };

        let mut session = self.session.write().await;
        if let Some(current) = session.as_mut() {
            current.access_token = refreshed.access;
            self.store.save(current).map_err(translate_storage_error)?;
            debug!("Access token refreshed");
        }
        Ok(())
    }
}

/// Decodes a JSON response body.
pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::MalformedRecord {
            message: format!("Failed to decode response body: {err}"),
        })
}

/// Encodes a request body as a JSON value.
pub(crate) fn encode<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|err| ApiError::Internal {
        message: format!("Failed to encode request body: {err}"),
    })
}

/// Passes successful responses through and translates the rest.
async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(translate_status(response).await)
    }
}

/// Translates a non-success HTTP response into the error taxonomy.
async fn translate_status(response: Response) -> ApiError {
    let status: StatusCode = response.status();
    let body: String = response.text().await.unwrap_or_default();
    let message: String = extract_message(status, &body);

    match status {
        StatusCode::BAD_REQUEST => ApiError::InvalidInput {
            field: String::from("request"),
            message,
        },
        StatusCode::UNAUTHORIZED => ApiError::AuthenticationExpired { reason: message },
        StatusCode::FORBIDDEN => ApiError::Unauthorized { message },
        StatusCode::NOT_FOUND => ApiError::NotFound { message },
        StatusCode::CONFLICT => ApiError::Conflict { message },
        status if status.is_server_error() => ApiError::Network { message },
        _ => ApiError::Internal { message },
    }
}

/// Translates a transport failure (connect error, timeout) into the
/// retryable network class.
fn translate_transport_error(err: reqwest::Error) -> ApiError {
    let message: String = if err.is_timeout() {
        String::from("the request timed out")
    } else {
        err.to_string()
    };
    ApiError::Network { message }
}

/// Translates a session storage failure.
fn translate_storage_error(err: SessionStoreError) -> ApiError {
    ApiError::Internal {
        message: err.to_string(),
    }
}

/// Pulls a one-line human-readable message out of an error body.
///
/// The server answers with JSON of varying shapes: `{"detail": …}` on
/// auth and not-found errors, `{"field": ["msg", …]}` on validation
/// errors. Falls back to the raw body, then to the status line.
fn extract_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["detail", "message", "error"] {
            if let Some(text) = value.get(key).and_then(serde_json::Value::as_str) {
                return text.to_string();
            }
        }
        if let Some(object) = value.as_object() {
            for (field, entry) in object {
                let text = match entry {
                    serde_json::Value::String(text) => Some(text.clone()),
                    serde_json::Value::Array(items) => items
                        .first()
                        .and_then(serde_json::Value::as_str)
                        .map(ToString::to_string),
                    _ => None,
                };
                if let Some(text) = text {
                    return format!("{field}: {text}");
                }
            }
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() && trimmed.len() <= 200 {
        return trimmed.to_string();
    }
    format!(
        "HTTP {} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("error")
    )
}
