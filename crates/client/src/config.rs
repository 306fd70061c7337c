// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default base URL of the booking API.
const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Single timeout budget for every network call, in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default file name for the persisted session.
const DEFAULT_SESSION_FILE: &str = ".room-booking-session.json";

/// Client configuration, read once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the booking API, without a trailing slash.
    pub base_url: String,
    /// Timeout applied to every request. Calls that exceed it fail
    /// with a retryable network error; there is no automatic retry.
    pub timeout: Duration,
    /// Path of the persisted session file.
    pub session_path: PathBuf,
}

impl ClientConfig {
    /// Builds a configuration for the given base URL with defaults for
    /// everything else.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url: String = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            session_path: PathBuf::from(DEFAULT_SESSION_FILE),
        }
    }

    /// Reads the configuration from the environment.
    ///
    /// Recognized variables, all optional:
    ///
    /// - `ROOM_BOOKING_API_URL` - base URL of the booking API
    /// - `ROOM_BOOKING_TIMEOUT_SECS` - request timeout in seconds
    /// - `ROOM_BOOKING_SESSION_FILE` - path of the session file
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::new(
            env::var("ROOM_BOOKING_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        );
        if let Some(secs) = env::var("ROOM_BOOKING_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }
        if let Ok(path) = env::var("ROOM_BOOKING_SESSION_FILE") {
            config.session_path = PathBuf::from(path);
        }
        config
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
