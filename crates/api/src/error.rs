// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API boundary.
//!
//! Every failure a screen can see is one of these variants, each
//! carrying a kind and a human-readable message. Local validation
//! errors never reach the network; server-originated errors pass
//! through with enough structure for a one-line user-facing message.

use room_booking_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain errors and represent the client's
/// error taxonomy: what failed, whether it is worth retrying, and what
/// the user can do about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input caught locally before submission.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The server refused the action (HTTP 403).
    Unauthorized {
        /// A human-readable description of the refusal.
        message: String,
    },
    /// The requested record does not exist (HTTP 404).
    NotFound {
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The requested slot is unavailable (server-reported conflict on
    /// create or update).
    Conflict {
        /// The server's conflict message, passed through verbatim.
        message: String,
    },
    /// The session could not be kept alive: the access token expired
    /// and the refresh attempt failed. Local credentials are cleared
    /// before this is returned.
    AuthenticationExpired {
        /// Why the session ended.
        reason: String,
    },
    /// The request never completed (connect failure, timeout). The only
    /// retryable class; retries are user-initiated.
    Network {
        /// A human-readable description of the failure.
        message: String,
    },
    /// A fetched record is missing required fields.
    MalformedRecord {
        /// A human-readable description of what is missing.
        message: String,
    },
    /// An unexpected client-side failure (storage, decoding).
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Returns the stable kind tag for this error.
    ///
    /// Screens key one-line rendering and telemetry off this tag.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "invalid_input",
            Self::Unauthorized { .. } => "unauthorized",
            Self::NotFound { .. } => "not_found",
            Self::Conflict { .. } => "conflict",
            Self::AuthenticationExpired { .. } => "authentication_expired",
            Self::Network { .. } => "network",
            Self::MalformedRecord { .. } => "malformed_record",
            Self::Internal { .. } => "internal",
        }
    }

    /// Returns true if retrying the same request may succeed.
    ///
    /// Only network failures qualify; everything else needs a changed
    /// input, a new session, or server-side action first.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Unauthorized { message } => {
                write!(f, "Not permitted: {message}")
            }
            Self::NotFound { message } => {
                write!(f, "Not found: {message}")
            }
            Self::Conflict { message } => {
                write!(f, "Slot unavailable: {message}")
            }
            Self::AuthenticationExpired { reason } => {
                write!(f, "Session expired: {reason}")
            }
            Self::Network { message } => {
                write!(f, "Network failure: {message}")
            }
            Self::MalformedRecord { message } => {
                write!(f, "Malformed record: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not
/// leaked directly: range and coffee-break violations become
/// field-tagged input errors, parse failures become malformed-record
/// errors.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match &err {
        DomainError::DateInPast { .. }
        | DomainError::TimeOffGrid { .. }
        | DomainError::EndNotAfterStart { .. } => ApiError::InvalidInput {
            field: err
                .field()
                .map_or_else(|| String::from("range"), |f| f.as_str().to_string()),
            message: err.to_string(),
        },
        DomainError::CoffeeBreakHeadcountMissing
        | DomainError::CoffeeBreakHeadcountNotPositive { .. }
        | DomainError::CoffeeBreakHeadcountWithoutFlag { .. } => ApiError::InvalidInput {
            field: String::from("coffee_break_headcount"),
            message: err.to_string(),
        },
        DomainError::InvalidStatusTransition { .. } => ApiError::InvalidInput {
            field: String::from("status"),
            message: err.to_string(),
        },
        DomainError::UnparsableTime { .. }
        | DomainError::InvalidStatus { .. }
        | DomainError::InvalidRole { .. } => ApiError::MalformedRecord {
            message: err.to_string(),
        },
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err)
    }
}
