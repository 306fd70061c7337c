// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Viewer roles for authorization.
//!
//! Roles are assigned by the server and carried in the authenticated
//! identity. The client never invents or upgrades a role; it only uses
//! the role to decide what to render and which actions to offer.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Role of the viewing user.
///
/// Governs booking visibility and which lifecycle actions the client
/// offers. Enforcement remains server-side; the role here is advisory
/// UI gating only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Administrative access: sees every booking and manages the
    /// room/location/resource/user catalogs.
    Admin,
    /// Manager access: sees every booking and moderates pending ones
    /// (confirm/reject).
    Manager,
    /// Regular access: sees and manages only the user's own bookings.
    User,
}

impl Role {
    /// Returns the wire representation of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::User => "user",
        }
    }

    /// Returns true if this role sees all bookings rather than only its
    /// own.
    #[must_use]
    pub const fn is_privileged(self) -> bool {
        matches!(self, Self::Admin | Self::Manager)
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "user" => Ok(Self::User),
            _ => Err(DomainError::InvalidRole {
                role: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_role_string_round_trip() {
        for role in [Role::Admin, Role::Manager, Role::User] {
            let parsed: Role = role.as_str().parse().expect("valid role string");
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_invalid_role_string() {
        let result: Result<Role, DomainError> = "superuser".parse();
        assert!(matches!(result, Err(DomainError::InvalidRole { .. })));
    }

    #[test]
    fn test_privileged_roles() {
        assert!(Role::Admin.is_privileged());
        assert!(Role::Manager.is_privileged());
        assert!(!Role::User.is_privileged());
    }
}
