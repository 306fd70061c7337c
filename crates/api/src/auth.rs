// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authenticated identity types.
//!
//! The server authenticates users and returns their identity alongside
//! the token pair at login. The client denormalizes that identity into
//! an [`AuthenticatedUser`] and passes it explicitly to every component
//! that needs it; nothing reads identity from ambient state.

use crate::request_response::UserIdentity;
use room_booking_domain::Role;

/// An authenticated user with an associated role.
///
/// This is the viewer the action policy and view model reason about.
/// It is a denormalized snapshot taken at login (or refresh) time; the
/// server remains the source of truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The server-assigned user id.
    pub id: i64,
    /// The login username.
    pub username: String,
    /// The account email address.
    pub email: String,
    /// The role assigned to this user.
    pub role: Role,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    ///
    /// # Arguments
    ///
    /// * `id` - The server-assigned user id
    /// * `username` - The login username
    /// * `email` - The account email address
    /// * `role` - The role assigned to this user
    #[must_use]
    pub const fn new(id: i64, username: String, email: String, role: Role) -> Self {
        Self {
            id,
            username,
            email,
            role,
        }
    }

    /// Builds an authenticated user from the identity payload returned
    /// by the authentication API.
    ///
    /// Falls back to the email address when the payload carries no
    /// username.
    #[must_use]
    pub fn from_identity(identity: &UserIdentity) -> Self {
        let username: String = identity
            .username
            .clone()
            .unwrap_or_else(|| identity.email.clone());
        Self::new(identity.id, username, identity.email.clone(), identity.role)
    }

    /// Returns true if this user owns the booking with the given owner
    /// id.
    #[must_use]
    pub fn is_owner_of(&self, owner_id: i64) -> bool {
        self.id == owner_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_identity_uses_username_when_present() {
        let identity = UserIdentity {
            id: 42,
            username: Some(String::from("jdoe")),
            email: String::from("jdoe@example.com"),
            first_name: None,
            last_name: None,
            role: Role::User,
        };

        let user = AuthenticatedUser::from_identity(&identity);
        assert_eq!(user.id, 42);
        assert_eq!(user.username, "jdoe");
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn test_from_identity_falls_back_to_email() {
        let identity = UserIdentity {
            id: 7,
            username: None,
            email: String::from("m@example.com"),
            first_name: None,
            last_name: None,
            role: Role::Manager,
        };

        let user = AuthenticatedUser::from_identity(&identity);
        assert_eq!(user.username, "m@example.com");
    }

    #[test]
    fn test_ownership_check() {
        let user = AuthenticatedUser::new(
            5,
            String::from("owner"),
            String::from("owner@example.com"),
            Role::User,
        );

        assert!(user.is_owner_of(5));
        assert!(!user.is_owner_of(9));
    }
}
