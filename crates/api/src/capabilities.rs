// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capability computation for authorization-aware UI gating.
//!
//! Capabilities expose what actions a viewer is permitted to take on a
//! booking without leaking policy conditionals into screens. They are
//! advisory only and do not replace server-side authorization checks.
//!
//! The computation is total and side-effect-free: every combination of
//! role, ownership and status produces a defined capability set.

use crate::auth::AuthenticatedUser;
use room_booking_domain::{BookingStatus, Role};

/// Represents whether a specific action is permitted.
///
/// This enum provides better type safety than raw booleans and
/// serializes to JSON as true/false for UI consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// The action is permitted.
    Allowed,
    /// The action is not permitted.
    Denied,
}

impl Capability {
    /// Returns true if the capability is allowed.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Creates a capability from a boolean value.
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::Allowed } else { Self::Denied }
    }
}

impl serde::Serialize for Capability {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_bool(matches!(self, Self::Allowed))
    }
}

impl<'de> serde::Deserialize<'de> for Capability {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let b = bool::deserialize(deserializer)?;
        Ok(Self::from_bool(b))
    }
}

/// Actions a viewer can take on a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingAction {
    /// See the booking in lists and detail views.
    View,
    /// Change the booking's date, time, room or coffee-break fields.
    Edit,
    /// Cancel the booking as its owner.
    Cancel,
    /// Approve a pending booking.
    Confirm,
    /// Reject a pending booking (a cancel with moderation semantics).
    Reject,
}

impl BookingAction {
    /// Returns the action name used in logs and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Edit => "edit",
            Self::Cancel => "cancel",
            Self::Confirm => "confirm",
            Self::Reject => "reject",
        }
    }
}

/// Policy switches that are business decisions rather than invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyOptions {
    /// Whether admins may confirm/reject pending bookings in addition
    /// to managers. The booking service grants moderation to managers
    /// only; admins moderate nothing despite their broader catalog
    /// access. Off by default to match the service.
    pub admin_moderates: bool,
}

impl Default for PolicyOptions {
    fn default() -> Self {
        Self {
            admin_moderates: false,
        }
    }
}

/// Per-booking capabilities for a viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookingCapabilities {
    /// Whether the viewer sees this booking at all.
    pub can_view: Capability,
    /// Whether the viewer may edit this booking.
    pub can_edit: Capability,
    /// Whether the viewer may cancel this booking.
    pub can_cancel: Capability,
    /// Whether the viewer may confirm this booking.
    pub can_confirm: Capability,
    /// Whether the viewer may reject this booking.
    pub can_reject: Capability,
}

impl BookingCapabilities {
    /// The empty capability set.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            can_view: Capability::Denied,
            can_edit: Capability::Denied,
            can_cancel: Capability::Denied,
            can_confirm: Capability::Denied,
            can_reject: Capability::Denied,
        }
    }

    /// Returns whether a specific action is permitted.
    #[must_use]
    pub const fn permits(&self, action: BookingAction) -> bool {
        match action {
            BookingAction::View => self.can_view.is_allowed(),
            BookingAction::Edit => self.can_edit.is_allowed(),
            BookingAction::Cancel => self.can_cancel.is_allowed(),
            BookingAction::Confirm => self.can_confirm.is_allowed(),
            BookingAction::Reject => self.can_reject.is_allowed(),
        }
    }

    /// Returns the permitted actions in display order.
    #[must_use]
    pub fn permitted_actions(&self) -> Vec<BookingAction> {
        [
            BookingAction::View,
            BookingAction::Edit,
            BookingAction::Cancel,
            BookingAction::Confirm,
            BookingAction::Reject,
        ]
        .into_iter()
        .filter(|action| self.permits(*action))
        .collect()
    }
}

/// Computes the capabilities a viewer has on a booking.
///
/// Rules, in order:
///
/// - `view`: privileged roles (`admin`, `manager`) see every booking;
///   a plain `user` sees only their own.
/// - `edit`/`cancel`: the owner only, and only while the booking is
///   `pending` or `confirmed`. A manager or admin who is not the owner
///   cannot edit or cancel someone else's booking; their control
///   surface is confirm/reject.
/// - `confirm`/`reject`: managers only (admins too when
///   [`PolicyOptions::admin_moderates`] is set), and only while the
///   booking is `pending`.
/// - once the status is terminal (`cancelled`/`completed`), nothing but
///   `view` remains.
///
/// # Arguments
///
/// * `viewer` - The authenticated viewer
/// * `owner_id` - The id of the booking's owner
/// * `status` - The booking's current status
/// * `options` - Policy switches
///
/// # Returns
///
/// A [`BookingCapabilities`] struct with all capability flags set.
#[must_use]
pub fn compute_booking_capabilities(
    viewer: &AuthenticatedUser,
    owner_id: i64,
    status: BookingStatus,
    options: PolicyOptions,
) -> BookingCapabilities {
    let is_owner: bool = viewer.is_owner_of(owner_id);

    let can_view = Capability::from_bool(viewer.role.is_privileged() || is_owner);

    // Owner-side actions survive until the booking is terminal.
    let owner_mutable: bool = is_owner && status.is_mutable();
    let can_edit = Capability::from_bool(owner_mutable);
    let can_cancel = Capability::from_bool(owner_mutable);

    // Moderation applies to pending bookings only.
    let moderates: bool = match viewer.role {
        Role::Manager => true,
        Role::Admin => options.admin_moderates,
        Role::User => false,
    };
    let moderation_open: bool = moderates && status == BookingStatus::Pending;
    let can_confirm = Capability::from_bool(moderation_open);
    let can_reject = Capability::from_bool(moderation_open);

    BookingCapabilities {
        can_view,
        can_edit,
        can_cancel,
        can_confirm,
        can_reject,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use room_booking_domain::Role;

    fn user(id: i64) -> AuthenticatedUser {
        AuthenticatedUser::new(
            id,
            format!("user{id}"),
            format!("user{id}@example.com"),
            Role::User,
        )
    }

    fn manager(id: i64) -> AuthenticatedUser {
        AuthenticatedUser::new(
            id,
            format!("manager{id}"),
            format!("manager{id}@example.com"),
            Role::Manager,
        )
    }

    fn admin(id: i64) -> AuthenticatedUser {
        AuthenticatedUser::new(
            id,
            format!("admin{id}"),
            format!("admin{id}@example.com"),
            Role::Admin,
        )
    }

    #[test]
    fn test_owner_of_pending_booking_can_edit_and_cancel() {
        let caps = compute_booking_capabilities(
            &user(42),
            42,
            BookingStatus::Pending,
            PolicyOptions::default(),
        );

        assert!(caps.can_view.is_allowed());
        assert!(caps.can_edit.is_allowed());
        assert!(caps.can_cancel.is_allowed());
        assert!(!caps.can_confirm.is_allowed());
        assert!(!caps.can_reject.is_allowed());
    }

    #[test]
    fn test_owner_of_confirmed_booking_can_still_edit_and_cancel() {
        let caps = compute_booking_capabilities(
            &user(42),
            42,
            BookingStatus::Confirmed,
            PolicyOptions::default(),
        );

        assert!(caps.can_edit.is_allowed());
        assert!(caps.can_cancel.is_allowed());
        assert!(!caps.can_confirm.is_allowed());
    }

    #[test]
    fn test_non_owner_user_sees_nothing() {
        let caps = compute_booking_capabilities(
            &user(9),
            42,
            BookingStatus::Pending,
            PolicyOptions::default(),
        );

        assert_eq!(caps, BookingCapabilities::none());
    }

    #[test]
    fn test_manager_moderates_pending_but_cannot_edit() {
        let caps = compute_booking_capabilities(
            &manager(7),
            42,
            BookingStatus::Pending,
            PolicyOptions::default(),
        );

        assert!(caps.can_view.is_allowed());
        assert!(!caps.can_edit.is_allowed());
        assert!(!caps.can_cancel.is_allowed());
        assert!(caps.can_confirm.is_allowed());
        assert!(caps.can_reject.is_allowed());
    }

    #[test]
    fn test_manager_cannot_moderate_confirmed_booking() {
        let caps = compute_booking_capabilities(
            &manager(7),
            42,
            BookingStatus::Confirmed,
            PolicyOptions::default(),
        );

        assert!(caps.can_view.is_allowed());
        assert!(!caps.can_confirm.is_allowed());
        assert!(!caps.can_reject.is_allowed());
    }

    #[test]
    fn test_admin_does_not_moderate_by_default() {
        let caps = compute_booking_capabilities(
            &admin(1),
            42,
            BookingStatus::Pending,
            PolicyOptions::default(),
        );

        assert!(caps.can_view.is_allowed());
        assert!(!caps.can_confirm.is_allowed());
        assert!(!caps.can_reject.is_allowed());
    }

    #[test]
    fn test_admin_moderates_when_policy_allows() {
        let options = PolicyOptions {
            admin_moderates: true,
        };
        let caps = compute_booking_capabilities(&admin(1), 42, BookingStatus::Pending, options);

        assert!(caps.can_confirm.is_allowed());
        assert!(caps.can_reject.is_allowed());
    }

    #[test]
    fn test_owner_manager_keeps_owner_actions_on_own_booking() {
        // A manager who owns the booking gets both control surfaces.
        let caps = compute_booking_capabilities(
            &manager(7),
            7,
            BookingStatus::Pending,
            PolicyOptions::default(),
        );

        assert!(caps.can_edit.is_allowed());
        assert!(caps.can_cancel.is_allowed());
        assert!(caps.can_confirm.is_allowed());
    }

    #[test]
    fn test_terminal_statuses_leave_only_view() {
        for status in [BookingStatus::Cancelled, BookingStatus::Completed] {
            for viewer in [user(42), manager(7), admin(1)] {
                let caps = compute_booking_capabilities(
                    &viewer,
                    42,
                    status,
                    PolicyOptions {
                        admin_moderates: true,
                    },
                );

                assert!(!caps.can_edit.is_allowed());
                assert!(!caps.can_cancel.is_allowed());
                assert!(!caps.can_confirm.is_allowed());
                assert!(!caps.can_reject.is_allowed());
            }
        }
    }

    #[test]
    fn test_permitted_actions_listing() {
        let caps = compute_booking_capabilities(
            &user(5),
            5,
            BookingStatus::Pending,
            PolicyOptions::default(),
        );

        assert_eq!(
            caps.permitted_actions(),
            vec![
                BookingAction::View,
                BookingAction::Edit,
                BookingAction::Cancel
            ]
        );
    }

    #[test]
    fn test_capability_serializes_as_bool() {
        let caps = BookingCapabilities::none();
        let json = serde_json::to_value(caps).expect("serializable");
        assert_eq!(json["can_view"], serde_json::Value::Bool(false));
    }
}
