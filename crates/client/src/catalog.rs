// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog operations: rooms, locations, resources and user accounts.
//!
//! Plain CRUD against the respective endpoints. Role-gating of these
//! screens is the embedding UI's concern; the server enforces the
//! actual permissions.

use crate::client::BookingClient;
use crate::http::{Auth, encode};
use reqwest::Method;
use room_booking_api::{
    ApiError, ChangePasswordRequest, LocationPayload, LocationRecord, Paginated, ResourcePayload,
    ResourceRecord, RoomPayload, RoomRecord, UserPayload, UserProfileUpdate, UserRecord,
    UserRegistration,
};

/// Renders an optional page number as query pairs.
fn page_query(page: Option<u32>) -> Vec<(&'static str, String)> {
    page.map(|p| ("page", p.to_string())).into_iter().collect()
}

impl BookingClient {
    // ====================================================================
    // Rooms
    // ====================================================================

    /// Lists rooms.
    ///
    /// # Errors
    ///
    /// Returns any server or transport error.
    pub async fn list_rooms(&self, page: Option<u32>) -> Result<Paginated<RoomRecord>, ApiError> {
        self.http
            .request_json(Method::GET, "/room/", &page_query(page), None, Auth::Session)
            .await
    }

    /// Fetches a room by id.
    ///
    /// # Errors
    ///
    /// Returns any server or transport error.
    pub async fn get_room(&self, id: i64) -> Result<RoomRecord, ApiError> {
        self.http
            .request_json(Method::GET, &format!("/room/{id}/"), &[], None, Auth::Session)
            .await
    }

    /// Creates a room.
    ///
    /// # Errors
    ///
    /// Returns any server or transport error.
    pub async fn create_room(&self, payload: &RoomPayload) -> Result<RoomRecord, ApiError> {
        self.http
            .request_json(
                Method::POST,
                "/room/",
                &[],
                Some(encode(payload)?),
                Auth::Session,
            )
            .await
    }

    /// Updates a room.
    ///
    /// # Errors
    ///
    /// Returns any server or transport error.
    pub async fn update_room(&self, id: i64, payload: &RoomPayload) -> Result<RoomRecord, ApiError> {
        self.http
            .request_json(
                Method::PATCH,
                &format!("/room/{id}/"),
                &[],
                Some(encode(payload)?),
                Auth::Session,
            )
            .await
    }

    /// Deletes a room.
    ///
    /// # Errors
    ///
    /// Returns any server or transport error.
    pub async fn delete_room(&self, id: i64) -> Result<(), ApiError> {
        self.http
            .request_no_content(Method::DELETE, &format!("/room/{id}/"), None, Auth::Session)
            .await
    }

    // ====================================================================
    // Locations
    // ====================================================================

    /// Lists locations.
    ///
    /// # Errors
    ///
    /// Returns any server or transport error.
    pub async fn list_locations(
        &self,
        page: Option<u32>,
    ) -> Result<Paginated<LocationRecord>, ApiError> {
        self.http
            .request_json(
                Method::GET,
                "/location/",
                &page_query(page),
                None,
                Auth::Session,
            )
            .await
    }

    /// Fetches a location by id.
    ///
    /// # Errors
    ///
    /// Returns any server or transport error.
    pub async fn get_location(&self, id: i64) -> Result<LocationRecord, ApiError> {
        self.http
            .request_json(
                Method::GET,
                &format!("/location/{id}/"),
                &[],
                None,
                Auth::Session,
            )
            .await
    }

    /// Creates a location.
    ///
    /// # Errors
    ///
    /// Returns any server or transport error.
    pub async fn create_location(
        &self,
        payload: &LocationPayload,
    ) -> Result<LocationRecord, ApiError> {
        self.http
            .request_json(
                Method::POST,
                "/location/",
                &[],
                Some(encode(payload)?),
                Auth::Session,
            )
            .await
    }

    /// Updates a location.
    ///
    /// # Errors
    ///
    /// Returns any server or transport error.
    pub async fn update_location(
        &self,
        id: i64,
        payload: &LocationPayload,
    ) -> Result<LocationRecord, ApiError> {
        self.http
            .request_json(
                Method::PATCH,
                &format!("/location/{id}/"),
                &[],
                Some(encode(payload)?),
                Auth::Session,
            )
            .await
    }

    /// Deletes a location.
    ///
    /// # Errors
    ///
    /// Returns any server or transport error.
    pub async fn delete_location(&self, id: i64) -> Result<(), ApiError> {
        self.http
            .request_no_content(
                Method::DELETE,
                &format!("/location/{id}/"),
                None,
                Auth::Session,
            )
            .await
    }

    // ====================================================================
    // Resources
    // ====================================================================

    /// Lists resources.
    ///
    /// # Errors
    ///
    /// Returns any server or transport error.
    pub async fn list_resources(
        &self,
        page: Option<u32>,
    ) -> Result<Paginated<ResourceRecord>, ApiError> {
        self.http
            .request_json(
                Method::GET,
                "/resource/",
                &page_query(page),
                None,
                Auth::Session,
            )
            .await
    }

    /// Fetches a resource by id.
    ///
    /// # Errors
    ///
    /// Returns any server or transport error.
    pub async fn get_resource(&self, id: i64) -> Result<ResourceRecord, ApiError> {
        self.http
            .request_json(
                Method::GET,
                &format!("/resource/{id}/"),
                &[],
                None,
                Auth::Session,
            )
            .await
    }

    /// Creates a resource.
    ///
    /// # Errors
    ///
    /// Returns any server or transport error.
    pub async fn create_resource(
        &self,
        payload: &ResourcePayload,
    ) -> Result<ResourceRecord, ApiError> {
        self.http
            .request_json(
                Method::POST,
                "/resource/",
                &[],
                Some(encode(payload)?),
                Auth::Session,
            )
            .await
    }

    /// Updates a resource.
    ///
    /// # Errors
    ///
    /// Returns any server or transport error.
    pub async fn update_resource(
        &self,
        id: i64,
        payload: &ResourcePayload,
    ) -> Result<ResourceRecord, ApiError> {
        self.http
            .request_json(
                Method::PATCH,
                &format!("/resource/{id}/"),
                &[],
                Some(encode(payload)?),
                Auth::Session,
            )
            .await
    }

    /// Deletes a resource.
    ///
    /// # Errors
    ///
    /// Returns any server or transport error.
    pub async fn delete_resource(&self, id: i64) -> Result<(), ApiError> {
        self.http
            .request_no_content(
                Method::DELETE,
                &format!("/resource/{id}/"),
                None,
                Auth::Session,
            )
            .await
    }

    // ====================================================================
    // User accounts
    // ====================================================================

    /// Registers a new account. Unauthenticated; new accounts get the
    /// `user` role server-side.
    ///
    /// # Errors
    ///
    /// Returns any server or transport error.
    pub async fn register_user(&self, payload: &UserRegistration) -> Result<UserRecord, ApiError> {
        self.http
            .request_json(
                Method::POST,
                "/users/register/",
                &[],
                Some(encode(payload)?),
                Auth::None,
            )
            .await
    }

    /// Lists user accounts.
    ///
    /// # Errors
    ///
    /// Returns any server or transport error.
    pub async fn list_users(&self, page: Option<u32>) -> Result<Paginated<UserRecord>, ApiError> {
        self.http
            .request_json(Method::GET, "/users/", &page_query(page), None, Auth::Session)
            .await
    }

    /// Fetches a user account by id.
    ///
    /// # Errors
    ///
    /// Returns any server or transport error.
    pub async fn get_user(&self, id: i64) -> Result<UserRecord, ApiError> {
        self.http
            .request_json(
                Method::GET,
                &format!("/users/{id}/"),
                &[],
                None,
                Auth::Session,
            )
            .await
    }

    /// Fetches the authenticated user's own account record.
    ///
    /// # Errors
    ///
    /// Returns any server or transport error.
    pub async fn current_user_account(&self) -> Result<UserRecord, ApiError> {
        self.http
            .request_json(Method::GET, "/users/me/", &[], None, Auth::Session)
            .await
    }

    /// Updates the authenticated user's own profile.
    ///
    /// # Errors
    ///
    /// Returns any server or transport error.
    pub async fn update_profile(&self, payload: &UserProfileUpdate) -> Result<UserRecord, ApiError> {
        self.http
            .request_json(
                Method::PATCH,
                "/users/me/",
                &[],
                Some(encode(payload)?),
                Auth::Session,
            )
            .await
    }

    /// Changes the authenticated user's password.
    ///
    /// # Errors
    ///
    /// Returns any server or transport error.
    pub async fn change_password(&self, payload: &ChangePasswordRequest) -> Result<(), ApiError> {
        self.http
            .request_no_content(
                Method::POST,
                "/users/change_password/",
                Some(encode(payload)?),
                Auth::Session,
            )
            .await
    }

    /// Creates a user account through the administrative endpoint.
    ///
    /// # Errors
    ///
    /// Returns any server or transport error.
    pub async fn create_user(&self, payload: &UserPayload) -> Result<UserRecord, ApiError> {
        self.http
            .request_json(
                Method::POST,
                "/users/",
                &[],
                Some(encode(payload)?),
                Auth::Session,
            )
            .await
    }

    /// Updates a user account through the administrative endpoint.
    ///
    /// # Errors
    ///
    /// Returns any server or transport error.
    pub async fn update_user(&self, id: i64, payload: &UserPayload) -> Result<UserRecord, ApiError> {
        self.http
            .request_json(
                Method::PATCH,
                &format!("/users/{id}/"),
                &[],
                Some(encode(payload)?),
                Auth::Session,
            )
            .await
    }

    /// Deletes a user account through the administrative endpoint.
    ///
    /// # Errors
    ///
    /// Returns any server or transport error.
    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.http
            .request_no_content(Method::DELETE, &format!("/users/{id}/"), None, Auth::Session)
            .await
    }
}
