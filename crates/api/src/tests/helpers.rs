// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{AuthenticatedUser, BookingRecord};
use chrono::NaiveDate;
use room_booking_domain::{BookingStatus, Role};

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
}

pub fn yesterday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 5).unwrap()
}

pub fn tomorrow() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
}

pub fn create_test_user(id: i64) -> AuthenticatedUser {
    AuthenticatedUser::new(
        id,
        format!("user{id}"),
        format!("user{id}@example.com"),
        Role::User,
    )
}

pub fn create_test_manager(id: i64) -> AuthenticatedUser {
    AuthenticatedUser::new(
        id,
        format!("manager{id}"),
        format!("manager{id}@example.com"),
        Role::Manager,
    )
}

pub fn create_test_admin(id: i64) -> AuthenticatedUser {
    AuthenticatedUser::new(
        id,
        format!("admin{id}"),
        format!("admin{id}@example.com"),
        Role::Admin,
    )
}

pub fn create_test_booking(
    id: i64,
    owner: i64,
    status: BookingStatus,
    date: NaiveDate,
) -> BookingRecord {
    BookingRecord {
        id: Some(id),
        date_booking: Some(date),
        start_datetime: Some(format!("{date}T09:00:00")),
        end_datetime: Some(format!("{date}T10:00:00")),
        duration_minutes: Some(60),
        manager: Some(owner),
        room: Some(3),
        room_name: Some(String::from("Boardroom")),
        status: Some(status),
        ..BookingRecord::default()
    }
}
