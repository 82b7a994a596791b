//! Test utilities for database tests (available with `test-utils` feature).
//!
//! Reservations and reviews are read-only for the data-access layer, so their fixtures are inserted
//! with plain SQL here.

use crate::db::handlers::{Properties, Repository, Users};
use crate::db::models::{
    properties::{PropertyCreateDBRequest, PropertyDBResponse},
    users::{UserCreateDBRequest, UserDBResponse},
};
use crate::types::{PropertyId, ReservationId, UserId};
use chrono::{Days, NaiveDate};
use sqlx::PgPool;

pub fn user_request(name: &str) -> UserCreateDBRequest {
    UserCreateDBRequest {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        password: "$2a$10$FB/BOAVhpuLvpOREQVmvmezD4ED/.JBIDRh70tGevYzYzQgFId2u.".to_string(),
    }
}

pub async fn create_test_user(pool: &PgPool, name: &str) -> UserDBResponse {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    Users::new(&mut conn)
        .create(&user_request(name))
        .await
        .expect("Failed to create test user")
}

pub fn property_request(owner_id: UserId, title: &str, city: &str, cost_per_night: i32) -> PropertyCreateDBRequest {
    PropertyCreateDBRequest {
        owner_id,
        title: title.to_string(),
        description: "description".to_string(),
        thumbnail_photo_url: "https://images.example.com/thumb.jpeg".to_string(),
        cover_photo_url: "https://images.example.com/cover.jpeg".to_string(),
        cost_per_night,
        parking_spaces: 1,
        number_of_bathrooms: 1,
        number_of_bedrooms: 2,
        country: "Canada".to_string(),
        street: "536 Namsub Highway".to_string(),
        city: city.to_string(),
        province: "Quebec".to_string(),
        post_code: "28142".to_string(),
    }
}

pub async fn create_test_property(pool: &PgPool, owner_id: UserId, city: &str, cost_per_night: i32) -> PropertyDBResponse {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    Properties::new(&mut conn)
        .create(&property_request(owner_id, &format!("Stay in {city}"), city, cost_per_night))
        .await
        .expect("Failed to create test property")
        .property
}

pub async fn create_test_reservation(
    pool: &PgPool,
    guest_id: UserId,
    property_id: PropertyId,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> ReservationId {
    sqlx::query_scalar::<_, ReservationId>(
        "INSERT INTO reservations (guest_id, property_id, start_date, end_date) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(guest_id)
    .bind(property_id)
    .bind(start_date)
    .bind(end_date)
    .fetch_one(pool)
    .await
    .expect("Failed to create test reservation")
}

pub async fn create_test_review(pool: &PgPool, guest_id: UserId, property_id: PropertyId, rating: i16) {
    sqlx::query("INSERT INTO property_reviews (guest_id, property_id, rating, message) VALUES ($1, $2, $3, 'messages')")
        .bind(guest_id)
        .bind(property_id)
        .bind(rating)
        .execute(pool)
        .await
        .expect("Failed to create test review");
}

/// The database's `CURRENT_DATE`, which follows the session time zone rather than UTC
pub async fn database_today(pool: &PgPool) -> NaiveDate {
    sqlx::query_scalar::<_, NaiveDate>("SELECT CURRENT_DATE")
        .fetch_one(pool)
        .await
        .expect("Failed to read CURRENT_DATE")
}

/// `today` shifted by a signed number of days
pub fn days_from(today: NaiveDate, days: i64) -> NaiveDate {
    if days >= 0 {
        today.checked_add_days(Days::new(days.unsigned_abs())).expect("date out of range")
    } else {
        today.checked_sub_days(Days::new(days.unsigned_abs())).expect("date out of range")
    }
}
