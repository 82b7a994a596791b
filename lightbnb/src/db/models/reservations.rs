//! Database models for reservations.

use crate::db::models::properties::PropertyDBResponse;
use crate::types::{ReservationId, UserId};
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// A completed stay: the reservation, the property that was booked and the property's rating.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct ReservationDBResponse {
    pub reservation_id: ReservationId,
    pub guest_id: UserId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: PropertyDBResponse,
    pub average_rating: Option<f64>,
}
