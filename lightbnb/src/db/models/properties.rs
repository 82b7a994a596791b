//! Database models for property listings.

use crate::types::{PropertyId, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Database request for creating a new property listing
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyCreateDBRequest {
    pub owner_id: UserId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// In cents
    pub cost_per_night: i32,
    #[serde(default)]
    pub parking_spaces: i32,
    #[serde(default)]
    pub number_of_bathrooms: i32,
    #[serde(default)]
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
}

/// Database response for a property (one row of `properties`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PropertyDBResponse {
    pub id: PropertyId,
    pub owner_id: UserId,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: bool,
}

/// A property together with its review aggregates
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct PropertyListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: PropertyDBResponse,
    /// `None` when the property has no reviews
    pub average_rating: Option<f64>,
    pub review_count: i64,
}
