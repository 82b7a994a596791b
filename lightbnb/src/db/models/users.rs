//! Database models for users.

use crate::types::UserId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Database request for creating a new user
#[derive(Debug, Clone, Deserialize)]
pub struct UserCreateDBRequest {
    pub name: String,
    pub email: String,
    /// Stored as given; callers pass an already-hashed credential
    pub password: String,
}

/// Database response for a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UserDBResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}
