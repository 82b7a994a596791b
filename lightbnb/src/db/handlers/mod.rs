//! Repository implementations for database access.
//!
//! This module provides repository structs for each entity the application reads or writes.
//!
//! # Design Pattern
//!
//! Each repository:
//! - Wraps a borrowed SQLx connection or transaction
//! - Issues one parameterized statement per operation
//! - Returns models from [`crate::db::models`]
//! - Reports failures as [`crate::db::errors::DbError`] and absence as `Ok(None)`
//!
//! # Available Repositories
//!
//! - [`Users`]: user lookup by id or email, registration
//! - [`Reservations`]: a guest's completed stays
//! - [`Properties`]: listing search and creation
//!
//! # Common Pattern
//!
//! ```ignore
//! use lightbnb::db::handlers::{Repository, Users};
//!
//! async fn example(pool: &sqlx::PgPool) -> lightbnb::db::errors::Result<()> {
//!     let mut conn = pool.acquire().await?;
//!     let mut repo = Users::new(&mut conn);
//!
//!     if let Some(user) = repo.get_user_by_email("tristanjacobs@gmail.com").await? {
//!         println!("Found user {}", user.id);
//!     }
//!     Ok(())
//! }
//! ```

pub mod properties;
pub mod repository;
pub mod reservations;
pub mod users;

pub use properties::{Properties, PropertyFilter};
pub use repository::Repository;
pub use reservations::Reservations;
pub use users::Users;
