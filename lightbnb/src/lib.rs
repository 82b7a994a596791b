//! # lightbnb: data access for a vacation rental application
//!
//! `lightbnb` is the persistence layer behind the LightBnB booking site. It looks up and registers
//! users, lists a guest's past stays, searches property listings and registers new listings, all
//! through parameterized SQL against PostgreSQL.
//!
//! ## Architecture
//!
//! The crate is a thin set of repositories over a borrowed SQLx connection:
//!
//! - [`db::handlers`] holds one repository per entity ([`db::handlers::Users`],
//!   [`db::handlers::Reservations`], [`db::handlers::Properties`]). Each method issues exactly one
//!   statement and returns a typed record, an `Option` of one, or a `Vec`.
//! - [`db::models`] holds the request and row types those repositories exchange.
//! - [`db::statement`] assembles the dynamic property search statement from an ordered list of
//!   clauses, each carrying its own bound value, so the SQL text and its parameters are always
//!   produced together.
//! - [`db::errors`] classifies database failures into [`db::errors::DbError`]. Failures are
//!   returned to the caller; "no such row" is `Ok(None)`, never an error.
//!
//! The connection pool is created once at startup by [`db::pool::connect`] and handed to callers,
//! who acquire a connection (or open a transaction) and build a repository from it:
//!
//! ```ignore
//! use lightbnb::db::handlers::{Properties, PropertyFilter};
//!
//! async fn cheap_stays(pool: &sqlx::PgPool) -> lightbnb::db::errors::Result<()> {
//!     let mut conn = pool.acquire().await?;
//!     let listings = Properties::new(&mut conn)
//!         .search(&PropertyFilter::new().city("Vancouver").price_range(50, 150))
//!         .await?;
//!     for listing in listings {
//!         println!("{} ({} cents/night)", listing.property.title, listing.property.cost_per_night);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration and logging
//!
//! [`config`] loads connection and pool settings from YAML with environment overrides, and
//! [`telemetry`] installs the `tracing` subscriber. Every repository method is instrumented, so
//! failed statements are logged as well as returned.

pub mod config;
pub mod db;
pub mod telemetry;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::Config;

/// Get the lightbnb database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}
