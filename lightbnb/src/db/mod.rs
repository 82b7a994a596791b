//! Database layer for data persistence and access.
//!
//! This module implements the data access layer using SQLx with PostgreSQL.
//! It follows the Repository pattern to provide clean abstractions over database operations.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Callers   │  (route handlers, jobs)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │ Repositories│  (db::handlers - one statement per operation)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │   Models    │  (db::models - database records)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │  PostgreSQL │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`handlers`]: Repository implementations for each table
//! - [`models`]: Request and record structures matching table schemas
//! - [`statement`]: Clause-based builder for dynamic `SELECT` statements
//! - [`pool`]: Connection pool creation from configuration
//! - [`errors`]: Database-specific error types
//!
//! # Connections
//!
//! Repositories borrow a `PgConnection`. Reads can use a pooled connection directly; callers that
//! need several operations to commit together open a transaction and build the repository from it:
//!
//! ```ignore
//! let mut tx = pool.begin().await?;
//! let owner = Users::new(&mut tx).create(&owner_request).await?;
//! let listing = Properties::new(&mut tx)
//!     .create(&PropertyCreateDBRequest { owner_id: owner.id, ..listing_request })
//!     .await?;
//! tx.commit().await?;
//! ```
//!
//! # Migrations
//!
//! The schema lives in the `migrations/` directory and is applied with [`crate::migrator`].

pub mod errors;
pub mod handlers;
pub mod models;
pub mod pool;
pub mod statement;
