//! Base repository trait for database operations.

use crate::db::errors::Result;

/// Operations shared by every table this layer writes to.
///
/// Listing operations differ too much between entities (search filters, guest history) to share a
/// signature, so they live on the repositories themselves.
#[async_trait::async_trait]
pub trait Repository {
    /// The request type for creating entities
    type CreateRequest;

    /// The record type returned by operations
    type Response;

    /// The identifier type for lookups
    type Id: Send + Sync;

    /// Insert a new entity and return it as stored, including its generated id
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response>;

    /// Get an entity by ID
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>>;
}
