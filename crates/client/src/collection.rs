//! The async seam between domain services and the transport layer.
//!
//! Services depend on [`Collection`] rather than on
//! [`StrapiClient`](crate::StrapiClient) directly, so tests can swap in
//! an in-memory store.

use async_trait::async_trait;
use serde_json::Value;

use xtrawrkx_core::DbId;

use crate::error::ApiResult;
use crate::query::Query;

/// CRUD access to one backend collection, addressed by its path segment
/// (e.g. `tasks`, `subtasks`, `task-comments`).
///
/// Documents are raw `serde_json::Value` objects; typed mapping lives in
/// the domain layer.
#[async_trait]
pub trait Collection: Send + Sync {
    /// Fetch all documents matching the query.
    async fn list(&self, path: &str, query: &Query) -> ApiResult<Vec<Value>>;

    /// Fetch one document by id.
    async fn get(&self, path: &str, id: DbId, query: &Query) -> ApiResult<Value>;

    /// Create a document. Returns the created document with its
    /// server-assigned id.
    async fn create(&self, path: &str, data: Value) -> ApiResult<Value>;

    /// Partially update a document's fields.
    async fn update(&self, path: &str, id: DbId, data: Value) -> ApiResult<Value>;

    /// Delete a document. The backend performs no cascade; callers that
    /// need one delete children first.
    async fn remove(&self, path: &str, id: DbId) -> ApiResult<()>;

    /// Count documents matching the query without fetching them.
    async fn count(&self, path: &str, query: &Query) -> ApiResult<u64>;
}
