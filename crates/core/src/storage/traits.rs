use async_trait::async_trait;

use crate::todo::{Todo, TodoPatch};

use super::Result;

/// Repository for todo record operations.
///
/// Every method issues exactly one store call; failures surface as
/// [`RepositoryError`](super::RepositoryError) values, never as panics.
/// Implementations are safe for concurrent use: the backing client is
/// never mutated after construction.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Point lookup by `id`. `None` means no record exists for that key.
    async fn get_todo(&self, id: &str) -> Result<Option<Todo>>;

    /// Unconditional write. Overwrites silently when `id` already exists;
    /// there is no existence check.
    async fn put_todo(&self, todo: &Todo) -> Result<()>;

    /// Partial update of the non-key fields, returning the full post-update
    /// record.
    ///
    /// Updating an `id` that does not exist upserts: the store creates the
    /// record from the key plus the patched fields. Because the patch covers
    /// every non-key field, the upserted record is complete.
    async fn update_todo(&self, id: &str, patch: &TodoPatch) -> Result<Todo>;

    /// Unconditional delete by `id`. Deleting an absent `id` succeeds.
    async fn delete_todo(&self, id: &str) -> Result<()>;

    /// Full collection scan, one page, no pagination-token handling. A
    /// backing store may truncate the result at its native page limit
    /// (DynamoDB: 1 MB); callers see whatever the single scan call returned.
    async fn scan_todos(&self) -> Result<Vec<Todo>>;
}
