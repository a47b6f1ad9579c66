//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use todolist_core::storage::{Result, TodoRepository};
use todolist_core::todo::{Todo, TodoPatch};

/// In-memory storage backend for development and testing.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access. Data
/// is not persisted and will be lost when the repository is dropped.
///
/// Mirrors the write semantics of the DynamoDB backend: put overwrites,
/// update upserts, delete succeeds for absent ids.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    todos: Arc<RwLock<HashMap<String, Todo>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryRepository {
    async fn get_todo(&self, id: &str) -> Result<Option<Todo>> {
        let todos = self.todos.read().await;
        Ok(todos.get(id).cloned())
    }

    async fn put_todo(&self, todo: &Todo) -> Result<()> {
        let mut todos = self.todos.write().await;
        todos.insert(todo.id.clone(), todo.clone());
        Ok(())
    }

    async fn update_todo(&self, id: &str, patch: &TodoPatch) -> Result<Todo> {
        let mut todos = self.todos.write().await;
        // The patch covers every non-key field, so applying it to a missing
        // id creates a complete record - the same upsert DynamoDB performs.
        let updated = patch.clone().into_todo(id);
        todos.insert(id.to_string(), updated.clone());
        Ok(updated)
    }

    async fn delete_todo(&self, id: &str) -> Result<()> {
        let mut todos = self.todos.write().await;
        todos.remove(id);
        Ok(())
    }

    async fn scan_todos(&self) -> Result<Vec<Todo>> {
        let todos = self.todos.read().await;
        Ok(todos.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_todo(id: &str) -> Todo {
        Todo {
            id: id.to_string(),
            task: "buy milk".to_string(),
            status: "pending".to_string(),
        }
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let repo = InMemoryRepository::new();
        let todo = sample_todo("1");

        repo.put_todo(&todo).await.unwrap();
        assert_eq!(repo.get_todo("1").await.unwrap(), Some(todo));
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.get_todo("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_overwrites_existing_record() {
        let repo = InMemoryRepository::new();
        repo.put_todo(&sample_todo("1")).await.unwrap();

        let replacement = Todo {
            id: "1".to_string(),
            task: "water the plants".to_string(),
            status: "done".to_string(),
        };
        repo.put_todo(&replacement).await.unwrap();

        assert_eq!(repo.get_todo("1").await.unwrap(), Some(replacement));
        assert_eq!(repo.scan_todos().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_existing_record() {
        let repo = InMemoryRepository::new();
        repo.put_todo(&sample_todo("1")).await.unwrap();

        let patch = TodoPatch {
            task: "buy milk".to_string(),
            status: "done".to_string(),
        };
        let updated = repo.update_todo("1", &patch).await.unwrap();

        assert_eq!(updated.status, "done");
        assert_eq!(repo.get_todo("1").await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_missing_id_upserts() {
        let repo = InMemoryRepository::new();

        let patch = TodoPatch {
            task: "buy milk".to_string(),
            status: "pending".to_string(),
        };
        let updated = repo.update_todo("fresh", &patch).await.unwrap();

        assert_eq!(updated.id, "fresh");
        assert_eq!(repo.get_todo("fresh").await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_is_idempotent() {
        let repo = InMemoryRepository::new();
        repo.put_todo(&sample_todo("1")).await.unwrap();

        let patch = TodoPatch {
            task: "buy milk".to_string(),
            status: "done".to_string(),
        };
        let first = repo.update_todo("1", &patch).await.unwrap();
        let second = repo.update_todo("1", &patch).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryRepository::new();
        repo.put_todo(&sample_todo("1")).await.unwrap();

        repo.delete_todo("1").await.unwrap();
        assert_eq!(repo.get_todo("1").await.unwrap(), None);

        // Deleting again, or deleting an id that never existed, succeeds.
        repo.delete_todo("1").await.unwrap();
        repo.delete_todo("never-existed").await.unwrap();
    }

    #[tokio::test]
    async fn test_scan_returns_every_record() {
        let repo = InMemoryRepository::new();
        repo.put_todo(&sample_todo("1")).await.unwrap();
        repo.put_todo(&sample_todo("2")).await.unwrap();

        let mut ids: Vec<String> = repo
            .scan_todos()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.id)
            .collect();
        ids.sort();

        assert_eq!(ids, vec!["1", "2"]);
    }
}
