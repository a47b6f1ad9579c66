//! The todo record domain type.

use serde::{Deserialize, Serialize};

/// A single todo record.
///
/// Records are keyed by a caller-chosen `id`. Exactly one record exists per
/// `id` at any time; writes to an existing `id` overwrite the stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier, chosen by the caller.
    pub id: String,
    /// Free-text description of the task.
    pub task: String,
    /// Free-text workflow state. No enumerated values are enforced.
    pub status: String,
}

/// The updatable (non-key) fields of a todo record.
///
/// The field set is exposed as data through [`TodoPatch::fields`] so that
/// update-expression building iterates one list instead of repeating
/// per-field code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoPatch {
    pub task: String,
    pub status: String,
}

impl TodoPatch {
    /// Attribute name/value pairs for the fields this patch sets.
    pub fn fields(&self) -> [(&'static str, &str); 2] {
        [("task", &self.task), ("status", &self.status)]
    }

    /// The record state after applying this patch to `id`.
    ///
    /// The patch covers every non-key field, so the result is a complete
    /// record regardless of what was stored before.
    pub fn into_todo(self, id: impl Into<String>) -> Todo {
        Todo {
            id: id.into(),
            task: self.task,
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_serializes_with_lowercase_keys() {
        let todo = Todo {
            id: "1".to_string(),
            task: "buy milk".to_string(),
            status: "pending".to_string(),
        };

        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "1", "task": "buy milk", "status": "pending" })
        );
    }

    #[test]
    fn test_todo_round_trip() {
        let todo = Todo {
            id: "abc-123".to_string(),
            task: "water the plants".to_string(),
            status: "done".to_string(),
        };

        let json = serde_json::to_string(&todo).unwrap();
        let parsed: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(todo, parsed);
    }

    #[test]
    fn test_patch_fields_cover_all_non_key_attributes() {
        let patch = TodoPatch {
            task: "buy milk".to_string(),
            status: "done".to_string(),
        };

        let fields = patch.fields();
        assert_eq!(fields, [("task", "buy milk"), ("status", "done")]);
    }

    #[test]
    fn test_patch_into_todo_builds_complete_record() {
        let patch = TodoPatch {
            task: "buy milk".to_string(),
            status: "done".to_string(),
        };

        let todo = patch.into_todo("1");
        assert_eq!(todo.id, "1");
        assert_eq!(todo.task, "buy milk");
        assert_eq!(todo.status, "done");
    }
}
