//! Request payloads for the todo handlers.
//!
//! Every field deserializes through `deserialize_optional_string`, so an
//! empty or whitespace-only string counts as missing - the presence rule
//! callers of this service rely on.

use serde::Deserialize;

use todolist_core::serde::deserialize_optional_string;
use todolist_core::todo::{Todo, TodoPatch};

/// Request payload for creating a todo record.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub task: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub status: Option<String>,
}

impl CreateTodo {
    /// Validates presence of the required fields, yielding the record or
    /// the names of the fields that are missing.
    pub fn into_todo(self) -> Result<Todo, Vec<&'static str>> {
        match (self.id, self.task, self.status) {
            (Some(id), Some(task), Some(status)) => Ok(Todo { id, task, status }),
            (id, task, status) => {
                let required = [("id", &id), ("task", &task), ("status", &status)];
                Err(missing_names(&required))
            }
        }
    }
}

/// Request payload for updating the non-key fields of a todo record.
#[derive(Debug, Deserialize)]
pub struct UpdateTodo {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub task: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub status: Option<String>,
}

impl UpdateTodo {
    /// Validates presence of the required fields, yielding the patch or
    /// the names of the fields that are missing.
    pub fn into_patch(self) -> Result<TodoPatch, Vec<&'static str>> {
        match (self.task, self.status) {
            (Some(task), Some(status)) => Ok(TodoPatch { task, status }),
            (task, status) => {
                let required = [("task", &task), ("status", &status)];
                Err(missing_names(&required))
            }
        }
    }
}

/// Names of the required fields whose values are absent.
fn missing_names(required: &[(&'static str, &Option<String>)]) -> Vec<&'static str> {
    required
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| *name)
        .collect()
}
