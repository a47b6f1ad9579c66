//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! the todo record. Testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

use todolist_core::storage::RepositoryError;
use todolist_core::todo::Todo;

/// Convert a Todo to a DynamoDB item.
pub fn todo_to_item(todo: &Todo) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert("id".to_string(), AttributeValue::S(todo.id.clone()));
    item.insert("task".to_string(), AttributeValue::S(todo.task.clone()));
    item.insert("status".to_string(), AttributeValue::S(todo.status.clone()));

    item
}

/// Convert a DynamoDB item to a Todo.
pub fn item_to_todo(item: &HashMap<String, AttributeValue>) -> Result<Todo, RepositoryError> {
    Ok(Todo {
        id: get_string(item, "id")?,
        task: get_string(item, "task")?,
        status: get_string(item, "status")?,
    })
}

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_todo() -> Todo {
        Todo {
            id: "1".to_string(),
            task: "buy milk".to_string(),
            status: "pending".to_string(),
        }
    }

    #[test]
    fn test_todo_round_trip() {
        let todo = sample_todo();
        let item = todo_to_item(&todo);
        let parsed = item_to_todo(&item).unwrap();

        assert_eq!(todo, parsed);
    }

    #[test]
    fn test_todo_item_is_keyed_by_id() {
        let todo = sample_todo();
        let item = todo_to_item(&todo);

        assert_eq!(item.len(), 3);
        assert_eq!(item.get("id").unwrap().as_s().unwrap(), "1");
        assert_eq!(item.get("task").unwrap().as_s().unwrap(), "buy milk");
        assert_eq!(item.get("status").unwrap().as_s().unwrap(), "pending");
    }

    #[test]
    fn test_item_missing_field() {
        let mut item = todo_to_item(&sample_todo());
        item.remove("status");

        let err = item_to_todo(&item).unwrap_err();
        assert_eq!(
            err,
            RepositoryError::InvalidData("Missing or invalid field: status".to_string())
        );
    }

    #[test]
    fn test_item_non_string_attribute() {
        let mut item = todo_to_item(&sample_todo());
        item.insert("task".to_string(), AttributeValue::N("42".to_string()));

        assert!(item_to_todo(&item).is_err());
    }
}
