//! Seed command implementation.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use todolist_core::todo::Todo;

use super::error::{DynamodbError, Result};

const SEED_TASKS: &[&str] = &[
    "Buy groceries",
    "Water the plants",
    "Write weekly report",
    "Review open pull requests",
    "Call the dentist",
    "Renew car insurance",
    "Clean the garage",
    "Plan the team offsite",
    "Back up the laptop",
    "Fix the leaking tap",
];

const SEED_STATUSES: &[&str] = &["pending", "in-progress", "done"];

/// Generate demo todo records.
///
/// Ids are deterministic (`todo-001`, `todo-002`, ...) so repeated seeding
/// overwrites the same records instead of piling up new ones.
pub fn generate_seed_todos(count: u32) -> Vec<Todo> {
    (0..count)
        .map(|i| Todo {
            id: format!("todo-{:03}", i + 1),
            task: SEED_TASKS[i as usize % SEED_TASKS.len()].to_string(),
            status: SEED_STATUSES[i as usize % SEED_STATUSES.len()].to_string(),
        })
        .collect()
}

/// Convert a todo record to a DynamoDB item.
fn todo_to_item(todo: &Todo) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert("id".to_string(), AttributeValue::S(todo.id.clone()));
    item.insert("task".to_string(), AttributeValue::S(todo.task.clone()));
    item.insert("status".to_string(), AttributeValue::S(todo.status.clone()));

    item
}

/// Insert todo records into DynamoDB.
pub async fn seed_todos(client: &Client, table_name: &str, todos: &[Todo]) -> Result<u32> {
    let mut inserted = 0;

    // Use batch write for efficiency (25 items per batch max)
    for chunk in todos.chunks(25) {
        let write_requests = chunk
            .iter()
            .map(|todo| {
                let put_request = aws_sdk_dynamodb::types::PutRequest::builder()
                    .set_item(Some(todo_to_item(todo)))
                    .build()
                    .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

                Ok(aws_sdk_dynamodb::types::WriteRequest::builder()
                    .put_request(put_request)
                    .build())
            })
            .collect::<Result<Vec<_>>>()?;

        client
            .batch_write_item()
            .request_items(table_name, write_requests)
            .send()
            .await
            .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

        inserted += chunk.len() as u32;
    }

    Ok(inserted)
}
