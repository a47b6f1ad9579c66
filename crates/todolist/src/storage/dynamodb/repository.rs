//! DynamoDB repository implementation.
//!
//! Implements the repository trait from `todolist_core::storage` against a
//! table keyed directly by the `id` attribute.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;

use todolist_core::storage::{RepositoryError, Result, TodoRepository};
use todolist_core::todo::{Todo, TodoPatch};

use super::conversions::{item_to_todo, todo_to_item};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error,
    map_update_item_error,
};

use crate::config::Config;

/// DynamoDB-based repository implementation.
///
/// Holds the shared SDK client and the table name. The client is cheap to
/// clone and safe for concurrent use.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository from the application configuration.
    ///
    /// Uses the AWS SDK default credential chain.
    pub async fn from_config(config: &Config) -> Self {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = Client::new(&sdk_config);
        Self::new(client, config.table_name.clone())
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl TodoRepository for DynamoDbRepository {
    async fn get_todo(&self, id: &str) -> Result<Option<Todo>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_todo(&item)?)),
            None => Ok(None),
        }
    }

    async fn put_todo(&self, todo: &Todo) -> Result<()> {
        let item = todo_to_item(todo);

        // No condition expression: an existing record is overwritten.
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn update_todo(&self, id: &str, patch: &TodoPatch) -> Result<Todo> {
        // Both `task` and `status` collide with DynamoDB reserved words, so
        // every field is aliased through ExpressionAttributeNames.
        let mut request = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .return_values(ReturnValue::AllNew);

        let mut clauses = Vec::new();
        for (name, value) in patch.fields() {
            request = request
                .expression_attribute_names(format!("#{name}"), name)
                .expression_attribute_values(
                    format!(":{name}"),
                    AttributeValue::S(value.to_string()),
                );
            clauses.push(format!("#{name} = :{name}"));
        }

        // No condition expression: a missing key upserts the record from
        // the key plus the patched fields.
        let result = request
            .update_expression(format!("SET {}", clauses.join(", ")))
            .send()
            .await
            .map_err(map_update_item_error)?;

        let attributes = result.attributes.ok_or_else(|| {
            RepositoryError::InvalidData("UpdateItem returned no attributes".to_string())
        })?;

        item_to_todo(&attributes)
    }

    async fn delete_todo(&self, id: &str) -> Result<()> {
        // No condition expression: deleting an absent key succeeds.
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }

    async fn scan_todos(&self) -> Result<Vec<Todo>> {
        // Single page; DynamoDB may truncate the result at 1 MB. See the
        // trait documentation.
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(map_scan_error)?;

        let items = result.items.unwrap_or_default();
        items.iter().map(item_to_todo).collect()
    }
}
