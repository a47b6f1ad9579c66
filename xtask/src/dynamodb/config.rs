//! Table configuration types (Functional Core - pure data).

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub billing_mode: BillingMode,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

/// DynamoDB attribute types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
}

/// Billing mode for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingMode {
    PayPerRequest,
}

impl TableConfig {
    /// Sets the table name.
    pub fn with_table_name(mut self, name: &str) -> Self {
        self.table_name = name.to_string();
        self
    }
}

/// Returns the canonical table configuration for the todo collection.
/// This is a pure function - no I/O.
///
/// The table is keyed directly by the record `id`; no sort key and no
/// secondary indexes are needed for a flat collection.
pub fn todolist_table_config() -> TableConfig {
    TableConfig {
        table_name: "TodoListTable".to_string(),
        partition_key: KeyAttribute {
            name: "id".to_string(),
            attribute_type: AttributeType::String,
        },
        billing_mode: BillingMode::PayPerRequest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_config() {
        let config = todolist_table_config();
        assert_eq!(config.table_name, "TodoListTable");
        assert_eq!(config.partition_key.name, "id");
    }

    #[test]
    fn test_with_table_name() {
        let config = todolist_table_config().with_table_name("todos-staging");
        assert_eq!(config.table_name, "todos-staging");
        assert_eq!(config.partition_key.name, "id");
    }
}
