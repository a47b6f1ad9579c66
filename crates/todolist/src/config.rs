use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table holding the todo collection (default: "TodoListTable")
    pub table_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TODO_TABLE_NAME` - DynamoDB table name (default: "TodoListTable")
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("TODO_TABLE_NAME")
                .unwrap_or_else(|_| "TodoListTable".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_name() {
        env::remove_var("TODO_TABLE_NAME");

        let config = Config::from_env();
        assert_eq!(config.table_name, "TodoListTable");
    }
}
