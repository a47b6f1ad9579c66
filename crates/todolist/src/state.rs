//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It uses a repository trait object for storage
//! abstraction and supports different backends via feature flags.

use std::sync::Arc;

use todolist_core::storage::TodoRepository;

#[cfg(feature = "dynamodb")]
use crate::config::Config;
#[cfg(feature = "dynamodb")]
use crate::storage::DynamoDbRepository;
#[cfg(feature = "inmemory")]
use crate::storage::InMemoryRepository;

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!("Cannot enable both 'inmemory' and 'dynamodb' storage features");

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'dynamodb'");

/// Shared application state.
///
/// Cloned for each request handler. The repository's underlying store
/// client is constructed once at startup and never mutated afterwards, so
/// concurrent invocations share it freely.
#[derive(Clone)]
pub struct AppState {
    /// Todo repository backing the five operations.
    pub todo_repo: Arc<dyn TodoRepository>,
}

impl AppState {
    /// Creates state over an explicit repository.
    pub fn new(todo_repo: Arc<dyn TodoRepository>) -> Self {
        Self { todo_repo }
    }

    /// Creates state from environment configuration.
    ///
    /// Uses the AWS SDK default credential chain and the table name from
    /// [`Config`].
    #[cfg(feature = "dynamodb")]
    pub async fn from_env() -> anyhow::Result<Self> {
        let config = Config::from_env();
        let repo = DynamoDbRepository::from_config(&config).await;
        tracing::info!(table = %repo.table_name(), "Using DynamoDB storage backend");
        Ok(Self::new(Arc::new(repo)))
    }

    /// Creates state with the in-memory backend.
    #[cfg(feature = "inmemory")]
    pub async fn from_env() -> anyhow::Result<Self> {
        tracing::info!("Using in-memory storage backend");
        Ok(Self::new(Arc::new(InMemoryRepository::new())))
    }
}

#[cfg(feature = "inmemory")]
impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()))
    }
}
