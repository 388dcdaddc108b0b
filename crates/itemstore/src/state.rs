//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Handlers reach storage through a repository trait
//! object, so tests can swap in the in-memory backend.

use std::sync::Arc;

use itemstore_core::storage::ItemRepository;

use crate::{config::Config, storage::SqliteRepository};

/// Shared application state.
///
/// This is cloned for each request handler and holds the repository trait
/// object backing all item operations.
#[derive(Clone)]
pub struct AppState {
    /// Item repository.
    pub items: Arc<dyn ItemRepository>,
}

impl AppState {
    /// Creates an AppState backed by the configured SQLite database.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let repo = SqliteRepository::open(&config.database_url).await?;

        Ok(Self {
            items: Arc::new(repo),
        })
    }
}
