//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use itemstore_core::item::{Item, ItemId, NewItem};
use itemstore_core::storage::{ItemRepository, Page, RepositoryError, Result};

/// In-memory storage backend for testing.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access and an
/// atomic counter for id assignment, matching the SQLite backend's
/// observable semantics. Data is not persisted and will be lost when the
/// repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    items: Arc<RwLock<HashMap<ItemId, Item>>>,
    next_id: Arc<AtomicI64>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

#[async_trait]
impl ItemRepository for InMemoryRepository {
    async fn list_items(&self, page: Page) -> Result<Vec<Item>> {
        let items = self.items.read().await;
        let mut all: Vec<Item> = items.values().cloned().collect();
        all.sort_by_key(|item| item.id);

        Ok(all
            .into_iter()
            .skip(page.skip as usize)
            .take(page.limit as usize)
            .collect())
    }

    async fn get_item(&self, id: ItemId) -> Result<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.get(&id).cloned())
    }

    async fn create_item(&self, item: &NewItem) -> Result<Item> {
        let mut items = self.items.write().await;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let item = item.clone().into_item(id);
        items.insert(id, item.clone());
        Ok(item)
    }

    async fn update_item(&self, item: &Item) -> Result<()> {
        let mut items = self.items.write().await;
        if !items.contains_key(&item.id) {
            return Err(RepositoryError::NotFound {
                entity_type: "Item",
                id: item.id.to_string(),
            });
        }
        items.insert(item.id, item.clone());
        Ok(())
    }

    async fn delete_item(&self, id: ItemId) -> Result<()> {
        let mut items = self.items.write().await;
        if items.remove(&id).is_none() {
            return Err(RepositoryError::NotFound {
                entity_type: "Item",
                id: id.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryRepository::new();

        let item = repo
            .create_item(&NewItem::new("Lamp", "A desk lamp"))
            .await
            .unwrap();

        let retrieved = repo.get_item(item.id).await.unwrap();
        assert_eq!(retrieved, Some(item));
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryRepository::new();

        let first = repo.create_item(&NewItem::new("a", "b")).await.unwrap();
        let second = repo.create_item(&NewItem::new("c", "d")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let repo = InMemoryRepository::new();

        let result = repo.get_item(999).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update() {
        let repo = InMemoryRepository::new();

        let mut item = repo
            .create_item(&NewItem::new("Original", "Before"))
            .await
            .unwrap();

        item.name = "Updated".to_string();
        repo.update_item(&item).await.unwrap();

        let retrieved = repo.get_item(item.id).await.unwrap().unwrap();
        assert_eq!(retrieved.name, "Updated");
        assert_eq!(retrieved.description, "Before");
    }

    #[tokio::test]
    async fn test_update_nonexistent() {
        let repo = InMemoryRepository::new();

        let item = Item {
            id: 999,
            name: "Ghost".to_string(),
            description: "Does not exist".to_string(),
        };

        let result = repo.update_item(&item).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryRepository::new();

        let item = repo.create_item(&NewItem::new("a", "b")).await.unwrap();
        repo.delete_item(item.id).await.unwrap();

        let retrieved = repo.get_item(item.id).await.unwrap();
        assert!(retrieved.is_none());
    }

    #[tokio::test]
    async fn test_delete_nonexistent() {
        let repo = InMemoryRepository::new();

        let result = repo.delete_item(999).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_is_ordered_and_paged() {
        let repo = InMemoryRepository::new();

        repo.create_item(&NewItem::new("first", "1")).await.unwrap();
        repo.create_item(&NewItem::new("second", "2")).await.unwrap();
        repo.create_item(&NewItem::new("third", "3")).await.unwrap();

        let page = Page::new(1, 2).unwrap();
        let items = repo.list_items(page).await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "second");
        assert_eq!(items[1].name, "third");
    }

    #[tokio::test]
    async fn test_list_skip_past_end_is_empty() {
        let repo = InMemoryRepository::new();

        repo.create_item(&NewItem::new("only", "one")).await.unwrap();

        let page = Page::new(5, 10).unwrap();
        let items = repo.list_items(page).await.unwrap();

        assert!(items.is_empty());
    }
}
