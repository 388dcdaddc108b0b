use async_trait::async_trait;

use crate::item::{Item, ItemId, NewItem};

use super::{Page, Result};

/// Repository for item operations.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Lists items ordered by id, bounded by the given page.
    async fn list_items(&self, page: Page) -> Result<Vec<Item>>;

    /// Gets an item by its id.
    async fn get_item(&self, id: ItemId) -> Result<Option<Item>>;

    /// Creates a new item, returning it with its storage-assigned id.
    async fn create_item(&self, item: &NewItem) -> Result<Item>;

    /// Overwrites every field of an existing item.
    async fn update_item(&self, item: &Item) -> Result<()>;

    /// Deletes an item by its id.
    async fn delete_item(&self, id: ItemId) -> Result<()>;
}
