use serde::{Deserialize, Serialize};

/// Identifier assigned to an [`Item`] by the storage layer on creation.
pub type ItemId = i64;

/// A stored item.
///
/// The id uniquely identifies one item for the lifetime of the record and
/// never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
}

/// An item that has not been persisted yet, so it carries no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
}

impl NewItem {
    /// Creates an unsaved item with the given name and description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Attaches the storage-assigned id, producing a persisted [`Item`].
    pub fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name,
            description: self.description,
        }
    }
}
