use serde::Deserialize;

use itemstore_core::item::{Item, NewItem};

/// Request payload for creating or fully replacing an item.
///
/// Both fields are required; a body missing either one is rejected by the
/// extractor before the handler runs.
#[derive(Debug, Deserialize)]
pub struct CreateItem {
    pub name: String,
    pub description: String,
}

impl CreateItem {
    /// Converts the payload into an unsaved item.
    pub fn into_new_item(self) -> NewItem {
        NewItem::new(self.name, self.description)
    }
}

/// Request payload for partially updating an item.
#[derive(Debug, Deserialize)]
pub struct UpdateItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl UpdateItem {
    /// Applies the supplied fields to an existing item.
    pub fn apply_to(self, item: &mut Item) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
    }
}
