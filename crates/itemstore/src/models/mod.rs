mod item;

pub use item::{CreateItem, UpdateItem};
