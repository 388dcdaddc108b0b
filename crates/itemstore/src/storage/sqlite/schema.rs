//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! pure data with no I/O.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Items table
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT NOT NULL
);
"#;

// Item queries
pub const INSERT_ITEM: &str = r#"
INSERT INTO items (name, description)
VALUES (?1, ?2)
"#;

pub const SELECT_ITEM_BY_ID: &str = r#"
SELECT id, name, description
FROM items
WHERE id = ?1
"#;

pub const SELECT_ITEMS_PAGE: &str = r#"
SELECT id, name, description
FROM items
ORDER BY id ASC
LIMIT ?1 OFFSET ?2
"#;

pub const UPDATE_ITEM: &str = r#"
UPDATE items
SET name = ?2, description = ?3
WHERE id = ?1
"#;

pub const DELETE_ITEM: &str = r#"
DELETE FROM items
WHERE id = ?1
"#;
