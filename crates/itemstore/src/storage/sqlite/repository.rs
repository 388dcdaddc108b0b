//! SQLite repository implementation.
//!
//! Implements the repository trait from `itemstore_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use itemstore_core::item::{Item, ItemId, NewItem};
use itemstore_core::storage::{ItemRepository, Page, RepositoryError, Result};

use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Converts a result row (id, name, description) into an [`Item`].
fn row_to_item(row: &rusqlite::Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
    })
}

/// Translates a `DATABASE_URL` value into a path rusqlite can open.
///
/// Accepts plain paths, `:memory:`, and `sqlite:`-scheme URLs:
/// `sqlite://rel.db` and `sqlite:///rel.db` name a relative path,
/// `sqlite:////abs.db` an absolute one.
fn database_path(url: &str) -> &str {
    let Some(rest) = url.strip_prefix("sqlite:") else {
        return url;
    };
    let rest = rest.strip_prefix("//").unwrap_or(rest);
    rest.strip_prefix('/').unwrap_or(rest)
}

/// SQLite-based repository implementation.
///
/// Provides async access to SQLite storage for items.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens the database referenced by the connection string.
    ///
    /// The database file will be created if it doesn't exist. Schema tables
    /// are created automatically.
    pub async fn open(database_url: &str) -> Result<Self> {
        let conn = Connection::open(database_path(database_url))
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl ItemRepository for SqliteRepository {
    async fn list_items(&self, page: Page) -> Result<Vec<Item>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_ITEMS_PAGE).map_err(wrap_err)?;
                let rows = stmt
                    .query_map(rusqlite::params![page.limit, page.skip], row_to_item)
                    .map_err(wrap_err)?;

                let mut items = Vec::new();
                for row_result in rows {
                    items.push(row_result.map_err(wrap_err)?);
                }
                Ok(items)
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn get_item(&self, id: ItemId) -> Result<Option<Item>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_ITEM_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_item) {
                    Ok(item) => Ok(Some(item)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Item", id.to_string()))
    }

    async fn create_item(&self, item: &NewItem) -> Result<Item> {
        let name = item.name.clone();
        let description = item.description.clone();

        self.conn
            .call(move |conn| {
                conn.execute(schema::INSERT_ITEM, rusqlite::params![name, description])
                    .map_err(wrap_err)?;
                let id = conn.last_insert_rowid();
                Ok(Item {
                    id,
                    name,
                    description,
                })
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Item"))
    }

    async fn update_item(&self, item: &Item) -> Result<()> {
        let id = item.id;
        let name = item.name.clone();
        let description = item.description.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::UPDATE_ITEM, rusqlite::params![id, name, description])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Item", id.to_string()))
    }

    async fn delete_item(&self, id: ItemId) -> Result<()> {
        self.conn
            .call(move |conn| {
                let rows = conn.execute(schema::DELETE_ITEM, [id]).map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Item", id.to_string()))
    }
}
