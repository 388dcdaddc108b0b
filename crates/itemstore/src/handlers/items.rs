//! Item CRUD handlers.
//!
//! These handlers use the repository trait object for database access and
//! surface storage errors through [`AppError`].

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use itemstore_core::item::{Item, ItemId};
use itemstore_core::storage::{Page, RepositoryError, DEFAULT_LIMIT};

use crate::{
    handlers::AppError,
    models::{CreateItem, UpdateItem},
    state::AppState,
};

/// Query parameters for listing items.
#[derive(Debug, Deserialize)]
pub struct ListItemsQuery {
    /// Number of items to skip from the start of the collection.
    #[serde(default)]
    pub skip: i64,
    /// Maximum number of items to return (default: 100, capped at 500).
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

/// List items (GET /items).
pub async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ListItemsQuery>,
) -> Result<Json<Vec<Item>>, AppError> {
    let page = Page::new(query.skip, query.limit)?;

    let items = state.items.list_items(page).await?;

    Ok(Json(items))
}

/// Get a single item by id (GET /items/{id}).
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> Result<Json<Item>, AppError> {
    let item = state.items.get_item(id).await?;

    match item {
        Some(item) => Ok(Json(item)),
        None => Err(not_found(id).into()),
    }
}

/// Create a new item (POST /items).
pub async fn create_item(
    State(state): State<AppState>,
    body: Result<Json<CreateItem>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = body?;

    let item = state.items.create_item(&payload.into_new_item()).await?;

    tracing::info!(item_id = %item.id, name = %item.name, "Created new item");

    Ok((StatusCode::CREATED, Json(item)))
}

/// Replace an item by id (PUT /items/{id}).
///
/// Every field is required and overwritten; the id never changes.
pub async fn replace_item(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
    body: Result<Json<CreateItem>, JsonRejection>,
) -> Result<Json<Item>, AppError> {
    let Json(payload) = body?;

    let item = payload.into_new_item().into_item(id);
    state.items.update_item(&item).await?;

    tracing::info!(item_id = %id, "Replaced item");

    Ok(Json(item))
}

/// Partially update an item by id (PATCH /items/{id}).
///
/// Only fields present in the payload change; the rest keep their stored
/// values.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
    body: Result<Json<UpdateItem>, JsonRejection>,
) -> Result<Json<Item>, AppError> {
    let Json(payload) = body?;

    let mut item = state
        .items
        .get_item(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    payload.apply_to(&mut item);
    state.items.update_item(&item).await?;

    tracing::info!(item_id = %id, "Updated item");

    Ok(Json(item))
}

/// Delete an item by id (DELETE /items/{id}).
///
/// Responds with the deleted item's last known values.
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> Result<Json<Item>, AppError> {
    let item = state
        .items
        .get_item(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    state.items.delete_item(id).await?;

    tracing::info!(item_id = %id, "Deleted item");

    Ok(Json(item))
}

fn not_found(id: ItemId) -> RepositoryError {
    RepositoryError::NotFound {
        entity_type: "Item",
        id: id.to_string(),
    }
}
