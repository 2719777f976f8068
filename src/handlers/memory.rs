//! Handlers of the in-memory variant.
//!
//! Appends are never checked for duplicate titles, and every call acts on
//! whatever the list holds at that moment.

use crate::error::{ApiError, ErrorResponse};
use crate::models::{ListQuery, ToDoItem};
use crate::routes;
use crate::state::MemoryState;
use axum::{Json, extract::Path, extract::Query, extract::State};

/// GET /show_list handler
#[utoipa::path(
    get,
    path = routes::MEMORY_SHOW,
    params(
        ("done" = Option<bool>, Query, description = "Only return items with this done flag")
    ),
    responses(
        (status = 200, description = "Items in insertion order", body = Vec<ToDoItem>)
    ),
    tag = "memory"
)]
pub async fn show_list_handler(
    State(state): State<MemoryState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<ToDoItem>> {
    Json(state.store.show_list(query.done).await)
}

/// POST /append_list handler - returns the whole list after appending
#[utoipa::path(
    post,
    path = routes::MEMORY_APPEND,
    request_body = ToDoItem,
    responses(
        (status = 200, description = "List after the append", body = Vec<ToDoItem>),
        (status = 400, description = "Empty title", body = ErrorResponse)
    ),
    tag = "memory"
)]
pub async fn append_list_handler(
    State(state): State<MemoryState>,
    Json(item): Json<ToDoItem>,
) -> Result<Json<Vec<ToDoItem>>, ApiError> {
    item.validate().map_err(ApiError::InvalidItem)?;

    tracing::info!("Appending item '{}'", item.title);
    Ok(Json(state.store.append(item).await))
}

/// PUT /update_item_by_title/{item_title} handler
#[utoipa::path(
    put,
    path = routes::MEMORY_UPDATE,
    params(
        ("item_title" = String, Path, description = "Current title of the item")
    ),
    request_body = ToDoItem,
    responses(
        (status = 200, description = "Item updated", body = ToDoItem),
        (status = 400, description = "Empty title", body = ErrorResponse),
        (status = 404, description = "No item has this title", body = ErrorResponse)
    ),
    tag = "memory"
)]
pub async fn update_item_by_title_handler(
    State(state): State<MemoryState>,
    Path(item_title): Path<String>,
    Json(item): Json<ToDoItem>,
) -> Result<Json<ToDoItem>, ApiError> {
    item.validate().map_err(ApiError::InvalidItem)?;

    match state.store.update_by_title(&item_title, item).await {
        Some(item) => {
            tracing::info!("Updated item '{}' -> '{}'", item_title, item.title);
            Ok(Json(item))
        }
        None => {
            tracing::info!("Item not found: '{}'", item_title);
            Err(ApiError::ItemNotFound(item_title))
        }
    }
}
