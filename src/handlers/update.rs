use crate::error::{ApiError, ErrorResponse};
use crate::models::ToDoItem;
use crate::routes;
use crate::sqlite::WriteOutcome;
use crate::state::AppState;
use axum::{Json, extract::Path, extract::State, http::StatusCode};

/// PUT /{item_title} handler - Replace both fields of an existing item
///
/// The item is addressed by its current title and may be renamed. Renaming
/// onto a title held by another item is refused with 409.
#[utoipa::path(
    put,
    path = routes::TODO_ITEM,
    params(
        ("item_title" = String, Path, description = "Current title of the item")
    ),
    request_body = ToDoItem,
    responses(
        (status = 200, description = "Item updated", body = ToDoItem),
        (status = 400, description = "Empty title", body = ErrorResponse),
        (status = 404, description = "No item has this title", body = ErrorResponse),
        (status = 409, description = "New title belongs to another item", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "todo"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(item_title): Path<String>,
    Json(item): Json<ToDoItem>,
) -> Result<(StatusCode, Json<ToDoItem>), ApiError> {
    item.validate().map_err(ApiError::InvalidItem)?;

    let new_title = item.title.clone();
    match state.db.update_by_title(&item_title, item).await? {
        WriteOutcome::Written(item) => {
            tracing::info!("Updated item '{}' -> '{}'", item_title, item.title);
            Ok((StatusCode::OK, Json(item)))
        }
        WriteOutcome::NotFound => {
            tracing::info!("Item not found: '{}'", item_title);
            Err(ApiError::NotFound(item_title))
        }
        WriteOutcome::Conflict => {
            tracing::info!("Cannot rename '{}': '{}' already exists", item_title, new_title);
            Err(ApiError::Conflict(new_title))
        }
    }
}
