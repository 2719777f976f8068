use crate::error::{ApiError, ErrorResponse};
use crate::models::ToDoItem;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::Path, extract::State, http::StatusCode};

/// GET /{item_title} handler - Retrieve a to-do item by its exact title
#[utoipa::path(
    get,
    path = routes::TODO_ITEM,
    params(
        ("item_title" = String, Path, description = "Current title of the item")
    ),
    responses(
        (status = 200, description = "Item found", body = ToDoItem),
        (status = 404, description = "No item has this title", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "todo"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(item_title): Path<String>,
) -> Result<(StatusCode, Json<ToDoItem>), ApiError> {
    match state.db.get_by_title(&item_title).await? {
        Some(item) => {
            tracing::info!("Retrieved item '{}'", item_title);
            Ok((StatusCode::OK, Json(item)))
        }
        None => {
            tracing::info!("Item not found: '{}'", item_title);
            Err(ApiError::NotFound(item_title))
        }
    }
}
