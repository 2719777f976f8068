use crate::error::{ApiError, ErrorResponse};
use crate::models::ToDoItem;
use crate::routes;
use crate::sqlite::WriteOutcome;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// POST / handler - Add a to-do item
///
/// Echoes the stored item. A title that is already taken yields 409.
#[utoipa::path(
    post,
    path = routes::TODO_LIST,
    request_body = ToDoItem,
    responses(
        (status = 200, description = "Item stored", body = ToDoItem),
        (status = 400, description = "Empty title", body = ErrorResponse),
        (status = 409, description = "Title already exists", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "todo"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    Json(item): Json<ToDoItem>,
) -> Result<(StatusCode, Json<ToDoItem>), ApiError> {
    item.validate().map_err(ApiError::InvalidItem)?;

    let title = item.title.clone();
    match state.db.create(item).await? {
        WriteOutcome::Written(item) => {
            tracing::info!("Created item '{}'", item.title);
            Ok((StatusCode::OK, Json(item)))
        }
        WriteOutcome::Conflict => {
            tracing::info!("Item '{}' already exists", title);
            Err(ApiError::Conflict(title))
        }
        WriteOutcome::NotFound => Err(ApiError::DatabaseError(anyhow::anyhow!(
            "insert of '{}' reported a missing row",
            title
        ))),
    }
}
