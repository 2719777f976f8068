use crate::error::{ApiError, ErrorResponse};
use crate::models::{ListQuery, ToDoItem};
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::Query, extract::State, http::StatusCode};

/// GET / handler - List to-do items
///
/// Returns every stored item, or only those matching the optional `done`
/// query parameter. There is no pagination and no ordering guarantee.
#[utoipa::path(
    get,
    path = routes::TODO_LIST,
    params(
        ("done" = Option<bool>, Query, description = "Only return items with this done flag")
    ),
    responses(
        (status = 200, description = "List of to-do items", body = Vec<ToDoItem>),
        (status = 400, description = "Invalid query parameter"),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "todo"
)]
pub async fn list_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<(StatusCode, Json<Vec<ToDoItem>>), ApiError> {
    let items = state.db.list(query.done).await?;

    tracing::info!("Listed {} items (done: {:?})", items.len(), query.done);
    Ok((StatusCode::OK, Json(items)))
}
