use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Every handler failure is funnelled through this type so that status codes
/// and the `{"error": ...}` body stay consistent across variants.
#[derive(Debug)]
pub enum ApiError {
    /// No item with the given title
    NotFound(String),
    /// No item with the given title in the in-memory list
    ItemNotFound(String),
    /// An item with the given title already exists
    Conflict(String),
    /// Request body failed field validation
    InvalidItem(String),
    /// Database operation error
    DatabaseError(anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) | ApiError::ItemNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::InvalidItem(_) => StatusCode::BAD_REQUEST,
            ApiError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            ApiError::NotFound(title) => format!("TODO '{}' not found", title),
            ApiError::ItemNotFound(title) => format!("Item with title {} not found", title),
            ApiError::Conflict(title) => format!("TODO '{}' already exists", title),
            ApiError::InvalidItem(msg) => format!("Invalid to-do item: {}", msg),
            ApiError::DatabaseError(err) => {
                tracing::error!("Database error: {:#}", err);
                format!("Database error: {}", err)
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::DatabaseError(err)
    }
}
