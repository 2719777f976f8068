use crate::error::{HealthResponse, UnhealthyResponse};
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// GET /health handler - Health check endpoint
///
/// Runs `SELECT 1` against the to-do database.
/// Returns 200 OK if the database is reachable, 503 Service Unavailable otherwise.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is unhealthy", body = UnhealthyResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<HealthResponse>), (StatusCode, Json<UnhealthyResponse>)> {
    match state.db.health_check().await {
        Ok(()) => {
            tracing::debug!("Health check passed");
            Ok((
                StatusCode::OK,
                Json(HealthResponse {
                    status: "healthy".to_string(),
                }),
            ))
        }
        Err(e) => {
            tracing::error!(
                "Health check failed for {}: {:#}",
                state.config.database_path.display(),
                e
            );
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(UnhealthyResponse {
                    status: "unhealthy".to_string(),
                    error: format!("Cannot connect to database: {}", e),
                }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{body_json, empty_request, send, setup_todo_app};

    #[tokio::test]
    async fn test_health_endpoint_healthy() {
        let (_dir, app) = setup_todo_app().await;

        let response = send(&app, empty_request("GET", "/health")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response_json: HealthResponse = body_json(response).await;
        assert_eq!(response_json.status, "healthy");
    }

    #[tokio::test]
    async fn test_health_endpoint_unhealthy() {
        let (dir, app) = setup_todo_app().await;

        // Pull the directory out from under the database file
        dir.close().unwrap();

        let response = send(&app, empty_request("GET", "/health")).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response_json: UnhealthyResponse = body_json(response).await;
        assert_eq!(response_json.status, "unhealthy");
        assert!(response_json.error.contains("Cannot connect to database"));
    }
}
