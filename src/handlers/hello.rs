use crate::routes;
use axum::extract::Path;

/// GET /hello/{name} handler - Plain-text greeting
#[utoipa::path(
    get,
    path = routes::HELLO,
    params(
        ("name" = String, Path, description = "Who to greet")
    ),
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain")
    ),
    tag = "hello"
)]
pub async fn hello_handler(Path(name): Path<String>) -> String {
    tracing::info!("Greeting {}", name);
    format!("Hello, {}!\n", name)
}
