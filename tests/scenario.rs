use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use serde::de::DeserializeOwned;
use tempfile::TempDir;
use todo_services::app::build_router;
use todo_services::config::{Config, ServiceVariant};
use todo_services::models::ToDoItem;
use tower::ServiceExt;

async fn sqlite_app() -> (TempDir, Router) {
    let dir = TempDir::new().unwrap();
    let config = Config {
        variant: ServiceVariant::Sqlite,
        database_path: dir.path().join("todo.sqlite"),
        service_port: 0,
        service_host: "127.0.0.1".to_string(),
    };
    let app = build_router(config).await.unwrap();
    (dir, app)
}

async fn call(app: &Router, method: &str, uri: &str, item: Option<&ToDoItem>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match item {
        Some(item) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(item).unwrap())),
        None => builder.body(Body::empty()),
    }
    .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn body_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn buy_milk_scenario() {
    let (_dir, app) = sqlite_app().await;
    let milk = ToDoItem::new("buy milk", false);

    let response = call(&app, "POST", "/", Some(&milk)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json::<ToDoItem>(response).await, milk);

    let response = call(&app, "GET", "/", None).await;
    let items: Vec<ToDoItem> = body_json(response).await;
    assert_eq!(items.iter().filter(|item| **item == milk).count(), 1);

    let response = call(&app, "POST", "/", Some(&milk)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let bought = ToDoItem::new("buy milk", true);
    let response = call(&app, "PUT", "/buy%20milk", Some(&bought)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated: ToDoItem = body_json(response).await;
    assert!(updated.done);

    let response = call(&app, "GET", "/?done=true", None).await;
    let done: Vec<ToDoItem> = body_json(response).await;
    assert_eq!(done, vec![bought]);

    let response = call(&app, "GET", "/?done=false", None).await;
    let pending: Vec<ToDoItem> = body_json(response).await;
    assert!(pending.is_empty());
}

#[tokio::test]
async fn state_survives_restart() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        variant: ServiceVariant::Sqlite,
        database_path: dir.path().join("todo.sqlite"),
        service_port: 0,
        service_host: "127.0.0.1".to_string(),
    };

    let app = build_router(config.clone()).await.unwrap();
    let item = ToDoItem::new("persist me", true);
    let response = call(&app, "POST", "/", Some(&item)).await;
    assert_eq!(response.status(), StatusCode::OK);
    drop(app);

    let app = build_router(config).await.unwrap();
    let response = call(&app, "GET", "/persist%20me", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json::<ToDoItem>(response).await, item);
}

#[tokio::test]
async fn memory_variant_starts_seeded_and_forgets_on_restart() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        variant: ServiceVariant::Memory,
        database_path: dir.path().join("unused.sqlite"),
        service_port: 0,
        service_host: "127.0.0.1".to_string(),
    };

    let app = build_router(config.clone()).await.unwrap();
    let response = call(&app, "POST", "/append_list", Some(&ToDoItem::new("temp", false))).await;
    let items: Vec<ToDoItem> = body_json(response).await;
    assert_eq!(items.len(), 4);

    let app = build_router(config).await.unwrap();
    let response = call(&app, "GET", "/show_list", None).await;
    let items: Vec<ToDoItem> = body_json(response).await;
    assert_eq!(items.len(), 3);
    assert!(!dir.path().join("unused.sqlite").exists());
}
