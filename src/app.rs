use anyhow::Result;
use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::{HelloApiDoc, MemoryApiDoc, TodoApiDoc};
use crate::config::{Config, ServiceVariant};
use crate::handlers;
use crate::memory::MemoryStore;
use crate::routes;
use crate::sqlite::TodoDb;
use crate::state::{AppState, MemoryState};

/// Router of the persisted to-do service
///
/// `/health` and the API doc paths shadow items with those titles on
/// `GET`/`PUT /{item_title}`.
pub fn todo_router(state: AppState) -> Router {
    Router::new()
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(
            routes::TODO_LIST,
            get(handlers::list_handler).post(handlers::create_handler),
        )
        .route(
            routes::TODO_ITEM,
            get(handlers::get_handler).put(handlers::update_handler),
        )
        .with_state(state)
        .merge(
            SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, TodoApiDoc::openapi()),
        )
        .layer(TraceLayer::new_for_http())
}

/// Router of the in-memory to-do service
pub fn memory_router(state: MemoryState) -> Router {
    Router::new()
        .route(routes::MEMORY_SHOW, get(handlers::show_list_handler))
        .route(routes::MEMORY_APPEND, post(handlers::append_list_handler))
        .route(
            routes::MEMORY_UPDATE,
            put(handlers::update_item_by_title_handler),
        )
        .with_state(state)
        .merge(
            SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, MemoryApiDoc::openapi()),
        )
        .layer(TraceLayer::new_for_http())
}

/// Router of the hello service
pub fn hello_router() -> Router {
    Router::new()
        .route(routes::HELLO, get(handlers::hello_handler))
        .merge(
            SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, HelloApiDoc::openapi()),
        )
        .layer(TraceLayer::new_for_http())
}

/// Build the router for the configured variant
///
/// The persisted variant opens (and if needed creates) its database here, so
/// a bad `DATABASE_PATH` fails startup instead of the first request.
pub async fn build_router(config: Config) -> Result<Router> {
    let router = match config.variant {
        ServiceVariant::Hello => hello_router(),
        ServiceVariant::Memory => memory_router(MemoryState {
            store: MemoryStore::seeded(),
        }),
        ServiceVariant::Sqlite => {
            let db = TodoDb::from_config(&config).await?;
            todo_router(AppState {
                db,
                config: Arc::new(config),
            })
        }
    };
    Ok(router)
}
