use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::ToDoItem;

/// OpenAPI documentation for the persisted to-do service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "todo-services: persisted to-do API",
        version = "1.0.0",
        description = "A to-do list stored in SQLite, keyed by title"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::create::create_handler,
        handlers::get::get_handler,
        handlers::update::update_handler
    ),
    components(
        schemas(ToDoItem, ErrorResponse, HealthResponse, UnhealthyResponse)
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "todo", description = "Persisted to-do operations")
    )
)]
pub struct TodoApiDoc;

/// OpenAPI documentation for the in-memory to-do service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "todo-services: in-memory to-do API",
        version = "1.0.0",
        description = "A process-local to-do list with no persistence"
    ),
    paths(
        handlers::memory::show_list_handler,
        handlers::memory::append_list_handler,
        handlers::memory::update_item_by_title_handler
    ),
    components(schemas(ToDoItem, ErrorResponse)),
    tags((name = "memory", description = "In-memory to-do operations"))
)]
pub struct MemoryApiDoc;

/// OpenAPI documentation for the hello service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "todo-services: hello API",
        version = "1.0.0",
        description = "Plain-text greetings"
    ),
    paths(handlers::hello::hello_handler),
    tags((name = "hello", description = "Greeting operations"))
)]
pub struct HelloApiDoc;
