// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const HELLO: &str = "/hello/{name}";

pub const TODO_LIST: &str = "/";
pub const TODO_ITEM: &str = "/{item_title}";

pub const MEMORY_SHOW: &str = "/show_list";
pub const MEMORY_APPEND: &str = "/append_list";
pub const MEMORY_UPDATE: &str = "/update_item_by_title/{item_title}";

pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI: &str = "/swagger-ui";
