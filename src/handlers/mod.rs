pub mod create;
pub mod get;
pub mod health;
pub mod hello;
pub mod list;
pub mod memory;
pub mod update;

pub use create::create_handler;
pub use get::get_handler;
pub use health::health_handler;
pub use hello::hello_handler;
pub use list::list_handler;
pub use memory::{append_list_handler, show_list_handler, update_item_by_title_handler};
pub use update::update_handler;
