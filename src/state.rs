use crate::config::Config;
use crate::memory::MemoryStore;
use crate::sqlite::TodoDb;
use std::sync::Arc;

/// Shared application state for the persisted variant
#[derive(Clone)]
pub struct AppState {
    pub db: TodoDb,
    pub config: Arc<Config>,
}

/// Shared application state for the memory variant
#[derive(Clone)]
pub struct MemoryState {
    pub store: MemoryStore,
}
