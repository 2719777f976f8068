use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::ToDoItem;

/// Process-wide to-do list shared by the handlers of the memory variant
///
/// Each method holds the lock for its own duration only. Nothing is atomic
/// across calls, titles are not unique, and renames may produce duplicates.
#[derive(Clone, Default)]
pub struct MemoryStore {
    items: Arc<RwLock<Vec<ToDoItem>>>,
}

impl MemoryStore {
    pub fn new(items: Vec<ToDoItem>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    /// Store pre-populated with the startup list
    pub fn seeded() -> Self {
        Self::new(vec![
            ToDoItem::new("Start writing TODO list", true),
            ToDoItem::new("???", false),
            ToDoItem::new("Profit", false),
        ])
    }

    /// Items in insertion order, optionally filtered by `done`
    pub async fn show_list(&self, done: Option<bool>) -> Vec<ToDoItem> {
        let items = self.items.read().await;
        match done {
            Some(done) => items.iter().filter(|item| item.done == done).cloned().collect(),
            None => items.clone(),
        }
    }

    /// Append without any uniqueness check and return the whole list
    pub async fn append(&self, item: ToDoItem) -> Vec<ToDoItem> {
        let mut items = self.items.write().await;
        items.push(item);
        tracing::debug!("Appended item, list now holds {}", items.len());
        items.clone()
    }

    /// First item with the given title
    ///
    /// Not routed over HTTP; kept as the lookup half of the store's contract.
    pub async fn get_by_title(&self, title: &str) -> Option<ToDoItem> {
        let items = self.items.read().await;
        items.iter().find(|item| item.title == title).cloned()
    }

    /// Overwrite both fields of the first item titled `current_title`
    pub async fn update_by_title(
        &self,
        current_title: &str,
        new_item: ToDoItem,
    ) -> Option<ToDoItem> {
        let mut items = self.items.write().await;
        let item = items.iter_mut().find(|item| item.title == current_title)?;
        *item = new_item;
        Some(item.clone())
    }
}
