use serde::{Deserialize, Serialize};

/// A titled boolean task record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ToDoItem {
    pub title: String,
    #[serde(default)]
    pub done: bool,
}

impl ToDoItem {
    pub fn new(title: impl Into<String>, done: bool) -> Self {
        Self {
            title: title.into(),
            done,
        }
    }

    /// Reject items that cannot be addressed by title
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title must not be empty".to_string());
        }
        Ok(())
    }
}

/// Query parameters for list endpoints
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub done: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_serializes_to_json() {
        let json = serde_json::to_value(ToDoItem::new("buy milk", true)).unwrap();
        assert_eq!(json, serde_json::json!({"title": "buy milk", "done": true}));
    }

    #[test]
    fn item_defaults_done_to_false() {
        let item: ToDoItem = serde_json::from_str(r#"{"title":"no done field"}"#).unwrap();
        assert_eq!(item.title, "no done field");
        assert!(!item.done);
    }

    #[test]
    fn item_rejects_missing_title() {
        let result: Result<ToDoItem, _> = serde_json::from_str(r#"{"done":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_blank_title() {
        assert!(ToDoItem::new("", false).validate().is_err());
        assert!(ToDoItem::new("   ", true).validate().is_err());
        assert!(ToDoItem::new("Profit", false).validate().is_ok());
    }
}
