//! Todo item record.

use serde::{Deserialize, Serialize};

/// Identifier of an item, unique only within its owning list.
pub type TodoItemId = u64;

/// One entry of a todo list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Serialized as `itemId` to match external schema naming.
    #[serde(rename = "itemId")]
    pub id: TodoItemId,
    pub description: String,
    pub completed: bool,
}

impl TodoItem {
    /// Creates an item that is not completed yet.
    pub fn new(id: TodoItemId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            completed: false,
        }
    }
}
