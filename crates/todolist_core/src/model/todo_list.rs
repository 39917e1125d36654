//! Todo list record.
//!
//! # Invariants
//! - `items` keeps insertion order.
//! - Item ids are unique inside one list.

use crate::model::todo_item::{TodoItem, TodoItemId};
use serde::{Deserialize, Serialize};

/// Process-unique list identifier. Never reused within one store.
pub type TodoListId = u64;

/// Named, ordered container of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: TodoListId,
    pub name: String,
    pub items: Vec<TodoItem>,
}

impl TodoList {
    /// Creates an empty list.
    pub fn new(id: TodoListId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Finds one item by its list-scoped id.
    pub fn item(&self, item_id: TodoItemId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    /// Mutable variant of [`TodoList::item`].
    pub fn item_mut(&mut self, item_id: TodoItemId) -> Option<&mut TodoItem> {
        self.items.iter_mut().find(|item| item.id == item_id)
    }

    /// Number of items with `completed == true`.
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }
}
