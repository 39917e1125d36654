//! Todo list use-case service.
//!
//! # Responsibility
//! - Enforce list-name uniqueness and list/item existence above the
//!   repository layer.
//! - Provide list create/rename/delete and item create/describe/complete/
//!   delete/move operations.
//!
//! # Invariants
//! - Expected domain conditions are returned as `TodoServiceError`, never
//!   as panics.
//! - `move_item` never leaves the item in both lists or in neither.
//! - Log events carry ids and counts only, never names or descriptions.

use crate::model::todo_item::{TodoItem, TodoItemId};
use crate::model::todo_list::{TodoList, TodoListId};
use crate::repo::list_repo::{RepoError, TodoListRepository};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Wire code for a missing list.
pub const LIST_NOT_FOUND_CODE: &str = "todolist-does-not-exist";
/// Wire code for a missing item inside an existing list.
pub const ITEM_NOT_FOUND_CODE: &str = "todoitem-does-not-exist";
/// Wire code for a create request with a name already in use.
pub const LIST_ALREADY_EXISTS_CODE: &str = "todolist-already-exists";

/// Errors from todo service operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoServiceError {
    /// No list has this id.
    ListNotFound(TodoListId),
    /// No list has this name.
    ListNameNotFound(String),
    /// The list exists but holds no item with this id.
    ItemNotFound {
        list_id: TodoListId,
        item_id: TodoItemId,
    },
    /// Another live list already uses this name.
    ListAlreadyExists(String),
}

impl TodoServiceError {
    /// Stable caller-facing marker for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ListNotFound(_) | Self::ListNameNotFound(_) => LIST_NOT_FOUND_CODE,
            Self::ItemNotFound { .. } => ITEM_NOT_FOUND_CODE,
            Self::ListAlreadyExists(_) => LIST_ALREADY_EXISTS_CODE,
        }
    }
}

impl Display for TodoServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ListNotFound(id) => write!(f, "todo list not found: {id}"),
            Self::ListNameNotFound(name) => write!(f, "todo list not found: `{name}`"),
            Self::ItemNotFound { list_id, item_id } => {
                write!(f, "todo item not found: {item_id} in list {list_id}")
            }
            Self::ListAlreadyExists(name) => write!(f, "todo list already exists: `{name}`"),
        }
    }
}

impl Error for TodoServiceError {}

impl From<RepoError> for TodoServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::ListNotFound(id) => Self::ListNotFound(id),
            RepoError::ItemNotFound { list_id, item_id } => {
                Self::ItemNotFound { list_id, item_id }
            }
        }
    }
}

/// `{"error": <code>}` body used by transport adapters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMarker {
    pub error: String,
}

impl From<&TodoServiceError> for ErrorMarker {
    fn from(value: &TodoServiceError) -> Self {
        Self {
            error: value.code().to_string(),
        }
    }
}

pub type ServiceResult<T> = Result<T, TodoServiceError>;

/// Todo service facade. Sole owner of its repository.
pub struct TodoService<R: TodoListRepository> {
    repo: R,
}

impl<R: TodoListRepository> TodoService<R> {
    /// Creates service from repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns every list with its items, in creation order.
    pub fn list_all(&self) -> Vec<TodoList> {
        let lists = self.repo.lists().to_vec();
        debug!(
            "event=todo_list_all module=service status=ok count={}",
            lists.len()
        );
        lists
    }

    /// Gets one list by id.
    pub fn get_list(&self, list_id: TodoListId) -> ServiceResult<TodoList> {
        self.repo
            .get_list(list_id)
            .cloned()
            .ok_or_else(|| rejected("todo_list_get", TodoServiceError::ListNotFound(list_id)))
    }

    /// Gets one list by its unique name.
    pub fn get_list_by_name(&self, name: &str) -> ServiceResult<TodoList> {
        self.repo.find_list_by_name(name).cloned().ok_or_else(|| {
            rejected(
                "todo_list_get_by_name",
                TodoServiceError::ListNameNotFound(name.to_string()),
            )
        })
    }

    /// Creates one empty list.
    ///
    /// # Errors
    /// - `ListAlreadyExists` when a live list already has `name`; the
    ///   existing list is left untouched.
    pub fn create_list(&mut self, name: impl Into<String>) -> ServiceResult<TodoList> {
        let name = name.into();
        if self.repo.find_list_by_name(&name).is_some() {
            return Err(rejected(
                "todo_list_create",
                TodoServiceError::ListAlreadyExists(name),
            ));
        }

        let list = TodoList::new(self.repo.next_list_id(), name);
        self.repo.insert_list(list.clone());
        info!(
            "event=todo_list_create module=service status=ok list_id={}",
            list.id
        );
        Ok(list)
    }

    /// Renames one list.
    ///
    /// Name uniqueness is only enforced at creation time.
    pub fn rename_list(
        &mut self,
        list_id: TodoListId,
        name: impl Into<String>,
    ) -> ServiceResult<TodoList> {
        let name = name.into();
        self.repo
            .rename_list(list_id, &name)
            .map_err(|err| rejected("todo_list_rename", err.into()))?;
        info!("event=todo_list_rename module=service status=ok list_id={list_id}");
        self.get_list(list_id)
    }

    /// Deletes one list together with all of its items.
    pub fn delete_list(&mut self, list_id: TodoListId) -> ServiceResult<()> {
        let removed = self
            .repo
            .remove_list(list_id)
            .map_err(|err| rejected("todo_list_delete", err.into()))?;
        info!(
            "event=todo_list_delete module=service status=ok list_id={} items={} completed={}",
            list_id,
            removed.items.len(),
            removed.completed_count()
        );
        Ok(())
    }

    /// Appends a new, not completed item to one list.
    pub fn create_item(
        &mut self,
        list_id: TodoListId,
        description: impl Into<String>,
    ) -> ServiceResult<TodoItem> {
        let item_id = self
            .repo
            .next_item_id(list_id)
            .map_err(|err| rejected("todo_item_create", err.into()))?;
        let item = TodoItem::new(item_id, description);
        self.repo
            .insert_item(list_id, item.clone())
            .map_err(|err| rejected("todo_item_create", err.into()))?;
        info!(
            "event=todo_item_create module=service status=ok list_id={list_id} item_id={item_id}"
        );
        Ok(item)
    }

    /// Deletes one item from one list.
    pub fn delete_item(&mut self, list_id: TodoListId, item_id: TodoItemId) -> ServiceResult<()> {
        self.repo
            .remove_item(list_id, item_id)
            .map_err(|err| rejected("todo_item_delete", err.into()))?;
        info!(
            "event=todo_item_delete module=service status=ok list_id={list_id} item_id={item_id}"
        );
        Ok(())
    }

    /// Sets the completion flag. Idempotent for repeated values.
    pub fn set_completion(
        &mut self,
        list_id: TodoListId,
        item_id: TodoItemId,
        completed: bool,
    ) -> ServiceResult<TodoItem> {
        self.update_item("todo_item_set_completion", list_id, item_id, |item| {
            item.completed = completed;
        })
    }

    /// Replaces the description of one item.
    pub fn set_description(
        &mut self,
        list_id: TodoListId,
        item_id: TodoItemId,
        description: impl Into<String>,
    ) -> ServiceResult<TodoItem> {
        let description = description.into();
        self.update_item("todo_item_set_description", list_id, item_id, |item| {
            item.description = description;
        })
    }

    /// Moves one item from `source_list_id` to `dest_list_id`.
    ///
    /// The item is recreated in the destination with a fresh list-scoped
    /// id, then removed from the source, then its completion flag is
    /// reapplied. Returns the item as it now exists in the destination.
    ///
    /// # Errors
    /// - `ListNotFound` when either list is missing.
    /// - `ItemNotFound` when the source list has no such item.
    ///
    /// On any error both lists are left as they were.
    pub fn move_item(
        &mut self,
        source_list_id: TodoListId,
        dest_list_id: TodoListId,
        item_id: TodoItemId,
    ) -> ServiceResult<TodoItem> {
        let (original_index, original) =
            self.resolve_move_source(source_list_id, dest_list_id, item_id)?;

        let created = self.create_item(dest_list_id, original.description.clone())?;
        if let Err(err) = self.repo.remove_item(source_list_id, item_id) {
            self.discard_move_copy(dest_list_id, created.id);
            return Err(rejected("todo_item_move", err.into()));
        }

        let moved = if original.completed {
            match self.set_completion(dest_list_id, created.id, true) {
                Ok(item) => item,
                Err(err) => {
                    self.discard_move_copy(dest_list_id, created.id);
                    self.restore_move_source(source_list_id, original_index, original);
                    return Err(err);
                }
            }
        } else {
            created
        };

        info!(
            "event=todo_item_move module=service status=ok source_list_id={} dest_list_id={} old_item_id={} new_item_id={}",
            source_list_id, dest_list_id, item_id, moved.id
        );
        Ok(moved)
    }

    fn resolve_move_source(
        &self,
        source_list_id: TodoListId,
        dest_list_id: TodoListId,
        item_id: TodoItemId,
    ) -> ServiceResult<(usize, TodoItem)> {
        let source = self.repo.get_list(source_list_id).ok_or_else(|| {
            rejected(
                "todo_item_move",
                TodoServiceError::ListNotFound(source_list_id),
            )
        })?;
        if self.repo.get_list(dest_list_id).is_none() {
            return Err(rejected(
                "todo_item_move",
                TodoServiceError::ListNotFound(dest_list_id),
            ));
        }
        source
            .items
            .iter()
            .position(|item| item.id == item_id)
            .map(|index| (index, source.items[index].clone()))
            .ok_or_else(|| {
                rejected(
                    "todo_item_move",
                    TodoServiceError::ItemNotFound {
                        list_id: source_list_id,
                        item_id,
                    },
                )
            })
    }

    /// Puts a removed source item back at its old position.
    fn restore_move_source(&mut self, source_list_id: TodoListId, index: usize, item: TodoItem) {
        let item_id = item.id;
        if self.repo.insert_item_at(source_list_id, index, item).is_err() {
            warn!(
                "event=todo_item_move module=service status=rollback_failed source_list_id={source_list_id} item_id={item_id}"
            );
        }
    }

    fn discard_move_copy(&mut self, dest_list_id: TodoListId, item_id: TodoItemId) {
        if self.repo.remove_item(dest_list_id, item_id).is_err() {
            warn!(
                "event=todo_item_move module=service status=rollback_failed dest_list_id={dest_list_id} item_id={item_id}"
            );
        }
    }

    fn update_item(
        &mut self,
        event: &'static str,
        list_id: TodoListId,
        item_id: TodoItemId,
        apply: impl FnOnce(&mut TodoItem),
    ) -> ServiceResult<TodoItem> {
        let list = self
            .repo
            .get_list(list_id)
            .ok_or_else(|| rejected(event, TodoServiceError::ListNotFound(list_id)))?;
        let mut item = list.item(item_id).cloned().ok_or_else(|| {
            rejected(event, TodoServiceError::ItemNotFound { list_id, item_id })
        })?;

        apply(&mut item);
        self.repo
            .update_item(list_id, &item)
            .map_err(|err| rejected(event, err.into()))?;
        info!("event={event} module=service status=ok list_id={list_id} item_id={item_id}");
        Ok(item)
    }
}

fn rejected(event: &'static str, err: TodoServiceError) -> TodoServiceError {
    debug!(
        "event={event} module=service status=rejected code={}",
        err.code()
    );
    err
}
