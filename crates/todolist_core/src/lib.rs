//! Core domain logic for the todo list service.
//! This crate is the single source of truth for list/item invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::todo_item::{TodoItem, TodoItemId};
pub use model::todo_list::{TodoList, TodoListId};
pub use repo::list_repo::{InMemoryTodoListRepository, RepoError, RepoResult, TodoListRepository};
pub use service::todo_service::{
    ErrorMarker, ServiceResult, TodoService, TodoServiceError, ITEM_NOT_FOUND_CODE,
    LIST_ALREADY_EXISTS_CODE, LIST_NOT_FOUND_CODE,
};

/// Service wired to the process-lifetime in-memory store.
pub type InMemoryTodoService = TodoService<InMemoryTodoListRepository>;

/// Builds the single store + service pair owned by a process.
pub fn in_memory_service() -> InMemoryTodoService {
    TodoService::new(InMemoryTodoListRepository::new())
}

#[cfg(test)]
mod tests {
    use super::in_memory_service;

    #[test]
    fn fresh_service_has_no_lists() {
        assert!(in_memory_service().list_all().is_empty());
    }
}
