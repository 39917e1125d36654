//! Todo list repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Own list and item identity allocation.
//! - Provide linear-scan lookups by id and by name.
//!
//! # Invariants
//! - List ids come from one monotonic counter per store and are never reused.
//! - Item ids come from one monotonic counter per list and are never reused
//!   while that list exists.
//! - Lists and items keep insertion order.

use crate::model::todo_item::{TodoItem, TodoItemId};
use crate::model::todo_list::{TodoList, TodoListId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Missing-record errors raised by structural mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    ListNotFound(TodoListId),
    ItemNotFound {
        list_id: TodoListId,
        item_id: TodoItemId,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ListNotFound(id) => write!(f, "todo list not found: {id}"),
            Self::ItemNotFound { list_id, item_id } => {
                write!(f, "todo item not found: {item_id} in list {list_id}")
            }
        }
    }
}

impl Error for RepoError {}

/// Storage contract consumed by `TodoService`.
pub trait TodoListRepository {
    /// All live lists in creation order.
    fn lists(&self) -> &[TodoList];
    fn get_list(&self, id: TodoListId) -> Option<&TodoList>;
    fn find_list_by_name(&self, name: &str) -> Option<&TodoList>;
    /// Reserves the next list id.
    fn next_list_id(&mut self) -> TodoListId;
    /// Reserves the next item id inside `list_id`.
    fn next_item_id(&mut self, list_id: TodoListId) -> RepoResult<TodoItemId>;
    fn insert_list(&mut self, list: TodoList);
    fn remove_list(&mut self, id: TodoListId) -> RepoResult<TodoList>;
    fn rename_list(&mut self, id: TodoListId, name: &str) -> RepoResult<()>;
    fn insert_item(&mut self, list_id: TodoListId, item: TodoItem) -> RepoResult<()>;
    /// Inserts `item` at `index`, or appends when `index` is past the end.
    fn insert_item_at(
        &mut self,
        list_id: TodoListId,
        index: usize,
        item: TodoItem,
    ) -> RepoResult<()>;
    fn remove_item(&mut self, list_id: TodoListId, item_id: TodoItemId) -> RepoResult<TodoItem>;
    /// Replaces the stored item that has the same id as `item`.
    fn update_item(&mut self, list_id: TodoListId, item: &TodoItem) -> RepoResult<()>;
}

/// Process-lifetime store backed by plain vectors.
#[derive(Debug, Default)]
pub struct InMemoryTodoListRepository {
    lists: Vec<TodoList>,
    /// Parallel to `lists`: last item id issued for the list at the same index.
    item_seqs: Vec<TodoItemId>,
    last_list_id: TodoListId,
}

impl InMemoryTodoListRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: TodoListId) -> RepoResult<usize> {
        self.lists
            .iter()
            .position(|list| list.id == id)
            .ok_or(RepoError::ListNotFound(id))
    }

    fn list_mut(&mut self, id: TodoListId) -> RepoResult<&mut TodoList> {
        let index = self.position(id)?;
        Ok(&mut self.lists[index])
    }
}

impl TodoListRepository for InMemoryTodoListRepository {
    fn lists(&self) -> &[TodoList] {
        &self.lists
    }

    fn get_list(&self, id: TodoListId) -> Option<&TodoList> {
        self.lists.iter().find(|list| list.id == id)
    }

    fn find_list_by_name(&self, name: &str) -> Option<&TodoList> {
        self.lists.iter().find(|list| list.name == name)
    }

    fn next_list_id(&mut self) -> TodoListId {
        self.last_list_id += 1;
        self.last_list_id
    }

    fn next_item_id(&mut self, list_id: TodoListId) -> RepoResult<TodoItemId> {
        let index = self.position(list_id)?;
        let seq = &mut self.item_seqs[index];
        *seq += 1;
        Ok(*seq)
    }

    fn insert_list(&mut self, list: TodoList) {
        // Seed from existing items so lists built outside the store keep
        // unique ids for later inserts.
        let seed = list.items.iter().map(|item| item.id).max().unwrap_or(0);
        self.last_list_id = self.last_list_id.max(list.id);
        self.lists.push(list);
        self.item_seqs.push(seed);
    }

    fn remove_list(&mut self, id: TodoListId) -> RepoResult<TodoList> {
        let index = self.position(id)?;
        self.item_seqs.remove(index);
        Ok(self.lists.remove(index))
    }

    fn rename_list(&mut self, id: TodoListId, name: &str) -> RepoResult<()> {
        self.list_mut(id)?.name = name.to_string();
        Ok(())
    }

    fn insert_item(&mut self, list_id: TodoListId, item: TodoItem) -> RepoResult<()> {
        self.insert_item_at(list_id, usize::MAX, item)
    }

    fn insert_item_at(
        &mut self,
        list_id: TodoListId,
        index: usize,
        item: TodoItem,
    ) -> RepoResult<()> {
        let slot = self.position(list_id)?;
        let seq = &mut self.item_seqs[slot];
        *seq = (*seq).max(item.id);
        let items = &mut self.lists[slot].items;
        items.insert(index.min(items.len()), item);
        Ok(())
    }

    fn remove_item(&mut self, list_id: TodoListId, item_id: TodoItemId) -> RepoResult<TodoItem> {
        let list = self.list_mut(list_id)?;
        let index = list
            .items
            .iter()
            .position(|item| item.id == item_id)
            .ok_or(RepoError::ItemNotFound { list_id, item_id })?;
        Ok(list.items.remove(index))
    }

    fn update_item(&mut self, list_id: TodoListId, item: &TodoItem) -> RepoResult<()> {
        let stored = self
            .list_mut(list_id)?
            .item_mut(item.id)
            .ok_or(RepoError::ItemNotFound {
                list_id,
                item_id: item.id,
            })?;
        *stored = item.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryTodoListRepository, RepoError, TodoListRepository};
    use crate::model::todo_item::TodoItem;
    use crate::model::todo_list::TodoList;

    #[test]
    fn list_ids_start_at_one_and_are_not_reused() {
        let mut repo = InMemoryTodoListRepository::new();
        let first = repo.next_list_id();
        repo.insert_list(TodoList::new(first, "a"));
        let second = repo.next_list_id();
        repo.insert_list(TodoList::new(second, "b"));
        assert_eq!((first, second), (1, 2));

        repo.remove_list(second).expect("list 2 should be removable");
        assert_eq!(repo.next_list_id(), 3);
    }

    #[test]
    fn item_ids_are_scoped_per_list() {
        let mut repo = InMemoryTodoListRepository::new();
        repo.insert_list(TodoList::new(1, "a"));
        repo.insert_list(TodoList::new(2, "b"));

        assert_eq!(repo.next_item_id(1), Ok(1));
        assert_eq!(repo.next_item_id(1), Ok(2));
        assert_eq!(repo.next_item_id(2), Ok(1));
        assert_eq!(repo.next_item_id(9), Err(RepoError::ListNotFound(9)));
    }

    #[test]
    fn insert_list_seeds_item_counter_from_existing_items() {
        let mut repo = InMemoryTodoListRepository::new();
        let mut list = TodoList::new(5, "imported");
        list.items.push(TodoItem::new(4, "old"));
        repo.insert_list(list);

        assert_eq!(repo.next_item_id(5), Ok(5));
        assert_eq!(repo.next_list_id(), 6);
    }

    #[test]
    fn remove_item_reports_scoped_not_found() {
        let mut repo = InMemoryTodoListRepository::new();
        repo.insert_list(TodoList::new(1, "a"));

        let err = repo.remove_item(1, 7).expect_err("missing item must fail");
        assert_eq!(
            err,
            RepoError::ItemNotFound {
                list_id: 1,
                item_id: 7
            }
        );
    }

    #[test]
    fn insert_item_at_keeps_position_and_clamps_past_end() {
        let mut repo = InMemoryTodoListRepository::new();
        repo.insert_list(TodoList::new(1, "a"));
        repo.insert_item(1, TodoItem::new(1, "first"))
            .expect("insert should succeed");
        repo.insert_item(1, TodoItem::new(3, "third"))
            .expect("insert should succeed");

        repo.insert_item_at(1, 1, TodoItem::new(2, "second"))
            .expect("positional insert should succeed");
        repo.insert_item_at(1, 99, TodoItem::new(4, "tail"))
            .expect("past-end insert should append");

        let ids = repo
            .get_list(1)
            .map(|list| list.items.iter().map(|item| item.id).collect::<Vec<_>>())
            .expect("list 1 should exist");
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(repo.next_item_id(1), Ok(5));
        assert_eq!(
            repo.insert_item_at(7, 0, TodoItem::new(1, "x")),
            Err(RepoError::ListNotFound(7))
        );
    }

    #[test]
    fn update_item_replaces_stored_record() {
        let mut repo = InMemoryTodoListRepository::new();
        repo.insert_list(TodoList::new(1, "a"));
        repo.insert_item(1, TodoItem::new(1, "draft"))
            .expect("insert should succeed");

        let mut item = TodoItem::new(1, "final");
        item.completed = true;
        repo.update_item(1, &item).expect("update should succeed");

        let stored = repo.get_list(1).and_then(|list| list.item(1)).cloned();
        assert_eq!(stored, Some(item));
    }
}
