//! Todo domain model.
//!
//! # Responsibility
//! - Define the list/item records owned by the store.
//! - Keep the serialized shape aligned with the external JSON bodies.
//!
//! # Invariants
//! - A `TodoItem` belongs to exactly one `TodoList` at any instant.
//! - Item ids are scoped to their owning list, not global.

pub mod todo_item;
pub mod todo_list;
