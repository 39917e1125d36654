//! Agent-callable tool surface over the todo service.
//!
//! # Responsibility
//! - Publish each todo use case as a named tool with a declared argument
//!   schema.
//! - Translate service results and typed errors into text envelopes.
//!
//! # Invariants
//! - No domain logic lives here; error kinds pass through unchanged.
//! - Tool calls never panic, including on malformed arguments.

mod catalog;
mod host;

pub use catalog::{
    catalog_listing, find_tool, tool_catalog, ArgKind, ArgSpec, ToolSpec, CHANGE_DESCRIPTION_TOOL,
    CREATE_ITEM_TOOL, CREATE_LIST_TOOL, DELETE_ITEM_TOOL, DELETE_LIST_TOOL, GET_ALL_LISTS_TOOL,
    GET_LIST_TOOL, MOVE_ITEM_TOOL, RENAME_LIST_TOOL, SET_COMPLETED_TOOL, SET_INCOMPLETED_TOOL,
};
pub use host::{ToolCallError, ToolHost, ToolResponse};
