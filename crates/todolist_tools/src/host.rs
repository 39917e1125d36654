//! Tool dispatch over one owned todo service.

use crate::catalog::{
    find_tool, ArgKind, ToolSpec, CHANGE_DESCRIPTION_TOOL, CREATE_ITEM_TOOL, CREATE_LIST_TOOL,
    DELETE_ITEM_TOOL, DELETE_LIST_TOOL, GET_ALL_LISTS_TOOL, GET_LIST_TOOL, MOVE_ITEM_TOOL,
    RENAME_LIST_TOOL, SET_COMPLETED_TOOL, SET_INCOMPLETED_TOOL,
};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use todolist_core::{
    in_memory_service, ErrorMarker, InMemoryTodoService, ServiceResult, TodoServiceError,
};

/// Result envelope returned to the calling agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Human-readable result: entity JSON, confirmation, or error text.
    pub text: String,
}

impl ToolResponse {
    fn success(text: impl Into<String>) -> Self {
        Self {
            ok: true,
            text: text.into(),
        }
    }

    fn failure(text: impl Into<String>) -> Self {
        Self {
            ok: false,
            text: text.into(),
        }
    }
}

/// Invocation shape errors, raised before the service is reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCallError {
    UnknownTool(String),
    MissingArgument {
        tool: &'static str,
        arg: &'static str,
    },
    InvalidArgument {
        tool: &'static str,
        arg: &'static str,
        expected: ArgKind,
    },
}

impl Display for ToolCallError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownTool(name) => write!(f, "unknown tool `{name}`"),
            Self::MissingArgument { tool, arg } => {
                write!(f, "tool `{tool}` is missing argument `{arg}`")
            }
            Self::InvalidArgument {
                tool,
                arg,
                expected,
            } => {
                let expected = match expected {
                    ArgKind::Integer => "a non-negative integer",
                    ArgKind::String => "a string",
                };
                write!(f, "tool `{tool}` argument `{arg}` must be {expected}")
            }
        }
    }
}

impl Error for ToolCallError {}

/// Owns the process store and answers tool calls one at a time.
pub struct ToolHost {
    service: InMemoryTodoService,
}

impl Default for ToolHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolHost {
    /// Creates a host over a fresh, empty store.
    pub fn new() -> Self {
        Self {
            service: in_memory_service(),
        }
    }

    /// Read access for callers that render state outside tool calls.
    pub fn service(&self) -> &InMemoryTodoService {
        &self.service
    }

    /// Runs one tool call. `args` is the JSON arguments object; `null` is
    /// accepted for tools without arguments.
    pub fn call(&mut self, tool_name: &str, args: &Value) -> ToolResponse {
        let tool = match find_tool(tool_name) {
            Some(tool) => tool,
            None => return invalid_call(ToolCallError::UnknownTool(tool_name.trim().to_string())),
        };
        debug!("event=tool_call module=tools status=start tool={}", tool.name);

        match self.dispatch(tool, &ToolArgs { tool, args }) {
            Ok(response) => response,
            Err(err) => invalid_call(err),
        }
    }

    fn dispatch(
        &mut self,
        tool: &'static ToolSpec,
        args: &ToolArgs<'_>,
    ) -> Result<ToolResponse, ToolCallError> {
        let service = &mut self.service;
        let response = match tool.name {
            CREATE_LIST_TOOL => render_entity(service.create_list(args.string("todoListName")?)),
            RENAME_LIST_TOOL => render_entity(service.rename_list(
                args.integer("todoListId")?,
                args.string("todoListNewName")?,
            )),
            DELETE_LIST_TOOL => {
                let list_id = args.integer("todoListId")?;
                render_done(
                    service.delete_list(list_id),
                    format!("todoList {list_id} deleted, including all of its items"),
                )
            }
            GET_LIST_TOOL => render_entity(service.get_list(args.integer("todoListId")?)),
            GET_ALL_LISTS_TOOL => render_entity(Ok(service.list_all())),
            CREATE_ITEM_TOOL => render_entity(
                service.create_item(args.integer("todoListId")?, args.string("description")?),
            ),
            DELETE_ITEM_TOOL => {
                let list_id = args.integer("todoListId")?;
                let item_id = args.integer("todoItemId")?;
                render_done(
                    service.delete_item(list_id, item_id),
                    format!("todoItem {item_id} deleted from todoList {list_id}"),
                )
            }
            SET_COMPLETED_TOOL => render_entity(service.set_completion(
                args.integer("todoListId")?,
                args.integer("todoItemId")?,
                true,
            )),
            SET_INCOMPLETED_TOOL => render_entity(service.set_completion(
                args.integer("todoListId")?,
                args.integer("todoItemId")?,
                false,
            )),
            CHANGE_DESCRIPTION_TOOL => render_entity(service.set_description(
                args.integer("todoListId")?,
                args.integer("todoItemId")?,
                args.string("description")?,
            )),
            MOVE_ITEM_TOOL => render_entity(service.move_item(
                args.integer("todoListId")?,
                args.integer("newTodoListId")?,
                args.integer("todoItemId")?,
            )),
            other => return Err(ToolCallError::UnknownTool(other.to_string())),
        };
        Ok(response)
    }
}

/// Typed accessors over the raw arguments object of one call.
struct ToolArgs<'a> {
    tool: &'static ToolSpec,
    args: &'a Value,
}

impl ToolArgs<'_> {
    fn integer(&self, name: &'static str) -> Result<u64, ToolCallError> {
        self.value(name)?
            .as_u64()
            .ok_or(ToolCallError::InvalidArgument {
                tool: self.tool.name,
                arg: name,
                expected: ArgKind::Integer,
            })
    }

    fn string(&self, name: &'static str) -> Result<String, ToolCallError> {
        self.value(name)?
            .as_str()
            .map(str::to_string)
            .ok_or(ToolCallError::InvalidArgument {
                tool: self.tool.name,
                arg: name,
                expected: ArgKind::String,
            })
    }

    fn value(&self, name: &'static str) -> Result<&Value, ToolCallError> {
        self.args
            .get(name)
            .filter(|value| !value.is_null())
            .ok_or(ToolCallError::MissingArgument {
                tool: self.tool.name,
                arg: name,
            })
    }
}

fn render_entity<T: Serialize>(result: ServiceResult<T>) -> ToolResponse {
    match result {
        Ok(entity) => match serde_json::to_string_pretty(&entity) {
            Ok(text) => ToolResponse::success(text),
            Err(err) => ToolResponse::failure(format!("Error: failed to render result: {err}")),
        },
        Err(err) => render_error(&err),
    }
}

fn render_done(result: ServiceResult<()>, confirmation: String) -> ToolResponse {
    match result {
        Ok(()) => ToolResponse::success(confirmation),
        Err(err) => render_error(&err),
    }
}

fn render_error(err: &TodoServiceError) -> ToolResponse {
    let marker = serde_json::to_string(&ErrorMarker::from(err))
        .unwrap_or_else(|_| format!("{{\"error\":\"{}\"}}", err.code()));
    ToolResponse::failure(format!("Error, {err} {marker}"))
}

fn invalid_call(err: ToolCallError) -> ToolResponse {
    warn!("event=tool_call module=tools status=invalid reason={err}");
    ToolResponse::failure(format!("Error, {err}"))
}
