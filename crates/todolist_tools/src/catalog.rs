//! Static tool catalog: names, descriptions, argument schemas.

use serde_json::{json, Map, Value};

pub const CREATE_LIST_TOOL: &str = "create-todoList";
pub const RENAME_LIST_TOOL: &str = "changeName-todoList";
pub const DELETE_LIST_TOOL: &str = "delete-todoList";
pub const GET_LIST_TOOL: &str = "get-a-todoList";
pub const GET_ALL_LISTS_TOOL: &str = "getAll-todoLists";
pub const CREATE_ITEM_TOOL: &str = "create-todoItem-todoList";
pub const DELETE_ITEM_TOOL: &str = "delete-todoItem-todoList";
pub const SET_COMPLETED_TOOL: &str = "setCompleted-todoItem";
pub const SET_INCOMPLETED_TOOL: &str = "setIncompleted-todoItem";
pub const CHANGE_DESCRIPTION_TOOL: &str = "changeDecription-todoItem";
pub const MOVE_ITEM_TOOL: &str = "move-todoItem-todoList";

/// Declared argument type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// Non-negative whole number.
    Integer,
    String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgSpec {
    pub name: &'static str,
    pub kind: ArgKind,
    pub description: &'static str,
}

/// One invocable tool. Every declared argument is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub args: &'static [ArgSpec],
}

impl ToolSpec {
    /// JSON-schema object describing this tool's arguments.
    pub fn input_schema(&self) -> Value {
        let properties = self
            .args
            .iter()
            .map(|arg| {
                let kind = match arg.kind {
                    ArgKind::Integer => "integer",
                    ArgKind::String => "string",
                };
                (
                    arg.name.to_string(),
                    json!({ "type": kind, "description": arg.description }),
                )
            })
            .collect::<Map<String, Value>>();
        let required = self.args.iter().map(|arg| arg.name).collect::<Vec<_>>();
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// Listing entry: `{name, description, inputSchema}`.
    pub fn to_listing(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "inputSchema": self.input_schema(),
        })
    }
}

const fn integer(name: &'static str, description: &'static str) -> ArgSpec {
    ArgSpec {
        name,
        kind: ArgKind::Integer,
        description,
    }
}

const fn string(name: &'static str, description: &'static str) -> ArgSpec {
    ArgSpec {
        name,
        kind: ArgKind::String,
        description,
    }
}

static TOOL_CATALOG: [ToolSpec; 11] = [
    ToolSpec {
        name: CREATE_LIST_TOOL,
        description: "Tool that creates a new todoList",
        args: &[string("todoListName", "Name of the new todoList")],
    },
    ToolSpec {
        name: RENAME_LIST_TOOL,
        description: "Tool to change the name of a todoList",
        args: &[
            integer(
                "todoListId",
                "Id of the todoList whose name should be changed",
            ),
            string("todoListNewName", "New name for the todoList"),
        ],
    },
    ToolSpec {
        name: DELETE_LIST_TOOL,
        description: "Tool that deletes a todoList, including all the items that belong to it",
        args: &[integer(
            "todoListId",
            "Id of the todoList that wants to be deleted",
        )],
    },
    ToolSpec {
        name: GET_LIST_TOOL,
        description: "Tool to get the information of a todoList",
        args: &[integer(
            "todoListId",
            "Id of the todoList that wants to be retrieved",
        )],
    },
    ToolSpec {
        name: GET_ALL_LISTS_TOOL,
        description: "Tool to get all the todoLists, including all their items",
        args: &[],
    },
    ToolSpec {
        name: CREATE_ITEM_TOOL,
        description: "Tool that creates a new todoItem and adds it into a todoList",
        args: &[
            integer(
                "todoListId",
                "Id of the todoList where the new todoItem has to be added",
            ),
            string("description", "Description of the new todoItem"),
        ],
    },
    ToolSpec {
        name: DELETE_ITEM_TOOL,
        description: "Tool that deletes a todoItem from a todoList",
        args: &[
            integer(
                "todoListId",
                "Id of the todoList that has the todoItem that has to be deleted",
            ),
            integer(
                "todoItemId",
                "Id of the todoItem within the todoList to which it belongs",
            ),
        ],
    },
    ToolSpec {
        name: SET_COMPLETED_TOOL,
        description: "Tool that sets the state of a todoItem to completed",
        args: &[
            integer(
                "todoListId",
                "Id of the todoList that has the todoItem whose state has to be set to completed",
            ),
            integer(
                "todoItemId",
                "Id of the todoItem within the todoList whose state has to be set to completed",
            ),
        ],
    },
    ToolSpec {
        name: SET_INCOMPLETED_TOOL,
        description: "Tool that sets the state of a todoItem to incompleted",
        args: &[
            integer(
                "todoListId",
                "Id of the todoList that has the todoItem whose state has to be set to incompleted",
            ),
            integer(
                "todoItemId",
                "Id of the todoItem within the todoList whose state has to be set to incompleted",
            ),
        ],
    },
    ToolSpec {
        name: CHANGE_DESCRIPTION_TOOL,
        description: "Tool to change the description of a todoItem",
        args: &[
            integer(
                "todoListId",
                "Id of the todoList that has the todoItem whose description has to be changed",
            ),
            integer(
                "todoItemId",
                "Id of the todoItem within the todoList whose description has to be changed",
            ),
            string("description", "New description of the todoItem"),
        ],
    },
    ToolSpec {
        name: MOVE_ITEM_TOOL,
        description: "Tool to move a todoItem from one todoList to another todoList",
        args: &[
            integer(
                "todoListId",
                "Id of the todoList to which the todoItem belongs to currently",
            ),
            integer(
                "newTodoListId",
                "Id of the new todoList to which the todoItem will belong from now on",
            ),
            integer(
                "todoItemId",
                "Id of the todoItem within the todoList to which it currently belongs",
            ),
        ],
    },
];

/// All published tools in a stable order.
pub fn tool_catalog() -> &'static [ToolSpec] {
    &TOOL_CATALOG
}

/// Every tool as a listing entry, in catalog order.
pub fn catalog_listing() -> Value {
    Value::Array(TOOL_CATALOG.iter().map(ToolSpec::to_listing).collect())
}

/// Looks up a tool by name, ignoring surrounding whitespace.
pub fn find_tool(name: &str) -> Option<&'static ToolSpec> {
    let name = name.trim();
    TOOL_CATALOG.iter().find(|tool| tool.name == name)
}
