//! Add and delete handlers for the kanban MCP server

use crate::KanbanServerHandler;
use crate::validation;
use crate::view::UiEvent;
use mcp_attr::Result as McpResult;

impl KanbanServerHandler {
    /// "Add Task" clicked: appends a placeholder card to the column.
    pub async fn handle_add_task(&self, column: String) -> McpResult<String> {
        let column = validation::parse_column(&column)?;

        self.dispatch_board_event(
            &format!("add task to {}", column),
            UiEvent::AddTaskClick { column },
        )
    }

    /// "Delete" clicked on a card.
    pub async fn handle_delete_task(&self, column: String, id: String) -> McpResult<String> {
        let column = validation::parse_column(&column)?;
        let task_id = validation::normalize_task_id(&id);

        self.dispatch_board_event(
            &format!("delete task {} from {}", task_id, column),
            UiEvent::DeleteClick { column, task_id },
        )
    }
}
