//! Inline edit handlers for the kanban MCP server

use crate::KanbanServerHandler;
use crate::validation;
use crate::view::UiEvent;
use mcp_attr::Result as McpResult;

impl KanbanServerHandler {
    /// Double-click on card content: opens the inline editor with the card's
    /// current text. Any other open edit is dropped without saving.
    pub async fn handle_edit_task(&self, column: String, id: String) -> McpResult<String> {
        let column = validation::parse_column(&column)?;
        let task_id = validation::normalize_task_id(&id);

        self.dispatch_board_event(
            &format!("edit task {}", task_id),
            UiEvent::DoubleClick { column, task_id },
        )
    }

    /// Input changed: replaces the editor's draft text.
    pub async fn handle_type_draft(&self, content: String) -> McpResult<String> {
        self.dispatch_board_event("update draft", UiEvent::Input { content })
    }

    /// Editor lost focus: saves the draft into the card in `column`.
    pub async fn handle_save_edit(&self, column: String) -> McpResult<String> {
        let column = validation::parse_column(&column)?;

        self.dispatch_board_event(
            &format!("save edit in {}", column),
            UiEvent::Blur { column },
        )
    }
}
