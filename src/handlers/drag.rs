//! Drag-and-drop handlers for the kanban MCP server

use crate::KanbanServerHandler;
use crate::validation;
use crate::view::UiEvent;
use mcp_attr::Result as McpResult;

impl KanbanServerHandler {
    /// Pointer pressed on a card: remembers which card is being dragged.
    pub async fn handle_drag_start(&self, column: String, index: u32) -> McpResult<String> {
        let column = validation::parse_column(&column)?;
        let index = index as usize;

        self.dispatch_board_event(
            &format!("drag start at {}[{}]", column, index),
            UiEvent::DragStart { column, index },
        )
    }

    /// Pointer moved over a card slot: moves the dragged card there, within
    /// its column or into another one.
    pub async fn handle_drag_over(&self, column: String, index: u32) -> McpResult<String> {
        let column = validation::parse_column(&column)?;
        let index = index as usize;

        self.dispatch_board_event(
            &format!("drag over {}[{}]", column, index),
            UiEvent::DragOver { column, index },
        )
    }

    /// Pointer released: ends the drag, leaving the card where it is.
    pub async fn handle_drop(&self) -> McpResult<String> {
        self.dispatch_board_event("drop", UiEvent::Drop)
    }
}
