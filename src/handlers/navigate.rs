//! Navigation handlers for the kanban MCP server

use crate::KanbanServerHandler;
use crate::validation;
use mcp_attr::Result as McpResult;

impl KanbanServerHandler {
    /// Switches the active page. Entering /kanban mounts a fresh board from the seed
    /// unless it is already open; leaving it discards the board.
    pub async fn handle_navigate(&self, path: String) -> McpResult<String> {
        let route = validation::parse_route(&path)?;

        let mut app = self.lock_app();
        app.navigate(route);
        Ok(app.render())
    }

    /// Renders the active page without dispatching any event.
    pub async fn handle_show(&self) -> McpResult<String> {
        let app = self.lock_app();
        Ok(app.render())
    }
}
