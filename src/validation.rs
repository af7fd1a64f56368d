//! Parameter validation for the MCP tools
//!
//! Tool parameters arrive as strings. Anything that does not name a column
//! or route is rejected here with an invalid-params error, before it reaches
//! the board.

use crate::board::ColumnKey;
use crate::router::Route;
use mcp_attr::Result as McpResult;

fn invalid_params(message: String) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}

/// Parse a column parameter (`todo`, `inProgress` or `done`)
pub fn parse_column(column: &str) -> McpResult<ColumnKey> {
    column.trim().parse::<ColumnKey>().map_err(invalid_params)
}

/// Parse a navigation path (`/`, `/dashboard`, `/calendar` or `/kanban`)
pub fn parse_route(path: &str) -> McpResult<Route> {
    path.trim().parse::<Route>().map_err(invalid_params)
}

/// Normalize a task ID by trimming surrounding whitespace
///
/// # Examples
/// ```
/// # use kanban_mcp::validation::normalize_task_id;
/// assert_eq!(normalize_task_id(" 1760601234567 "), "1760601234567");
/// ```
pub fn normalize_task_id(task_id: &str) -> String {
    task_id.trim().to_string()
}
