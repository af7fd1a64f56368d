//! Kanban MCP Server Library
//!
//! This library hosts a small four-page application whose kanban page keeps a
//! drag-and-drop task board in memory. The application is driven through a
//! Model Context Protocol (MCP) server: every tool call is one UI event.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `KanbanServerHandler` - Handles MCP protocol communication
//! - **View Layer**: `shell`, `view` and `router` - Pages, routing and UI events
//! - **Domain Layer**: `board` module - Board snapshot and pure board operations
//!
//! Nothing is persisted. The board is seeded when the kanban page is mounted
//! and discarded when it is left.
//!
//! # Example
//!
//! ```no_run
//! use kanban_mcp::KanbanServerHandler;
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = KanbanServerHandler::new(None, "/kanban")?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod board;
pub mod formatting;
mod handlers;
pub mod router;
pub mod seed;
pub mod shell;
pub mod validation;
pub mod view;

use anyhow::{Result, anyhow};
use mcp_attr::server::{McpServer, mcp_server};
use mcp_attr::{Result as McpResult, bail_public};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

// Re-export commonly used types
pub use board::{BoardState, ColumnKey, IgnoredReason, Outcome, Task};
pub use router::Route;
pub use seed::SeedFile;
pub use shell::App;
pub use view::{BoardView, UiEvent};

/// MCP Server handler for the kanban application
///
/// Owns the whole application state. Each tool call takes the lock,
/// dispatches exactly one event, renders the active page and releases it.
pub struct KanbanServerHandler {
    pub(crate) app: Mutex<App>,
}

impl KanbanServerHandler {
    /// Create a new kanban server handler
    ///
    /// # Arguments
    /// * `seed_path` - Optional TOML seed file; the sample board is used when `None`
    /// * `initial_path` - Route active at startup (e.g., "/" or "/kanban")
    ///
    /// # Example
    /// ```no_run
    /// # use kanban_mcp::KanbanServerHandler;
    /// # use anyhow::Result;
    /// # use std::path::Path;
    /// # fn main() -> Result<()> {
    /// let handler = KanbanServerHandler::new(Some(Path::new("board.toml")), "/kanban")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(seed_path: Option<&Path>, initial_path: &str) -> Result<Self> {
        let route: Route = initial_path.parse().map_err(|e: String| anyhow!(e))?;
        let seed = match seed_path {
            Some(path) => SeedFile::new(path),
            None => SeedFile::sample(),
        };
        Ok(Self::with_app(App::new(seed.load()?, route)))
    }

    /// Create a handler around an already built application
    pub fn with_app(app: App) -> Self {
        Self {
            app: Mutex::new(app),
        }
    }

    /// Lock the application state
    ///
    /// The board snapshot is only ever replaced whole, so a lock poisoned by a
    /// panicking handler still guards a consistent state.
    pub(crate) fn lock_app(&self) -> MutexGuard<'_, App> {
        self.app.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Dispatch one event to the mounted board and render the result
    ///
    /// Fails when the kanban page is not the active page. Ignored board
    /// operations are not failures; the response reports the reason.
    pub(crate) fn dispatch_board_event(&self, action: &str, event: UiEvent) -> McpResult<String> {
        let mut app = self.lock_app();

        let Some(view) = app.board_view_mut() else {
            bail_public!(
                _,
                "The kanban board is not open. Navigate to {} first.",
                Route::Kanban.path()
            );
        };
        let outcome = view.dispatch(event);

        Ok(format!(
            "{}\n\n{}",
            formatting::format_outcome(action, &outcome),
            app.render()
        ))
    }
}

/// Kanban board application with four pages: sign-in (/), dashboard, calendar and the task board (/kanban).
///
/// The task board has three fixed columns: todo, inProgress, done. Cards are moved with a drag gesture:
/// drag_start on a card, drag_over each slot the pointer passes (the card moves immediately), then drop_task.
/// Cards are addressed by column and index for dragging and by column and id for delete/edit.
/// Editing: edit_task opens the editor, type_draft changes the text, save_edit writes it back.
///
/// Every tool returns the rendered page. Board tools report "Applied" or "Ignored (reason)";
/// an ignored operation leaves the board as it was.
/// Nothing is saved: leaving /kanban discards the board and returning starts from the seed again.
#[mcp_server]
impl McpServer for KanbanServerHandler {
    /// **Navigate**: Switch page. Paths: "/", "/dashboard", "/calendar", "/kanban".
    /// **Note**: Board tools only work while "/kanban" is open.
    #[tool]
    async fn navigate(
        &self,
        /// Page path: "/", "/dashboard", "/calendar" or "/kanban"
        path: String,
    ) -> McpResult<String> {
        self.handle_navigate(path).await
    }

    /// **Show**: Render the current page without changing anything.
    #[tool]
    async fn show(&self) -> McpResult<String> {
        self.handle_show().await
    }

    /// **Drag start**: Begin dragging the card at column[index].
    #[tool]
    async fn drag_start(
        &self,
        /// Column: todo/inProgress/done
        column: String,
        /// Zero-based card index within the column
        index: u32,
    ) -> McpResult<String> {
        self.handle_drag_start(column, index).await
    }

    /// **Drag over**: Move the dragged card to column[index] (same column = reorder, other column = transfer).
    #[tool]
    async fn drag_over(
        &self,
        /// Column: todo/inProgress/done
        column: String,
        /// Zero-based target index within the column
        index: u32,
    ) -> McpResult<String> {
        self.handle_drag_over(column, index).await
    }

    /// **Drop**: End the drag gesture. The card stays where the last drag_over put it.
    #[tool]
    async fn drop_task(&self) -> McpResult<String> {
        self.handle_drop().await
    }

    /// **Add task**: Append a "New Task <id>" card to the column.
    #[tool]
    async fn add_task(
        &self,
        /// Column: todo/inProgress/done
        column: String,
    ) -> McpResult<String> {
        self.handle_add_task(column).await
    }

    /// **Delete task**: Remove a card from the column.
    #[tool]
    async fn delete_task(
        &self,
        /// Column: todo/inProgress/done
        column: String,
        /// Card ID
        id: String,
    ) -> McpResult<String> {
        self.handle_delete_task(column, id).await
    }

    /// **Edit task**: Open the inline editor on a card (double-click). An unsaved edit on another card is discarded.
    #[tool]
    async fn edit_task(
        &self,
        /// Column: todo/inProgress/done
        column: String,
        /// Card ID
        id: String,
    ) -> McpResult<String> {
        self.handle_edit_task(column, id).await
    }

    /// **Type draft**: Replace the text in the open editor.
    #[tool]
    async fn type_draft(
        &self,
        /// Full new card text
        content: String,
    ) -> McpResult<String> {
        self.handle_type_draft(content).await
    }

    /// **Save edit**: Close the editor (blur) and write the draft into the card in the column.
    #[tool]
    async fn save_edit(
        &self,
        /// Column holding the edited card: todo/inProgress/done
        column: String,
    ) -> McpResult<String> {
        self.handle_save_edit(column).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn fixed_clock() -> u64 {
        1_000
    }

    fn get_test_handler() -> KanbanServerHandler {
        KanbanServerHandler::with_app(App::with_clock(
            BoardState::sample(),
            Route::Kanban,
            fixed_clock,
        ))
    }

    fn current_board(handler: &KanbanServerHandler) -> BoardState {
        let app = handler.lock_app();
        app.board_view().unwrap().state().clone()
    }

    #[test]
    fn test_new_with_seed_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"todo = [{{ id = "a", content = "Seeded" }}]"#).unwrap();

        let handler = KanbanServerHandler::new(Some(file.path()), "/kanban").unwrap();
        let board = current_board(&handler);
        assert_eq!(board.column_ids(ColumnKey::todo), vec!["a"]);
        assert_eq!(board.task_count(), 1);
    }

    #[test]
    fn test_new_rejects_unknown_route() {
        assert!(KanbanServerHandler::new(None, "/settings").is_err());
    }

    #[test]
    fn test_new_rejects_missing_seed_file() {
        assert!(KanbanServerHandler::new(Some(Path::new("/nonexistent/board.toml")), "/").is_err());
    }

    #[tokio::test]
    async fn test_drag_across_columns() {
        let handler = get_test_handler();

        let result = handler.handle_drag_start("todo".to_string(), 0).await.unwrap();
        assert!(result.starts_with("Applied: drag start at todo[0]"));

        let result = handler.handle_drag_over("inProgress".to_string(), 0).await.unwrap();
        assert!(result.contains("[1] Task 1 (dragging)"));

        handler.handle_drop().await.unwrap();
        let board = current_board(&handler);
        assert_eq!(board.column_ids(ColumnKey::todo), vec!["2"]);
        assert_eq!(board.column_ids(ColumnKey::inProgress), vec!["1", "3", "4"]);
        assert!(board.drag().is_none());
    }

    #[tokio::test]
    async fn test_navigate_and_show_render_active_page() {
        let handler = get_test_handler();

        let page = handler.handle_show().await.unwrap();
        assert!(page.contains("> Task Board (/kanban)"));
        assert!(page.contains("  0. [1] Task 1"));

        let page = handler.handle_navigate("/dashboard".to_string()).await.unwrap();
        assert!(page.contains("> Dashboard (/dashboard)"));
        assert!(page.contains("# Dashboard"));
        assert!(handler.lock_app().board_view().is_none());

        let page = handler.handle_show().await.unwrap();
        assert!(page.contains("# Dashboard"));
        assert!(handler.handle_navigate("dashboard".to_string()).await.is_err());
    }

    #[tokio::test]
    async fn test_ignored_operation_is_not_an_error() {
        let handler = get_test_handler();

        let result = handler.handle_drag_over("done".to_string(), 0).await.unwrap();
        assert!(result.starts_with("Ignored: drag over done[0] (no drag in progress)"));
    }

    #[tokio::test]
    async fn test_invalid_column_is_an_error() {
        let handler = get_test_handler();

        assert!(handler.handle_add_task("backlog".to_string()).await.is_err());
        assert_eq!(current_board(&handler), BoardState::sample());
    }

    #[tokio::test]
    async fn test_board_tools_require_kanban_page() {
        let handler = get_test_handler();

        let page = handler.handle_navigate("/calendar".to_string()).await.unwrap();
        assert!(page.contains("# Calendar"));
        assert!(handler.handle_add_task("todo".to_string()).await.is_err());
        assert!(handler.handle_drop().await.is_err());

        handler.handle_navigate("/kanban".to_string()).await.unwrap();
        assert!(handler.handle_add_task("todo".to_string()).await.is_ok());
    }

    #[tokio::test]
    async fn test_edit_round_trip() {
        let handler = get_test_handler();

        handler
            .handle_edit_task("done".to_string(), " 6 ".to_string())
            .await
            .unwrap();
        let result = handler.handle_type_draft("Ship it".to_string()).await.unwrap();
        assert!(result.contains("[6] editing: Ship it"));

        let result = handler.handle_save_edit("done".to_string()).await.unwrap();
        assert!(result.contains("[6] Ship it"));
        assert!(current_board(&handler).edit().is_none());
    }

    #[tokio::test]
    async fn test_add_and_delete() {
        let handler = get_test_handler();

        let result = handler.handle_add_task("done".to_string()).await.unwrap();
        assert!(result.contains("[1000] New Task 1000"));

        handler
            .handle_delete_task("done".to_string(), "1000".to_string())
            .await
            .unwrap();
        let result = handler
            .handle_delete_task("done".to_string(), "1000".to_string())
            .await
            .unwrap();
        assert!(result.starts_with("Ignored: delete task 1000 from done"));
        assert_eq!(current_board(&handler).column_ids(ColumnKey::done), vec!["5", "6"]);
    }
}
