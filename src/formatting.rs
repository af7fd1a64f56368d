//! Text rendering for pages, the sidebar and the board
//!
//! Everything the server shows to a client goes through these functions.

use crate::board::{BoardState, ColumnKey, Outcome};
use crate::router::Route;

/// Render the sidebar navigation with the active route marked
pub fn render_sidebar(active: Route) -> String {
    let mut result = String::from("Navigation:\n");
    for route in Route::ALL {
        let marker = if route == active { ">" } else { " " };
        result.push_str(&format!("{} {} ({})\n", marker, route.title(), route.path()));
    }
    result
}

/// Render the kanban board
///
/// Each card line shows its index within the column, since drag tools
/// address cards by column and index. The dragged card is marked and the
/// card being edited shows its draft instead of its content.
pub fn render_board(board: &BoardState) -> String {
    let mut result = format!("# {}\n", Route::Kanban.title());

    for column in ColumnKey::ALL {
        let tasks = board.column(column);
        result.push_str(&format!(
            "\n## {} [{}] ({} task(s))\n",
            column.heading(),
            column,
            tasks.len()
        ));

        if tasks.is_empty() {
            result.push_str("  (empty)\n");
            continue;
        }

        for (index, task) in tasks.iter().enumerate() {
            let editing = board.edit().filter(|e| e.task_id == task.id);
            let dragging = board.drag().is_some_and(|d| d.task_id == task.id);

            let line = match editing {
                Some(edit) => format!("  {}. [{}] editing: {}", index, task.id, edit.draft),
                None if dragging => {
                    format!("  {}. [{}] {} (dragging)", index, task.id, task.content)
                }
                None => format!("  {}. [{}] {}", index, task.id, task.content),
            };
            result.push_str(&line);
            result.push('\n');
        }
    }

    result
}

/// Render a page body
///
/// `board` is the mounted board when the route is the kanban page.
pub fn render_page(route: Route, board: Option<&BoardState>) -> String {
    let body = match (route, board) {
        (Route::Kanban, Some(board)) => render_board(board),
        _ => format!("# {}\n", route.title()),
    };
    format!("{}\n{}", render_sidebar(route), body)
}

/// One-line summary of an operation outcome
pub fn format_outcome(action: &str, outcome: &Outcome) -> String {
    match outcome.reason() {
        None => format!("Applied: {}", action),
        Some(reason) => format!("Ignored: {} ({})", action, reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::reducer;

    #[test]
    fn test_render_sidebar_marks_active_route() {
        let sidebar = render_sidebar(Route::Calendar);
        assert!(sidebar.contains("> Calendar (/calendar)"));
        assert!(sidebar.contains("  Task Board (/kanban)"));
    }

    #[test]
    fn test_render_board_lists_columns_in_order() {
        let rendered = render_board(&BoardState::sample());
        let todo = rendered.find("## todo").unwrap();
        let in_progress = rendered.find("## in Progress [inProgress]").unwrap();
        let done = rendered.find("## done").unwrap();
        assert!(todo < in_progress && in_progress < done);
        assert!(rendered.contains("  1. [4] Task 4\n"));
    }

    #[test]
    fn test_render_board_marks_drag_and_edit() {
        let board = BoardState::sample();
        let board = reducer::begin_drag(&board, ColumnKey::todo, 0).state;
        let board = reducer::begin_edit(&board, "6".to_string(), "Task 6".to_string()).state;
        let board = reducer::update_draft(&board, "Half typed".to_string()).state;

        let rendered = render_board(&board);
        assert!(rendered.contains("  0. [1] Task 1 (dragging)\n"));
        assert!(rendered.contains("  1. [6] editing: Half typed\n"));
    }

    #[test]
    fn test_render_empty_column() {
        let board = BoardState::new();
        assert!(render_board(&board).contains("(empty)"));
    }

    #[test]
    fn test_render_page_without_board() {
        let page = render_page(Route::Dashboard, None);
        assert!(page.contains("# Dashboard"));
        assert!(page.contains("> Dashboard (/dashboard)"));
    }

    #[test]
    fn test_format_outcome_names_ignore_reason() {
        let board = BoardState::sample();
        let ignored = reducer::drop_drag(&board).outcome;
        assert_eq!(
            format_outcome("drop", &ignored),
            "Ignored: drop (no drag in progress)"
        );
        let applied = reducer::add_task(&board, ColumnKey::done, 7).outcome;
        assert_eq!(format_outcome("add task to done", &applied), "Applied: add task to done");
    }
}
