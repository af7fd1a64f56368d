//! Common test utilities for integration tests
#![allow(dead_code)]

use kanban_mcp::{App, BoardState, ColumnKey, KanbanServerHandler, Route, Task};

/// Build a board whose task contents are "Task <id>"
pub fn board_with(todo: &[&str], in_progress: &[&str], done: &[&str]) -> BoardState {
    let tasks = |ids: &[&str]| {
        ids.iter()
            .map(|id| Task::new(*id, format!("Task {}", id)))
            .collect::<Vec<_>>()
    };
    BoardState::from_columns(tasks(todo), tasks(in_progress), tasks(done))
}

/// Every id on the board, sorted
pub fn all_ids(board: &BoardState) -> Vec<String> {
    let mut ids: Vec<String> = ColumnKey::ALL
        .iter()
        .flat_map(|c| board.column(*c).iter().map(|t| t.id.clone()))
        .collect();
    ids.sort();
    ids
}

/// Sorted ids of one column
pub fn sorted_column_ids(board: &BoardState, column: ColumnKey) -> Vec<String> {
    let mut ids: Vec<String> = board
        .column_ids(column)
        .into_iter()
        .map(str::to_string)
        .collect();
    ids.sort();
    ids
}

pub fn fixed_clock() -> u64 {
    1_760_000_000_000
}

/// Handler on the kanban page with the sample board and a fixed clock
pub fn get_test_handler() -> KanbanServerHandler {
    KanbanServerHandler::with_app(App::with_clock(
        BoardState::sample(),
        Route::Kanban,
        fixed_clock,
    ))
}
