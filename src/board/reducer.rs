//! Board operations as pure functions over `BoardState` snapshots
//!
//! Every operation takes the current snapshot by reference and returns a
//! `Transition` holding the next snapshot. Operations never fail: invalid
//! indices, missing ids and missing sessions produce `Outcome::Ignored`
//! with the state left as it was.

use crate::board::board_state::{BoardState, DragSession, EditSession};
use crate::board::card::{ColumnKey, Task};
use crate::board::outcome::{IgnoredReason, Transition};

/// One board operation, as dispatched by the board view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    BeginDrag { column: ColumnKey, index: usize },
    DragOver { column: ColumnKey, index: usize },
    Drop,
    /// `now_millis` is the clock reading the new task id derives from
    AddTask { column: ColumnKey, now_millis: u64 },
    DeleteTask { column: ColumnKey, task_id: String },
    BeginEdit { task_id: String, content: String },
    UpdateDraft { content: String },
    CommitEdit { column: ColumnKey },
}

/// Apply one action to a snapshot
pub fn reduce(state: &BoardState, action: Action) -> Transition {
    match action {
        Action::BeginDrag { column, index } => begin_drag(state, column, index),
        Action::DragOver { column, index } => drag_over(state, column, index),
        Action::Drop => drop_drag(state),
        Action::AddTask { column, now_millis } => add_task(state, column, now_millis),
        Action::DeleteTask { column, task_id } => delete_task(state, column, &task_id),
        Action::BeginEdit { task_id, content } => begin_edit(state, task_id, content),
        Action::UpdateDraft { content } => update_draft(state, content),
        Action::CommitEdit { column } => commit_edit(state, column),
    }
}

/// Start dragging the task at `column[index]`
///
/// Replaces any drag already in progress. The board itself is unchanged.
pub fn begin_drag(state: &BoardState, column: ColumnKey, index: usize) -> Transition {
    let tasks = state.column(column);
    let Some(task) = tasks.get(index) else {
        return Transition::ignored(
            state.clone(),
            IgnoredReason::IndexOutOfRange {
                column,
                index,
                len: tasks.len(),
            },
        );
    };

    let mut next = state.clone();
    next.drag = Some(DragSession {
        task_id: task.id.clone(),
    });
    Transition::applied(next)
}

/// Move the dragged task to `column[index]`
///
/// Within one column this is a reorder; across columns the task leaves its
/// current column and is inserted into the target one. The dragged task's
/// position is looked up by id on every call.
pub fn drag_over(state: &BoardState, column: ColumnKey, index: usize) -> Transition {
    let Some(session) = state.drag() else {
        return Transition::ignored(state.clone(), IgnoredReason::NoDragSession);
    };

    let Some((from_column, from_index)) = state.locate(&session.task_id) else {
        // The dragged task was deleted; a session pointing at nothing is invalid
        let mut next = state.clone();
        next.drag = None;
        return Transition::ignored(
            next,
            IgnoredReason::DraggedTaskMissing {
                task_id: session.task_id.clone(),
            },
        );
    };

    if from_column == column && from_index == index {
        return Transition::ignored(
            state.clone(),
            IgnoredReason::AlreadyAtTarget { column, index },
        );
    }

    // Insertion bound once the dragged task has left its column
    let target_len = if from_column == column {
        state.column(column).len() - 1
    } else {
        state.column(column).len()
    };
    if index > target_len {
        return Transition::ignored(
            state.clone(),
            IgnoredReason::IndexOutOfRange {
                column,
                index,
                len: target_len,
            },
        );
    }

    let mut next = state.clone();
    let task = next.column_mut(from_column).remove(from_index);
    next.column_mut(column).insert(index, task);
    Transition::applied(next)
}

/// End the drag gesture
///
/// Clears the drag session; the board is left exactly as the last
/// `drag_over` arranged it.
pub fn drop_drag(state: &BoardState) -> Transition {
    if state.drag.is_none() {
        return Transition::ignored(state.clone(), IgnoredReason::NoDragSession);
    }

    let mut next = state.clone();
    next.drag = None;
    Transition::applied(next)
}

/// Append a new placeholder task to `column`
///
/// The id is the clock reading, raised past the last issued id and past any
/// id already on the board, so two adds in the same millisecond still get
/// distinct ids.
pub fn add_task(state: &BoardState, column: ColumnKey, now_millis: u64) -> Transition {
    let mut id = now_millis.max(state.last_issued_id.saturating_add(1));
    while state.contains_id(&id.to_string()) {
        id = id.saturating_add(1);
    }

    let mut next = state.clone();
    next.last_issued_id = id;
    next.column_mut(column).push(Task::new(id.to_string(), format!("New Task {}", id)));
    Transition::applied(next)
}

/// Remove the task with `task_id` from `column`
pub fn delete_task(state: &BoardState, column: ColumnKey, task_id: &str) -> Transition {
    let Some(index) = state.column(column).iter().position(|t| t.id == task_id) else {
        return Transition::ignored(
            state.clone(),
            IgnoredReason::TaskNotFound {
                column,
                task_id: task_id.to_string(),
            },
        );
    };

    let mut next = state.clone();
    next.column_mut(column).remove(index);
    Transition::applied(next)
}

/// Start editing `task_id` with `content` as the initial draft
///
/// An edit already in progress is replaced and its draft is lost.
pub fn begin_edit(state: &BoardState, task_id: String, content: String) -> Transition {
    let mut next = state.clone();
    next.edit = Some(EditSession {
        task_id,
        draft: content,
    });
    Transition::applied(next)
}

/// Replace the draft text of the active edit
pub fn update_draft(state: &BoardState, content: String) -> Transition {
    if state.edit.is_none() {
        return Transition::ignored(state.clone(), IgnoredReason::NoEditSession);
    }

    let mut next = state.clone();
    if let Some(edit) = next.edit.as_mut() {
        edit.draft = content;
    }
    Transition::applied(next)
}

/// Write the draft into the edited task within `column` and end the edit
///
/// The edit session is cleared even when the task is not in `column`.
pub fn commit_edit(state: &BoardState, column: ColumnKey) -> Transition {
    let Some(edit) = state.edit() else {
        return Transition::ignored(state.clone(), IgnoredReason::NoEditSession);
    };

    let mut next = state.clone();
    next.edit = None;

    match next
        .column_mut(column)
        .iter_mut()
        .find(|t| t.id == edit.task_id)
    {
        Some(task) => {
            task.content = edit.draft.clone();
            Transition::applied(next)
        }
        None => Transition::ignored(
            next,
            IgnoredReason::TaskNotFound {
                column,
                task_id: edit.task_id.clone(),
            },
        ),
    }
}
