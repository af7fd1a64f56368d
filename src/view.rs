//! Board view: turns UI events into board operations
//!
//! The view owns the current board snapshot for as long as the kanban page
//! is mounted. Events are handled one at a time, each running to completion
//! before the next, and every event replaces the snapshot with the one the
//! reducer returns.

use crate::board::{Action, BoardState, ColumnKey, IgnoredReason, Outcome, Transition, reduce};

/// Pointer, click and input events the board reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    DragStart { column: ColumnKey, index: usize },
    DragOver { column: ColumnKey, index: usize },
    Drop,
    AddTaskClick { column: ColumnKey },
    DeleteClick { column: ColumnKey, task_id: String },
    DoubleClick { column: ColumnKey, task_id: String },
    Input { content: String },
    Blur { column: ColumnKey },
}

/// Millisecond clock used to derive new task ids
pub type Clock = fn() -> u64;

/// Current wall-clock time in milliseconds since the Unix epoch
pub fn system_clock() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
}

#[derive(Debug)]
pub struct BoardView {
    state: BoardState,
    clock: Clock,
}

impl BoardView {
    /// Mount the view on a seed board using the system clock
    pub fn mount(seed: BoardState) -> Self {
        Self::with_clock(seed, system_clock)
    }

    pub fn with_clock(seed: BoardState, clock: Clock) -> Self {
        Self { state: seed, clock }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Handle one UI event
    pub fn dispatch(&mut self, event: UiEvent) -> Outcome {
        let action = match self.action_for(event) {
            Ok(action) => action,
            Err(reason) => {
                tracing::debug!(%reason, "board event ignored");
                return Outcome::Ignored(reason);
            }
        };

        if let Action::BeginEdit { task_id, .. } = &action
            && let Some(previous) = self.state.edit()
            && previous.task_id != *task_id
        {
            tracing::warn!(
                discarded_task = %previous.task_id,
                discarded_draft = %previous.draft,
                "starting a new edit discards the unsaved one"
            );
        }

        let Transition { state, outcome } = reduce(&self.state, action);
        self.state = state;

        match &outcome {
            Outcome::Applied => {
                tracing::debug!(tasks = self.state.task_count(), "board event applied")
            }
            Outcome::Ignored(reason) => tracing::debug!(%reason, "board event ignored"),
        }
        outcome
    }

    fn action_for(&self, event: UiEvent) -> Result<Action, IgnoredReason> {
        let action = match event {
            UiEvent::DragStart { column, index } => Action::BeginDrag { column, index },
            UiEvent::DragOver { column, index } => Action::DragOver { column, index },
            UiEvent::Drop => Action::Drop,
            UiEvent::AddTaskClick { column } => Action::AddTask {
                column,
                now_millis: (self.clock)(),
            },
            UiEvent::DeleteClick { column, task_id } => Action::DeleteTask { column, task_id },
            UiEvent::DoubleClick { column, task_id } => {
                // The edit starts from the content currently shown on the card
                let content = self
                    .state
                    .column(column)
                    .iter()
                    .find(|t| t.id == task_id)
                    .map(|t| t.content.clone())
                    .ok_or_else(|| IgnoredReason::TaskNotFound {
                        column,
                        task_id: task_id.clone(),
                    })?;
                Action::BeginEdit { task_id, content }
            }
            UiEvent::Input { content } => Action::UpdateDraft { content },
            UiEvent::Blur { column } => Action::CommitEdit { column },
        };
        Ok(action)
    }
}
