use crate::board::board_state::BoardState;
use crate::board::card::ColumnKey;
use thiserror::Error;

/// Why a board operation left the state as it was
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IgnoredReason {
    #[error("no drag in progress")]
    NoDragSession,

    #[error("no edit in progress")]
    NoEditSession,

    #[error("index {index} is out of range for column {column} ({len} task(s))")]
    IndexOutOfRange {
        column: ColumnKey,
        index: usize,
        len: usize,
    },

    #[error("task {task_id} not found in column {column}")]
    TaskNotFound { column: ColumnKey, task_id: String },

    /// The dragged task was removed from the board mid-drag
    #[error("dragged task {task_id} is no longer on the board")]
    DraggedTaskMissing { task_id: String },

    #[error("task is already at {column}[{index}]")]
    AlreadyAtTarget { column: ColumnKey, index: usize },
}

/// Result of applying one operation to the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored(IgnoredReason),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }

    /// Reason for an ignored operation, `None` when applied
    pub fn reason(&self) -> Option<&IgnoredReason> {
        match self {
            Outcome::Applied => None,
            Outcome::Ignored(reason) => Some(reason),
        }
    }
}

/// A reducer step: the next snapshot and what happened to get there
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: BoardState,
    pub outcome: Outcome,
}

impl Transition {
    pub(crate) fn applied(state: BoardState) -> Self {
        Self {
            state,
            outcome: Outcome::Applied,
        }
    }

    pub(crate) fn ignored(state: BoardState, reason: IgnoredReason) -> Self {
        Self {
            state,
            outcome: Outcome::Ignored(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_only_for_ignored() {
        assert_eq!(Outcome::Applied.reason(), None);
        let ignored = Outcome::Ignored(IgnoredReason::NoEditSession);
        assert_eq!(ignored.reason(), Some(&IgnoredReason::NoEditSession));
        assert_eq!(ignored.reason().unwrap().to_string(), "no edit in progress");
    }
}
