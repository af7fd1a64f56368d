use crate::board::card::{ColumnKey, Task};

/// The task currently being dragged
///
/// Only the id is recorded. Its column and index are looked up on the live
/// board at every move, so deletes and adds during a drag cannot leave the
/// session pointing at the wrong card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub task_id: String,
}

/// The single task being edited inline and its uncommitted text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub task_id: String,
    pub draft: String,
}

/// Snapshot of the whole board view state
///
/// Reducers in `reducer` take a snapshot by reference and return a new one,
/// so a `BoardState` value never changes once built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardState {
    /// Task sequences indexed by `ColumnKey::index`
    pub(crate) columns: [Vec<Task>; 3],

    /// Active drag gesture, if any
    pub(crate) drag: Option<DragSession>,

    /// Active inline edit, if any
    pub(crate) edit: Option<EditSession>,

    /// Last id handed out by "add task"
    ///
    /// Ids derive from the clock, and this keeps them strictly increasing
    /// when two tasks are added within the same millisecond.
    pub(crate) last_issued_id: u64,
}

impl BoardState {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from explicit column contents with no active sessions
    pub fn from_columns(todo: Vec<Task>, in_progress: Vec<Task>, done: Vec<Task>) -> Self {
        Self {
            columns: [todo, in_progress, done],
            ..Self::default()
        }
    }

    /// The fixed sample board mounted with the kanban page
    pub fn sample() -> Self {
        Self::from_columns(
            vec![Task::new("1", "Task 1"), Task::new("2", "Task 2")],
            vec![Task::new("3", "Task 3"), Task::new("4", "Task 4")],
            vec![Task::new("5", "Task 5"), Task::new("6", "Task 6")],
        )
    }

    /// Tasks of one column in display order
    pub fn column(&self, key: ColumnKey) -> &[Task] {
        &self.columns[key.index()]
    }

    pub(crate) fn column_mut(&mut self, key: ColumnKey) -> &mut Vec<Task> {
        &mut self.columns[key.index()]
    }

    /// Ids of one column in display order
    pub fn column_ids(&self, key: ColumnKey) -> Vec<&str> {
        self.column(key).iter().map(|t| t.id.as_str()).collect()
    }

    /// Locate a task anywhere on the board
    ///
    /// # Returns
    /// The column holding the task and its index within that column
    pub fn locate(&self, task_id: &str) -> Option<(ColumnKey, usize)> {
        ColumnKey::ALL.into_iter().find_map(|key| {
            self.column(key)
                .iter()
                .position(|t| t.id == task_id)
                .map(|index| (key, index))
        })
    }

    /// Find a task anywhere on the board
    pub fn find_task(&self, task_id: &str) -> Option<&Task> {
        self.locate(task_id).map(|(key, index)| &self.column(key)[index])
    }

    /// Check whether any column holds a task with this id
    pub fn contains_id(&self, task_id: &str) -> bool {
        self.locate(task_id).is_some()
    }

    /// Total number of tasks across all columns
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    /// Active drag session, if any
    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Active edit session, if any
    pub fn edit(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    /// Same board contents with both sessions cleared
    pub fn without_sessions(&self) -> Self {
        Self {
            drag: None,
            edit: None,
            ..self.clone()
        }
    }
}
