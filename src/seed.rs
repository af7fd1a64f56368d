use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::board::{BoardState, ColumnKey, Task};

/// On-disk layout of a seed file: one array of tasks per column
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SeedDocument {
    todo: Vec<Task>,
    #[serde(rename = "inProgress")]
    in_progress: Vec<Task>,
    done: Vec<Task>,
}

/// Source of the board mounted with the kanban page
///
/// Without a file the fixed sample board is used. Seed files are only read,
/// never written back.
pub struct SeedFile {
    file_path: Option<PathBuf>,
}

impl SeedFile {
    /// Seed source that always yields the sample board
    pub fn sample() -> Self {
        Self { file_path: None }
    }

    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: Some(file_path.as_ref().to_path_buf()),
        }
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn load(&self) -> Result<BoardState> {
        let Some(path) = &self.file_path else {
            return Ok(BoardState::sample());
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        let board = parse_seed(&content)
            .with_context(|| format!("Invalid seed file {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            tasks = board.task_count(),
            "loaded board seed"
        );
        Ok(board)
    }
}

/// Parse TOML seed content into a board with no active sessions
///
/// Every task id must be non-empty and unique across all columns.
pub fn parse_seed(content: &str) -> Result<BoardState> {
    let doc: SeedDocument = toml::from_str(content)?;
    let board = BoardState::from_columns(doc.todo, doc.in_progress, doc.done);

    let mut seen = HashSet::new();
    for column in ColumnKey::ALL {
        for task in board.column(column) {
            if task.id.trim().is_empty() {
                bail!("Task in column {} has an empty id", column);
            }
            if !seen.insert(task.id.as_str()) {
                bail!("Duplicate task id '{}' in column {}", task.id, column);
            }
        }
    }

    Ok(board)
}
