use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Column key on the board
///
/// The set of columns is closed and fixed for the whole session.
/// Uses camelCase naming to match the seed file and tool parameter format.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    /// Work not started yet
    todo,
    /// Work currently underway
    inProgress,
    /// Finished work
    done,
}

impl ColumnKey {
    /// All columns in display order
    pub const ALL: [ColumnKey; 3] = [ColumnKey::todo, ColumnKey::inProgress, ColumnKey::done];

    /// Position of this column in the board's column array
    pub fn index(self) -> usize {
        match self {
            ColumnKey::todo => 0,
            ColumnKey::inProgress => 1,
            ColumnKey::done => 2,
        }
    }

    /// Key as it appears in seed files and tool parameters
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnKey::todo => "todo",
            ColumnKey::inProgress => "inProgress",
            ColumnKey::done => "done",
        }
    }

    /// Column heading shown on the board
    ///
    /// Splits the camelCase key before every uppercase letter, so
    /// `inProgress` is shown as `in Progress`.
    pub fn heading(self) -> String {
        let key = self.as_str();
        let mut heading = String::with_capacity(key.len() + 2);
        for ch in key.chars() {
            if ch.is_ascii_uppercase() {
                heading.push(' ');
            }
            heading.push(ch);
        }
        heading
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(ColumnKey::todo),
            "inProgress" => Ok(ColumnKey::inProgress),
            "done" => Ok(ColumnKey::done),
            _ => Err(format!(
                "Invalid column '{}'. Valid options are: todo, inProgress, done",
                s
            )),
        }
    }
}

/// A task card on the board
///
/// The id is unique across the whole board and never changes after the
/// card is created. Only the content is editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier (e.g., "1", "1760601234567")
    pub id: String,
    /// Free text shown on the card
    pub content: String,
}

impl Task {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}
