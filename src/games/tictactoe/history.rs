//! History entries, move descriptions and the move-list view.

use super::{Board, MoveLocation};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// One reached game state: a board and where the move that produced it landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new, Getters)]
pub struct HistoryEntry {
    /// Board after the move.
    board: Board,
    /// Location of the move, `None` for the starting board.
    location: Option<MoveLocation>,
}

impl HistoryEntry {
    /// The entry every history starts with: an empty board, no move.
    pub fn initial() -> Self {
        Self::new(Board::new(), None)
    }
}

/// Label for the button that jumps to history entry `index`.
pub fn describe_move(index: usize, entry: &HistoryEntry) -> String {
    match (index, entry.location) {
        (0, _) => "Go to game start".to_string(),
        (_, Some(location)) => format!("Go to move #{} {}", index, location),
        (_, None) => format!("Go to move #{}", index),
    }
}

/// Label for the history entry currently displayed.
pub fn describe_current(index: usize) -> String {
    format!("You are at move #{}", index)
}

/// Display order of the move list.
///
/// Purely a view setting; history itself is never reordered.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    /// Oldest entry first.
    #[default]
    Ascending,
    /// Newest entry first.
    Descending,
}

impl SortOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// History indices `0..len` in display order.
pub fn ordered_indices(len: usize, order: SortOrder) -> Vec<usize> {
    match order {
        SortOrder::Ascending => (0..len).collect(),
        SortOrder::Descending => (0..len).rev().collect(),
    }
}

/// One row of the rendered move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveListRow {
    /// History index the row refers to.
    pub index: usize,
    /// Text shown for the row.
    pub label: String,
    /// Whether this is the entry currently displayed.
    pub is_current: bool,
}
