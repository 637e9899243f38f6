//! First-class session actions and their rejection reasons.
//!
//! Actions are the only way a session changes. The presentation layer
//! translates input into actions; the session validates and applies them.

use super::Position;
use serde::{Deserialize, Serialize};

/// A request to change the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place the next mark at a position.
    Play(Position),
    /// Move the history cursor to an index.
    JumpTo(usize),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Play(pos) => write!(f, "play {}", pos.label()),
            Action::JumpTo(index) => write!(f, "jump to #{}", index),
        }
    }
}

/// Why an action was rejected.
///
/// All variants are expected outcomes of stale or invalid input. A rejected
/// action never changes the session.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMove {
    /// The current board already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The target square is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),

    /// The history index does not exist.
    #[display("History index {} is out of range (0..{})", index, len)]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

impl std::error::Error for IllegalMove {}
