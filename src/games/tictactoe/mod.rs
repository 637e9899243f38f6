//! Tic-tac-toe with move history and time travel.
//!
//! - [`rules`]: pure board evaluation (winner, winning line, draw, move diff)
//! - [`GameSession`]: history, cursor and the two mutators
//! - [`contracts`] and [`invariants`]: what every accepted action guarantees

mod action;
pub mod contracts;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod types;

pub use action::{Action, IllegalMove};
pub use history::{
    HistoryEntry, MoveListRow, SortOrder, describe_current, describe_move, ordered_indices,
};
pub use position::{MoveLocation, Position};
pub use session::GameSession;
pub use types::{Board, BoardParseError, GameStatus, Player, Square};
