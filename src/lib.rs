//! Time-travel tic-tac-toe.
//!
//! Two players share one keyboard and alternate marks on a 3x3 grid. Every
//! reached board is kept in a history, and either player can jump back to
//! any earlier board. Playing from an earlier board discards the boards
//! that followed it.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over a board (winner, winning line, draw,
//!   move-location diff)
//! - **Session**: the history, the cursor into it, and the two mutators
//!   `play_move` and `jump_to`
//! - **Config**: UI preferences and logging, loaded from TOML
//!
//! # Example
//!
//! ```
//! use time_travel_tictactoe::{GameSession, GameStatus, Player, Position};
//!
//! let mut session = GameSession::new();
//! session.play_move(Position::Center)?;
//! assert_eq!(session.status(), GameStatus::InProgress(Player::O));
//!
//! session.jump_to(0)?;
//! assert_eq!(session.history().len(), 2);
//! # Ok::<(), time_travel_tictactoe::IllegalMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, TuiConfig};

// Crate-level exports - Rules
pub use games::tictactoe::rules;

// Crate-level exports - Contracts and invariants
pub use games::tictactoe::{contracts, invariants};

// Crate-level exports - Game types
pub use games::tictactoe::{
    Action, Board, BoardParseError, GameSession, GameStatus, HistoryEntry, IllegalMove,
    MoveListRow, MoveLocation, Player, Position, SortOrder, Square, describe_current,
    describe_move, ordered_indices,
};
