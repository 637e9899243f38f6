//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state
//! according to tic-tac-toe rules. Rules are separated from session
//! storage so the session and its contracts can compose them.

pub mod draw;
pub mod location;
pub mod win;

pub use draw::{is_draw, is_full};
pub use location::determine_move_location;
pub use win::{LINES, determine_winner, winning_line};
