//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line, if any.
///
/// Lines are scanned in [`LINES`] order, so the result is deterministic even
/// for boards with more than one complete line.
#[instrument]
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    LINES.into_iter().find(|&[a, b, c]| {
        let sq = board.get(a);
        !sq.is_empty() && sq == board.get(b) && sq == board.get(c)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn determine_winner(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|[a, _, _]| board.get(a).player())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(determine_winner(&Board::new()), None);
        assert_eq!(winning_line(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX/.../...".parse().unwrap();
        assert_eq!(determine_winner(&board), Some(Player::X));
        assert_eq!(
            winning_line(&board),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "X.O/XO./O..".parse().unwrap();
        assert_eq!(determine_winner(&board), Some(Player::O));
        assert_eq!(
            winning_line(&board),
            Some([Position::TopRight, Position::Center, Position::BottomLeft])
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX./.O./...".parse().unwrap();
        assert_eq!(determine_winner(&board), None);
    }

    #[test]
    fn test_first_line_wins_tie_break() {
        // Not reachable in play, but the scan order must be stable.
        let board: Board = "OOO/XXX/...".parse().unwrap();
        assert_eq!(determine_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_line_highlights_only_three_cells() {
        // X wins the left column; the stray X on the right is not part of it.
        let board: Board = "XOX/XO./X..".parse().unwrap();
        let line = winning_line(&board).unwrap();
        assert_eq!(
            line,
            [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]
        );
        assert!(!line.contains(&Position::TopRight));
    }
}
