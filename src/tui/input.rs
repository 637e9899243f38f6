//! Key handling: cursor movement and key-to-command mapping.

use crossterm::event::KeyCode;
use time_travel_tictactoe::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the app.
    Quit,
    /// Start a new game.
    Restart,
    /// Flip the move-list order.
    ToggleSort,
    /// Switch focus between board and move list.
    SwitchFocus,
    /// Play directly at a cell.
    PlayCell(Position),
    /// Activate the focused item (play at cursor or jump to selection).
    Select,
    /// Arrow key, interpreted by the focused pane.
    Navigate(KeyCode),
}

/// Maps a key to a command, or `None` for keys the app ignores.
pub fn command_for(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('r') => Some(Command::Restart),
        KeyCode::Char('s') => Some(Command::ToggleSort),
        KeyCode::Tab => Some(Command::SwitchFocus),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Select),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            Position::from_index(index).map(Command::PlayCell)
        }
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Command::Navigate(key))
        }
        _ => None,
    }
}

/// Moves the board cursor with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Down), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::BottomCenter, KeyCode::Right), Position::BottomRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
    }

    #[test]
    fn test_digit_keys_play_cells() {
        assert_eq!(
            command_for(KeyCode::Char('1')),
            Some(Command::PlayCell(Position::TopLeft))
        );
        assert_eq!(
            command_for(KeyCode::Char('9')),
            Some(Command::PlayCell(Position::BottomRight))
        );
        assert_eq!(command_for(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(command_for(KeyCode::Esc), Some(Command::Quit));
        assert_eq!(command_for(KeyCode::Tab), Some(Command::SwitchFocus));
        assert_eq!(command_for(KeyCode::Char('s')), Some(Command::ToggleSort));
    }
}
