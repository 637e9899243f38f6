//! Application state and logic.

use super::input::{Command, move_cursor};
use crossterm::event::KeyCode;
use time_travel_tictactoe::{
    Action, GameSession, MoveListRow, Position, SortOrder, TuiConfig, ordered_indices,
};
use tracing::{debug, info};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The 3x3 board.
    Board,
    /// The move list.
    History,
}

/// Main application state.
///
/// Owns the single game session. Every frame is drawn from the session's
/// accessors, so an accepted action shows up on the next draw and a rejected
/// one changes nothing but the message line.
pub struct App {
    session: GameSession,
    cursor: Position,
    focus: Focus,
    sort_order: SortOrder,
    /// Row of the move list under the selection, in display order.
    selected_row: usize,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            session: GameSession::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            sort_order: *config.sort_order(),
            selected_row: 0,
            message: None,
            should_quit: false,
        }
    }

    /// The game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Current move-list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Selected move-list row.
    pub fn selected_row(&self) -> usize {
        self.selected_row
    }

    /// Last rejection message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Move-list rows in the current order.
    pub fn move_list(&self) -> Vec<MoveListRow> {
        self.session.move_list(self.sort_order)
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(command) = super::input::command_for(key) else {
            return;
        };
        debug!(?command, focus = ?self.focus, "Handling command");

        match command {
            Command::Quit => self.should_quit = true,
            Command::Restart => {
                self.session.restart();
                self.message = None;
                self.sync_selection();
            }
            Command::ToggleSort => {
                self.sort_order = self.sort_order.toggle();
                info!(sort_order = %self.sort_order, "Move list order changed");
                self.sync_selection();
            }
            Command::SwitchFocus => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
                self.sync_selection();
            }
            Command::PlayCell(pos) => {
                self.cursor = pos;
                self.apply(Action::Play(pos));
            }
            Command::Select => match self.focus {
                Focus::Board => self.apply(Action::Play(self.cursor)),
                Focus::History => {
                    if let Some(index) = self.selected_index() {
                        self.apply(Action::JumpTo(index));
                    }
                }
            },
            Command::Navigate(key) => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, key),
                Focus::History => self.move_selection(key),
            },
        }
    }

    /// Applies an action to the session, recording why it was rejected.
    fn apply(&mut self, action: Action) {
        match self.session.apply(action) {
            Ok(()) => {
                debug!(%action, "Action accepted");
                self.message = None;
                self.sync_selection();
            }
            Err(e) => {
                debug!(%action, error = %e, "Action rejected");
                self.message = Some(e.to_string());
            }
        }
    }

    /// History index under the move-list selection.
    fn selected_index(&self) -> Option<usize> {
        ordered_indices(self.session.history().len(), self.sort_order)
            .get(self.selected_row)
            .copied()
    }

    /// Puts the selection on the row of the displayed entry.
    fn sync_selection(&mut self) {
        let current = self.session.current_index();
        self.selected_row = ordered_indices(self.session.history().len(), self.sort_order)
            .iter()
            .position(|&index| index == current)
            .unwrap_or(0);
    }

    fn move_selection(&mut self, key: KeyCode) {
        let last = self.session.history().len() - 1;
        self.selected_row = match key {
            KeyCode::Up => self.selected_row.saturating_sub(1),
            KeyCode::Down => (self.selected_row + 1).min(last),
            _ => self.selected_row,
        };
    }
}
