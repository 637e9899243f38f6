//! Game session: move history, the history cursor and time travel.
//!
//! A session owns an append/truncate-only history of boards and a cursor
//! into it. Whose turn it is follows from the cursor alone: X moves on even
//! indices, O on odd ones. Jumping moves only the cursor; playing from a
//! past entry discards every entry after it before appending.

use super::action::{Action, IllegalMove};
#[cfg(debug_assertions)]
use super::contracts::assert_post;
use super::contracts::{Contract, JumpContract, PlayContract};
use super::history::{
    HistoryEntry, MoveListRow, SortOrder, describe_current, describe_move, ordered_indices,
};
use super::rules;
use super::{Board, GameStatus, Player, Position};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// A single local game with full history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSession {
    pub(super) history: Vec<HistoryEntry>,
    pub(super) current: usize,
}

impl GameSession {
    /// Creates a session holding only the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::initial()],
            current: 0,
        }
    }

    /// Plays `positions` in order from a fresh session.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<Self, IllegalMove> {
        let mut session = Self::new();
        for pos in positions {
            session.play_move(*pos)?;
        }
        Ok(session)
    }

    /// Discards all history and starts over.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(discarded = self.history.len() - 1, "Restarting session");
        *self = Self::new();
    }

    /// Board at the history cursor.
    pub fn current_board(&self) -> &Board {
        self.history[self.current].board()
    }

    /// Full history on the current branch, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Index of the displayed history entry.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Whether the cursor sits on the newest entry.
    pub fn is_at_tip(&self) -> bool {
        self.current + 1 == self.history.len()
    }

    /// Player whose mark the next move places.
    pub fn to_move(&self) -> Player {
        Player::for_index(self.current)
    }

    /// Status of the displayed board.
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if let Some(winner) = rules::determine_winner(board) {
            GameStatus::Won(winner)
        } else if rules::is_draw(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(self.to_move())
        }
    }

    /// The three squares of the winning line on the displayed board.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(self.current_board())
    }

    /// Empty squares on the displayed board.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(self.current_board())
    }

    /// Applies an action, dispatching to [`play_move`](Self::play_move) or
    /// [`jump_to`](Self::jump_to).
    pub fn apply(&mut self, action: Action) -> Result<(), IllegalMove> {
        match action {
            Action::Play(pos) => self.play_move(pos),
            Action::JumpTo(index) => self.jump_to(index),
        }
    }

    /// Places the next mark at `pos`.
    ///
    /// Any entries after the cursor are discarded before the new board is
    /// appended, and the cursor moves to it.
    ///
    /// # Errors
    ///
    /// - [`IllegalMove::GameOver`] if the displayed board has a winner.
    /// - [`IllegalMove::CellOccupied`] if `pos` is taken.
    #[instrument(skip(self), fields(current = self.current, player = %self.to_move()))]
    pub fn play_move(&mut self, pos: Position) -> Result<(), IllegalMove> {
        if let Err(e) = PlayContract::pre(self, &pos) {
            debug!(error = %e, "Move rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let previous = *self.current_board();
        let next = previous.with_mark(pos, self.to_move());
        let location = rules::determine_move_location(&previous, &next);

        let discarded = self.history.len() - (self.current + 1);
        self.history.truncate(self.current + 1);
        self.history.push(HistoryEntry::new(next, location));
        self.current = self.history.len() - 1;

        debug!(
            index = self.current,
            discarded,
            status = %self.status(),
            "Move accepted"
        );

        #[cfg(debug_assertions)]
        assert_post::<PlayContract, Position>(&before, self);

        Ok(())
    }

    /// Moves the history cursor to `index` without touching history.
    ///
    /// # Errors
    ///
    /// [`IllegalMove::IndexOutOfRange`] if `index` is not a history index.
    #[instrument(skip(self), fields(current = self.current, len = self.history.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), IllegalMove> {
        if let Err(e) = JumpContract::pre(self, &index) {
            debug!(error = %e, "Jump rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.current = index;
        debug!(index, "Jumped");

        #[cfg(debug_assertions)]
        assert_post::<JumpContract, usize>(&before, self);

        Ok(())
    }

    /// Jump label for history entry `index`, or `None` if it does not exist.
    pub fn describe_move(&self, index: usize) -> Option<String> {
        self.history
            .get(index)
            .map(|entry| describe_move(index, entry))
    }

    /// Move list rows in display order.
    ///
    /// Built fresh on every call; the order only affects the returned rows.
    pub fn move_list(&self, order: SortOrder) -> Vec<MoveListRow> {
        ordered_indices(self.history.len(), order)
            .into_iter()
            .map(|index| {
                let is_current = index == self.current;
                let label = if is_current {
                    describe_current(index)
                } else {
                    describe_move(index, &self.history[index])
                };
                MoveListRow {
                    index,
                    label,
                    is_current,
                }
            })
            .collect()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{MoveLocation, Square};

    #[test]
    fn test_new_session() {
        let session = GameSession::new();
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.current_index(), 0);
        assert_eq!(*session.current_board(), Board::new());
        assert_eq!(*session.history()[0].location(), None);
        assert_eq!(session.status(), GameStatus::InProgress(Player::X));
    }

    #[test]
    fn test_play_records_location() {
        let mut session = GameSession::new();
        session.play_move(Position::MiddleLeft).unwrap();
        assert_eq!(
            *session.history()[1].location(),
            Some(MoveLocation { row: 1, col: 0 })
        );
        assert_eq!(
            session.current_board().get(Position::MiddleLeft),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_rejected_move_leaves_session_unchanged() {
        let mut session = GameSession::replay(&[Position::Center]).unwrap();
        let before = session.clone();
        assert_eq!(
            session.play_move(Position::Center),
            Err(IllegalMove::CellOccupied(Position::Center))
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_jump_does_not_touch_history() {
        let mut session =
            GameSession::replay(&[Position::Center, Position::TopLeft]).unwrap();
        let history = session.history().to_vec();
        session.jump_to(0).unwrap();
        assert_eq!(session.history(), history.as_slice());
        assert_eq!(session.current_index(), 0);
        assert!(!session.is_at_tip());
        assert_eq!(session.to_move(), Player::X);
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut session = GameSession::new();
        assert_eq!(
            session.jump_to(1),
            Err(IllegalMove::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_move_list_marks_current() {
        let mut session =
            GameSession::replay(&[Position::Center, Position::TopLeft]).unwrap();
        session.jump_to(1).unwrap();
        let rows = session.move_list(SortOrder::Descending);
        let labels: Vec<_> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Go to move #2 (1, 1)",
                "You are at move #1",
                "Go to game start"
            ]
        );
        assert!(rows[1].is_current);
        // the view never reorders the history itself
        assert_eq!(*session.history()[2].location(), Some(MoveLocation { row: 0, col: 0 }));
    }

    #[test]
    fn test_restart() {
        let mut session =
            GameSession::replay(&[Position::Center, Position::TopLeft]).unwrap();
        session.restart();
        assert_eq!(session, GameSession::new());
    }

    #[test]
    fn test_apply_dispatches() {
        let mut session = GameSession::new();
        session.apply(Action::Play(Position::TopRight)).unwrap();
        session.apply(Action::JumpTo(0)).unwrap();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.history().len(), 2);
    }
}
