//! Move-location diffing between consecutive boards.

use super::super::{Board, MoveLocation, Position};
use tracing::instrument;

/// Returns where `next` first differs from `previous`.
///
/// Cells are compared in index order and the first mismatch wins. This is a
/// diff, not a legality check: identical boards yield `None` and boards that
/// differ in several cells still report only the first one.
#[instrument]
pub fn determine_move_location(previous: &Board, next: &Board) -> Option<MoveLocation> {
    Position::ALL
        .into_iter()
        .find(|&pos| previous.get(pos) != next.get(pos))
        .map(MoveLocation::from)
}
