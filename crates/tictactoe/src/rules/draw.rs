//! Tie detection logic for tic-tac-toe.

use super::win::LINES;
use crate::types::Board;
use tracing::instrument;

/// Checks if every winning line is completely filled with marks.
///
/// On a 3x3 board this holds exactly when all nine squares are occupied.
/// The check is independent of win detection: a full board that also holds a
/// completed line reports true here too, and the caller gives the winner
/// precedence.
#[instrument]
pub fn is_tie(board: &Board) -> bool {
    LINES
        .iter()
        .all(|line| line.iter().all(|&pos| !board.is_empty(pos)))
}
