//! The game engine: board state, turn tracking, and move validation.

use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Errors returned when a move is rejected.
///
/// All variants are recoverable: the caller re-prompts instead of aborting.
/// Rejected moves leave the engine untouched, so turn order stays in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a square on the board.
    #[display("Index {} is outside the board (expected 0-8)", _0)]
    InvalidIndex(usize),

    /// The square is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),

    /// The game has already ended.
    #[display("Game is already over")]
    GameAlreadyOver,
}

impl std::error::Error for MoveError {}

/// Rule engine for a single game of tic-tac-toe.
///
/// Owns the board and the turn counter; the two players are the two variants
/// of [`Player`], with X always moving first. The engine is an explicitly
/// constructed value owned by its driver, not a process-wide singleton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
    turns: u32,
}

impl GameEngine {
    /// Creates an engine ready for the first move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turns: 0,
        }
    }

    /// Starts a fresh game: empty board, turn counter at zero.
    ///
    /// Works from any prior state, including a finished game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turns = 0;
        debug!("game reset");
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of accepted moves so far.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// The player who owns the upcoming move: X when the move count is even.
    pub fn to_move(&self) -> Player {
        if self.turns % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// The player owning the current turn number: X on odd turns, O on even.
    ///
    /// After a move this names the player who just placed a mark, which is
    /// what the end-of-game message wants. Before the first move the counter
    /// is zero (even), so this evaluates to O; use [`GameEngine::to_move`]
    /// for the upcoming player.
    pub fn current_player(&self) -> Player {
        if self.turns % 2 == 1 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Checks whether the square at `index` holds a mark.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidIndex`] if `index` is not in `0..9`; the
    /// engine does not clamp out-of-range input.
    pub fn is_occupied(&self, index: usize) -> Result<bool, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::InvalidIndex(index))?;
        Ok(!self.board.is_empty(pos))
    }

    /// Applies the next move at `index`.
    ///
    /// On success the turn counter increments and the mark of the player
    /// owning the new turn number is written: odd turn numbers get X, even
    /// get O.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameAlreadyOver`] if a terminal state was reached
    /// - [`MoveError::InvalidIndex`] if `index` is not in `0..9`
    /// - [`MoveError::CellOccupied`] if the square already holds a mark
    ///
    /// On any error the board and counter are left unchanged.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize) -> Result<(), MoveError> {
        if self.is_game_over() {
            warn!("move rejected, game is already over");
            return Err(MoveError::GameAlreadyOver);
        }

        let pos = Position::from_index(index).ok_or(MoveError::InvalidIndex(index))?;
        if !self.board.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }

        self.turns += 1;
        let mark = self.current_player();
        self.board.set(pos, Square::Occupied(mark));
        debug!(%pos, ?mark, turn = self.turns, "mark placed");

        Ok(())
    }

    /// True iff some winning line holds three equal marks.
    pub fn is_winner(&self) -> bool {
        self.winner().is_some()
    }

    /// The player holding a completed line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(&self.board)
    }

    /// True iff every winning line is completely filled with marks.
    ///
    /// Independent of [`GameEngine::is_winner`]: on a full board that also
    /// holds a completed line both predicates are true, and the caller gives
    /// the winner precedence.
    pub fn is_tie(&self) -> bool {
        rules::is_tie(&self.board)
    }

    /// True iff the game reached a terminal state.
    pub fn is_game_over(&self) -> bool {
        self.is_winner() || self.is_tie()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
