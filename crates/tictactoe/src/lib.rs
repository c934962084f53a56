//! Pure tic-tac-toe game logic.
//!
//! The [`GameEngine`] owns the board and the turn counter and exposes the
//! rule decisions: move validation, win and tie detection, and turn
//! alternation. It performs no I/O; a driver feeds it validated indices and
//! reads its predicates.
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameEngine, Player};
//!
//! # fn main() -> Result<(), tictactoe::MoveError> {
//! let mut game = GameEngine::new();
//! game.apply_move(0)?; // X takes the top-left square
//! game.apply_move(4)?; // O takes the center
//! assert_eq!(game.to_move(), Player::X);
//! assert!(!game.is_game_over());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod position;
mod rules;
mod types;

pub use engine::{GameEngine, MoveError};
pub use position::Position;
pub use rules::{check_winner, is_tie};
pub use types::{Board, Player, Square};
