//! Console driver for two-player tic-tac-toe.
//!
//! Thin glue around the [`tictactoe`] rule engine: a clap CLI plus the
//! line-oriented prompt/display/replay loop. The session takes its input and
//! output handles as parameters, so tests can script whole games through
//! in-memory buffers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod input;
mod session;

pub use cli::Cli;
pub use input::parse_square;
pub use session::GameSession;
