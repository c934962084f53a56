//! Command-line interface for the console game.

use clap::Parser;

/// Two-player tic-tac-toe on the console.
///
/// The game itself takes no options; parsing still gives `--help` and
/// `--version`. Set `RUST_LOG` to enable diagnostic output on stderr.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe on the console", long_about = None)]
#[command(version)]
pub struct Cli {}
