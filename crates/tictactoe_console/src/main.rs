//! Console tic-tac-toe entry point.

use anyhow::Result;
use clap::Parser;
use tictactoe_console::{Cli, GameSession};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // No options beyond --help/--version; parsing handles those and exits.
    Cli::parse();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = GameSession::new(stdin.lock(), stdout.lock());
    session.run()
}
