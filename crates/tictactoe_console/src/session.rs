//! Interactive game session: the play/replay driver loop.

use crate::input;
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tictactoe::{GameEngine, MoveError};
use tracing::{debug, info, instrument};

/// A console session: one engine plus the handles it is driven through.
///
/// The input and output handles are injected rather than read from the
/// process environment, so tests can script a session end to end.
pub struct GameSession<R, W> {
    engine: GameEngine,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> GameSession<R, W> {
    /// Creates a session reading moves from `input` and printing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            engine: GameEngine::new(),
            input,
            output,
        }
    }

    /// Plays rounds until the players decline a replay.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.play_round()?;
            if !self.play_again()? {
                break;
            }
        }
        writeln!(self.output, "Thanks for playing!")?;
        Ok(())
    }

    /// Plays a single round to completion.
    fn play_round(&mut self) -> Result<()> {
        self.engine.reset();
        writeln!(self.output, "\nLet's play Tic-Tac-Toe!\n")?;

        while !self.engine.is_game_over() {
            writeln!(
                self.output,
                "\nPlayer {}, pick a square:",
                self.engine.to_move()
            )?;
            self.show_board()?;
            self.take_move()?;
        }

        info!(
            turns = self.engine.turns(),
            winner = ?self.engine.winner(),
            "round finished"
        );

        if self.engine.is_winner() {
            writeln!(
                self.output,
                "\nPlayer {} wins!",
                self.engine.current_player()
            )?;
        } else if self.engine.is_tie() {
            writeln!(self.output, "\nThe game ends in a tie!")?;
        }
        self.show_board()?;

        Ok(())
    }

    /// Reads lines until one names a playable square, then applies the move.
    ///
    /// Malformed text and occupied squares each get a message and a board
    /// redisplay before the next read; the engine is only called once a line
    /// parses.
    fn take_move(&mut self) -> Result<()> {
        loop {
            let line = self.read_line()?;
            let Some(index) = input::parse_square(&line) else {
                debug!(line = line.trim(), "input rejected");
                writeln!(self.output, "Invalid input! Please pick a square:")?;
                self.show_board()?;
                continue;
            };

            match self.engine.apply_move(index) {
                Ok(()) => return Ok(()),
                Err(MoveError::CellOccupied(_)) => {
                    writeln!(
                        self.output,
                        "\nSquare has already been picked! Pick another square:"
                    )?;
                    self.show_board()?;
                }
                Err(MoveError::InvalidIndex(_)) => {
                    writeln!(self.output, "Invalid input! Please pick a square:")?;
                    self.show_board()?;
                }
                Err(err @ MoveError::GameAlreadyOver) => {
                    // The round loop stops on terminal states, so this is a bug.
                    return Err(err.into());
                }
            }
        }
    }

    /// Asks the yes/no replay question. Anything but "y" declines.
    fn play_again(&mut self) -> Result<bool> {
        writeln!(self.output, "\nPlay again? (Y/N):")?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read replay answer")?;
        Ok(read > 0 && line.trim().eq_ignore_ascii_case("y"))
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            bail!("input closed before the game finished");
        }
        Ok(line)
    }

    fn show_board(&mut self) -> Result<()> {
        write!(self.output, "{}", self.engine.board().display())?;
        Ok(())
    }
}
