//! Interactive session: prompt, validate, apply, repeat.
//!
//! The loop is generic over `BufRead`/`Write`, so the binary runs it on
//! locked stdio while tests feed it scripted transcripts.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::core::GameState;
use crate::input::{parse_coord, parse_size};
use crate::term::game_view;
use crate::types::GameStatus;

pub struct Session<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Play one full game and return the final status.
    ///
    /// Illegal or malformed moves re-prompt the same player without touching
    /// the board. Running out of input is an error: the game cannot finish
    /// without it.
    pub fn run(&mut self) -> Result<GameStatus> {
        let size = self.prompt_size()?;
        let mut game = GameState::new(size);
        self.draw(&game)?;

        loop {
            write!(
                self.writer,
                "Player {}, please type the coordinates of your move (0-{} 0-{}):",
                game.to_move,
                size - 1,
                size - 1
            )?;
            self.writer.flush()?;

            let line = self.read_line()?;
            let coord = match parse_coord(&line) {
                Ok(coord) => coord,
                Err(err) => {
                    writeln!(self.writer, "Invalid input: {err}")?;
                    continue;
                }
            };

            if game.apply(coord).is_err() {
                writeln!(self.writer, "Illegal move, sorry!")?;
                continue;
            }

            self.draw(&game)?;
            match game.status {
                GameStatus::InProgress => {}
                GameStatus::Won(player) => {
                    writeln!(self.writer, "Player {player} has won!")?;
                    break;
                }
                GameStatus::Drawn => {
                    writeln!(self.writer, "End of game, no winner.")?;
                    break;
                }
            }
        }

        info!(size, status = ?game.status, "game over");
        Ok(game.status)
    }

    fn prompt_size(&mut self) -> Result<usize> {
        loop {
            write!(self.writer, "Board size ? ")?;
            self.writer.flush()?;
            match parse_size(&self.read_line()?) {
                Ok(size) => return Ok(size),
                Err(err) => writeln!(self.writer, "Invalid input: {err}")?,
            }
        }
    }

    fn draw(&mut self, game: &GameState) -> Result<()> {
        self.writer.write_all(game_view::render(&game.board).as_bytes())?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("reading player input")?;
        if read == 0 {
            bail!("unexpected end of input");
        }
        Ok(line)
    }
}
