//! The engine connects a [`Game`] to a line-oriented text protocol so that a
//! person at a terminal, a script or a GUI can play a match.
//!
//! [`Engine::run`] is the "main loop": it reads one command per line and
//! writes replies to the output stream. Anything that is not a direct answer
//! (rejected moves, unsupported commands, invalid positions) is reported as an
//! `info string` line, which is also how the engine logs what it is doing.

use std::io::{BufRead, Write};

use anyhow::Context;
use itertools::Itertools;

use crate::chess::core::{Move, Square};
use crate::chess::game::Game;
use crate::engine::command::Command;

mod command;

/// Console session for a single game at a time.
pub struct Engine<R: BufRead, W: Write> {
    game: Game,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Engine<R, W> {
    /// Creates a new instance of the engine with the initial position and
    /// provided I/O.
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self {
            game: Game::new(),
            input,
            output,
        }
    }

    /// The game being played.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Continuously reads the input stream and executes commands until "quit"
    /// is sent or the input is exhausted.
    ///
    /// Commands:
    ///
    /// - `move <from> <to>` (or `move <from><to>`): replies `ok` and, if the
    ///   move ended the game, `state <STATE>`.
    /// - `moves`: all legal moves separated by spaces.
    /// - `d`: board dump followed by `fen <position>`.
    /// - `state`, `turn`: current game state and side to move.
    /// - `position startpos`, `position fen <placement> <side>`: replaces the
    ///   game.
    /// - `new`: starts over from the initial position.
    /// - `quit`.
    ///
    /// # Errors
    ///
    /// Only I/O failures are errors. Invalid commands and illegal moves are
    /// reported to the output and the loop continues.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("reading from input")?;
            if read == 0 {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }
            match Command::parse(&line) {
                Command::Move { from, to } => self.handle_move(&from, &to)?,
                Command::Moves => self.handle_moves()?,
                Command::Display => self.handle_display()?,
                Command::State => writeln!(self.output, "state {}", self.game.state())?,
                Command::Turn => writeln!(self.output, "turn {}", self.game.turn().name())?,
                Command::SetPosition { fen } => self.handle_position(fen.as_deref())?,
                Command::NewGame => self.game = Game::new(),
                Command::Quit => break,
                Command::Unknown(command) => {
                    writeln!(self.output, "info string Unsupported command: {command}")?;
                },
            }
            self.output.flush()?;
        }
        Ok(())
    }

    fn handle_move(&mut self, from: &str, to: &str) -> anyhow::Result<()> {
        let result = Square::try_from(from)
            .and_then(|from| Ok(Move::new(from, Square::try_from(to)?)))
            .and_then(|next_move| self.game.play(next_move));
        match result {
            Ok(()) => {
                writeln!(self.output, "ok")?;
                if self.game.state().is_terminal() {
                    writeln!(self.output, "state {}", self.game.state())?;
                }
            },
            Err(e) => writeln!(self.output, "info string illegal move: {e}")?,
        }
        Ok(())
    }

    fn handle_moves(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "{}", self.game.legal_moves().iter().join(" "))?;
        Ok(())
    }

    fn handle_display(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "{:?}", self.game.board())?;
        writeln!(self.output, "fen {}", self.game)?;
        Ok(())
    }

    /// Replaces the game with the initial position or the one given in FEN.
    /// The current game is kept if the position can not be parsed.
    fn handle_position(&mut self, fen: Option<&str>) -> anyhow::Result<()> {
        match fen {
            None => self.game = Game::new(),
            Some(fen) => match Game::from_fen(fen) {
                Ok(game) => self.game = game,
                Err(e) => writeln!(self.output, "info string Invalid position: {e:#}")?,
            },
        }
        Ok(())
    }
}
