//! Implementation of the king race variant: board, piece movement rules and
//! the game state machine.

pub mod board;
pub mod core;
pub mod game;
pub mod rules;
