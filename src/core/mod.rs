//! Core module - pure game logic with no external dependencies
//!
//! This module contains the board, win/draw detection, and the turn machine.
//! It has zero dependencies on UI or I/O.

pub mod board;
pub mod game;

// Re-export commonly used types
pub use board::Board;
pub use game::{GameState, MoveError};
