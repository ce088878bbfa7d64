//! Two-player N x N tic-tac-toe for the terminal.
//!
//! The game rules live in `core` as a pure state machine with no I/O; `term`
//! adapts it to line-oriented console prompts so whole sessions can also run
//! against in-memory readers and writers in tests.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
