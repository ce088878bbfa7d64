//! Terminal layer.
//!
//! `game_view` renders a board into grid text without touching I/O;
//! `session` owns the prompt loop over any reader/writer pair.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Make full sessions scriptable from in-memory streams

pub mod game_view;
pub mod session;

pub use session::Session;
