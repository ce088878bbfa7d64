//! Game state - the turn machine.
//!
//! `GameState` owns the board and implements the pure transition
//! validate -> apply -> re-check terminal state. Console I/O stays outside
//! this module so the whole machine can be driven from tests.

use derive_more::{Display, Error};
use tracing::{debug, instrument};

use crate::core::board::Board;
use crate::types::{Coord, GameStatus, Player};

/// Why a move was rejected. The board is never mutated on rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    #[display("({row} {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },
    #[display("cell ({row} {col}) is already taken")]
    Occupied { row: usize, col: usize },
    #[display("the game is already over")]
    Finished,
}

/// Full game state: board, whose turn it is, and the current status.
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub to_move: Player,
    pub status: GameStatus,
}

impl GameState {
    /// Fresh game on an empty `size` x `size` board, player 1 to move.
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            to_move: Player::One,
            status: GameStatus::InProgress,
        }
    }

    /// Validate and apply a move for the player to move.
    ///
    /// On success the mark is written, the win scan runs before the
    /// full-board check (a winning final move is a win, not a draw), and the
    /// turn passes to the opponent only while the game continues. Returns
    /// the status after the move.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] or [`MoveError::Occupied`] for illegal
    /// coordinates, [`MoveError::Finished`] once the game has ended. The
    /// state is unchanged in every error case.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply(&mut self, coord: Coord) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::Finished);
        }
        if !self.board.in_bounds(coord) {
            return Err(MoveError::OutOfBounds {
                row: coord.row,
                col: coord.col,
                size: self.board.size(),
            });
        }
        if !self.board.is_empty_at(coord) {
            return Err(MoveError::Occupied {
                row: coord.row,
                col: coord.col,
            });
        }

        self.board.set(coord.row, coord.col, Some(self.to_move));

        self.status = if let Some(winner) = self.board.winner() {
            GameStatus::Won(winner)
        } else if self.board.is_full() {
            GameStatus::Drawn
        } else {
            self.to_move = self.to_move.opponent();
            GameStatus::InProgress
        };

        debug!(status = ?self.status, "move accepted");
        Ok(self.status)
    }
}
