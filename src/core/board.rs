//! Board module - manages the game grid
//!
//! The board is an N x N grid where each cell is empty or marked by a player.
//! Uses a flat vector in row-major order (row * size + col).
//! Coordinates: (row, col) where both range over 0..N, row 0 at the top.

use crate::types::{Cell, Coord, Player};

/// The game board - N x N cells in flat row-major storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board. `size` must be at least 1.
    pub fn new(size: usize) -> Self {
        debug_assert!(size > 0, "board size must be at least 1");
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get cell at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if a coordinate is on the board.
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Check if a coordinate is on the board and unmarked.
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        matches!(self.get(coord.row, coord.col), Some(None))
    }

    /// True iff no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Scan for a uniform non-empty line.
    ///
    /// The scan order is part of the contract: rows top to bottom, then
    /// columns left to right, then the main diagonal (top-left to
    /// bottom-right), then the anti-diagonal (bottom-left to top-right).
    /// The first match wins, which only matters on boards that could not
    /// arise from legal play.
    pub fn winner(&self) -> Option<Player> {
        let n = self.size;

        for row in self.rows() {
            if let Some(player) = uniform(row.iter().copied()) {
                return Some(player);
            }
        }

        for col in 0..n {
            if let Some(player) = uniform((0..n).map(|row| self.cells[row * n + col])) {
                return Some(player);
            }
        }

        if let Some(player) = uniform((0..n).map(|i| self.cells[i * n + i])) {
            return Some(player);
        }

        uniform((0..n).map(|i| self.cells[(n - 1 - i) * n + i]))
    }

    /// Iterate rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Get a reference to the internal cells vector
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Build a board from explicit rows. For tests and tools.
    ///
    /// Panics if the rows do not form a square grid.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let size = rows.len();
        assert!(size > 0, "board size must be at least 1");
        assert!(
            rows.iter().all(|row| row.len() == size),
            "all rows must have length {size}"
        );

        Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        }
    }
}

/// Returns the player owning every cell of the line, if any.
fn uniform(mut line: impl Iterator<Item = Cell>) -> Option<Player> {
    let first = line.next()??;
    line.all(|cell| cell == Some(first)).then_some(first)
}
