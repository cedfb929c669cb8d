//! Undo log for the backtracking search.
//!
//! Instead of copying the whole board before every trial placement, the solver records
//! the cells each placement newly filled. Rewinding clears exactly those cells and pops
//! the placement, which restores the board and the placed-word list to the state they
//! had at the matching checkpoint.

use super::board::Board;
use super::util::Position;

#[derive(Debug, Default)]
pub struct Trail {
    /// Cells written by every live placement, oldest first
    cells: Vec<Position>,
    /// Start index into `cells` of each live placement
    checkpoints: Vec<usize>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of placements that can still be rewound
    pub fn depth(&self) -> usize {
        self.checkpoints.len()
    }

    /// Opens a new checkpoint and records the cells written by the placement it guards
    pub fn record(&mut self, written: Vec<Position>) {
        self.checkpoints.push(self.cells.len());
        self.cells.extend(written);
    }

    /// Undoes the most recent recorded placement.
    ///
    /// Returns false if there was nothing to rewind.
    pub fn rewind(&mut self, board: &mut Board) -> bool {
        match self.checkpoints.pop() {
            Some(start) => {
                board.undo_placement(&self.cells[start..]);
                self.cells.truncate(start);
                true
            }
            None => false,
        }
    }
}
