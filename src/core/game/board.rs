//=========================================================================
// Board
//=========================================================================
//
// Cell → Mark storage with per-mark counters.
//
// The turn is never stored: it is derived from the counters, so Cross
// moves whenever it has not placed more marks than Nought. Clearing the
// board resets both counters and Cross opens again.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{Cell, Mark};

//=== Board ===============================================================

/// Occupancy of the nine cells plus a running count per mark.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Mark>; Cell::COUNT],
    crosses: usize,
    noughts: usize,
}

impl Board {
    //--- Construction -----------------------------------------------------

    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Queries ----------------------------------------------------------

    /// Returns the mark on `cell`, if any.
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<Mark> {
        self.cells[cell.index()]
    }

    #[inline]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.get(cell).is_some()
    }

    /// Number of `mark`s placed so far.
    pub fn count(&self, mark: Mark) -> usize {
        match mark {
            Mark::Cross => self.crosses,
            Mark::Nought => self.noughts,
        }
    }

    /// Mark that the next move places.
    pub fn next_mark(&self) -> Mark {
        if self.crosses > self.noughts {
            Mark::Nought
        } else {
            Mark::Cross
        }
    }

    /// Total number of occupied cells.
    pub fn len(&self) -> usize {
        self.crosses + self.noughts
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() == Cell::COUNT
    }

    /// Iterates over occupied cells in index order.
    pub fn occupied(&self) -> impl Iterator<Item = (Cell, Mark)> + '_ {
        Cell::ALL
            .iter()
            .filter_map(move |&cell| self.get(cell).map(|mark| (cell, mark)))
    }

    //--- Mutation ---------------------------------------------------------

    /// Records `mark` on `cell`.
    ///
    /// Returns `false` and leaves the board untouched if the cell is
    /// already occupied. Marks are never overwritten.
    pub fn place(&mut self, cell: Cell, mark: Mark) -> bool {
        let slot = &mut self.cells[cell.index()];
        if slot.is_some() {
            return false;
        }

        *slot = Some(mark);
        match mark {
            Mark::Cross => self.crosses += 1,
            Mark::Nought => self.noughts += 1,
        }
        true
    }

    /// Removes every mark and zeroes both counters.
    pub fn clear(&mut self) {
        self.cells = [None; Cell::COUNT];
        self.crosses = 0;
        self.noughts = 0;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
