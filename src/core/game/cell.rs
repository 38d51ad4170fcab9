//=========================================================================
// Cell
//=========================================================================
//
// One of the nine board positions, indexed row-major:
//
// ```text
//   0 | 1 | 2
//  ---+---+---
//   3 | 4 | 5
//  ---+---+---
//   6 | 7 | 8
// ```
//
// A `Cell` can only be constructed for indices 0..=8, so every lookup
// keyed by it is total.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;

//=== Cell ================================================================

/// A validated board position (0..=8, row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell(u8);

impl Cell {
    /// Board side length.
    pub const SIDE: usize = 3;

    /// Number of cells on the board.
    pub const COUNT: usize = Self::SIDE * Self::SIDE;

    /// Every cell in index order.
    pub const ALL: [Cell; Self::COUNT] = [
        Cell(0), Cell(1), Cell(2),
        Cell(3), Cell(4), Cell(5),
        Cell(6), Cell(7), Cell(8),
    ];

    //--- Construction -----------------------------------------------------

    /// Returns the cell for `index`, or `None` if it is off the board.
    pub const fn new(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Returns the cell at (`row`, `col`), or `None` if either is >= 3.
    pub const fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < Self::SIDE && col < Self::SIDE {
            Some(Self((row * Self::SIDE + col) as u8))
        } else {
            None
        }
    }

    //--- Accessors --------------------------------------------------------

    /// Row-major index in 0..=8.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn row(self) -> usize {
        self.index() / Self::SIDE
    }

    #[inline]
    pub const fn col(self) -> usize {
        self.index() % Self::SIDE
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (row {}, col {})", self.0, self.row(), self.col())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
