//=========================================================================
// Board Geometry
//=========================================================================
//
// Maps window pixels to cells and back.
//
// The board fills the whole drawable area, split into thirds:
// ```text
//   x:  0      W/3     2W/3      W
//   y:  0 ┌───────┬───────┬───────┐
//         │   0   │   1   │   2   │
//   H/3   ├───────┼───────┼───────┤
//         │   3   │   4   │   5   │
//  2H/3   ├───────┼───────┼───────┤
//         │   6   │   7   │   8   │
//     H   └───────┴───────┴───────┘
// ```
// Coordinates are window space: origin top-left, y grows downwards.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::game::Cell;

//=== BoardGeometry =======================================================

/// Pixel dimensions of the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    width: f32,
    height: f32,
}

impl BoardGeometry {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Updates the board size after the drawable area changed.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Width and height of a single cell.
    pub fn cell_size(&self) -> (f32, f32) {
        let side = Cell::SIDE as f32;
        (self.width / side, self.height / side)
    }

    //--- Coordinate Mapping -----------------------------------------------

    /// Returns the cell under `(x, y)`.
    ///
    /// `col = floor(x / (W/3))`, `row = floor(y / (H/3))`. Anything outside
    /// `[0, W) x [0, H)`, including NaN, maps to `None`.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<Cell> {
        let inside = (0.0..self.width).contains(&x) && (0.0..self.height).contains(&y);
        if !inside {
            return None;
        }

        let (cell_w, cell_h) = self.cell_size();
        let last = Cell::SIDE - 1;

        // Rounding can push a point just below W onto 3.0.
        let col = ((x / cell_w).floor() as usize).min(last);
        let row = ((y / cell_h).floor() as usize).min(last);

        Cell::from_row_col(row, col)
    }

    /// Pixel center of `cell`.
    pub fn center_of(&self, cell: Cell) -> (f32, f32) {
        let (cell_w, cell_h) = self.cell_size();
        (
            cell_w / 2.0 + cell.col() as f32 * cell_w,
            cell_h / 2.0 + cell.row() as f32 * cell_h,
        )
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
