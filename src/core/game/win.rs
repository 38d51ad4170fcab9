//=========================================================================
// Win Checker
//=========================================================================
//
// Decides whether the mark just placed completes a line of three.
//
// Only the lines through the placed cell can have changed, so at most
// four candidates are examined:
//
// ```text
//   row          column        anti-diagonal   main diagonal
//   . . .        . x .         . . x           x . .
//   x x x        . x .         . x .           . x .
//   . . .        . x .         x . .           . . x
//                              (row+col == 2)  (row == col)
// ```
//
// Every satisfied candidate is reported, in the order above, so a move
// that closes a row and a diagonal at once highlights both.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{Board, Cell, Mark};

//=== LineKind ============================================================

/// Which board line a [`WinningLine`] runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Horizontal line at the given row.
    Row(usize),

    /// Vertical line at the given column.
    Column(usize),

    /// Top-right to bottom-left: cells 2, 4, 6.
    AntiDiagonal,

    /// Top-left to bottom-right: cells 0, 4, 8.
    MainDiagonal,
}

//=== WinningLine =========================================================

/// Three cells in a line that all hold the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinningLine {
    kind: LineKind,
    mark: Mark,
    cells: [Cell; Cell::SIDE],
}

impl WinningLine {
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Mark shared by all three cells.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn cells(&self) -> [Cell; Cell::SIDE] {
        self.cells
    }
}

//=== Checker =============================================================

/// Returns every line through `cell` fully occupied by `mark`.
///
/// Empty when the move wins nothing. The board is expected to already
/// hold `mark` at `cell`; if it does not, no line through `cell` can
/// qualify and the result is empty.
pub fn winning_lines(board: &Board, cell: Cell, mark: Mark) -> Vec<WinningLine> {
    let (row, col) = (cell.row(), cell.col());
    let mut lines = Vec::new();

    let mut candidates = vec![
        (LineKind::Row(row), line_cells(|i| (row, i))),
        (LineKind::Column(col), line_cells(|i| (i, col))),
    ];
    if row + col == Cell::SIDE - 1 {
        candidates.push((LineKind::AntiDiagonal, line_cells(|i| (i, Cell::SIDE - 1 - i))));
    }
    if row == col {
        candidates.push((LineKind::MainDiagonal, line_cells(|i| (i, i))));
    }

    for (kind, cells) in candidates {
        if cells.iter().all(|&c| board.get(c) == Some(mark)) {
            lines.push(WinningLine { kind, mark, cells });
        }
    }

    lines
}

//--- Internal Helpers ----------------------------------------------------

/// Builds the three cells of a line from a position generator over 0..3.
fn line_cells(position: impl Fn(usize) -> (usize, usize)) -> [Cell; Cell::SIDE] {
    [0, 1, 2].map(|i| {
        let (row, col) = position(i);
        Cell::ALL[(row * Cell::SIDE + col) % Cell::COUNT]
    })
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(index: usize) -> Cell {
        Cell::new(index).unwrap()
    }

    fn board_with(marks: &[(usize, Mark)]) -> Board {
        let mut board = Board::new();
        for &(index, mark) in marks {
            board.place(cell(index), mark);
        }
        board
    }

    fn indices(line: &WinningLine) -> Vec<usize> {
        line.cells().iter().map(|c| c.index()).collect()
    }

    //=====================================================================
    // Single Lines
    //=====================================================================

    #[test]
    fn detects_row() {
        let board = board_with(&[(3, Mark::Cross), (4, Mark::Cross), (5, Mark::Cross)]);
        let lines = winning_lines(&board, cell(4), Mark::Cross);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].kind(), LineKind::Row(1));
        assert_eq!(indices(&lines[0]), vec![3, 4, 5]);
    }

    #[test]
    fn detects_column() {
        let board = board_with(&[(1, Mark::Nought), (4, Mark::Nought), (7, Mark::Nought)]);
        let lines = winning_lines(&board, cell(7), Mark::Nought);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].kind(), LineKind::Column(1));
        assert_eq!(lines[0].mark(), Mark::Nought);
    }

    #[test]
    fn detects_main_diagonal() {
        let board = board_with(&[(0, Mark::Cross), (4, Mark::Cross), (8, Mark::Cross)]);
        let lines = winning_lines(&board, cell(8), Mark::Cross);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].kind(), LineKind::MainDiagonal);
        assert_eq!(indices(&lines[0]), vec![0, 4, 8]);
    }

    #[test]
    fn detects_anti_diagonal() {
        let board = board_with(&[(2, Mark::Cross), (4, Mark::Cross), (6, Mark::Cross)]);
        let lines = winning_lines(&board, cell(6), Mark::Cross);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].kind(), LineKind::AntiDiagonal);
        assert_eq!(indices(&lines[0]), vec![2, 4, 6]);
    }

    //=====================================================================
    // Negative Cases
    //=====================================================================

    #[test]
    fn empty_board_has_no_win() {
        let board = Board::new();
        for c in Cell::ALL {
            assert!(winning_lines(&board, c, Mark::Cross).is_empty());
        }
    }

    #[test]
    fn two_in_a_row_is_not_a_win() {
        let board = board_with(&[(0, Mark::Cross), (1, Mark::Cross)]);
        assert!(winning_lines(&board, cell(1), Mark::Cross).is_empty());
    }

    #[test]
    fn mixed_line_is_not_a_win() {
        let board = board_with(&[(0, Mark::Cross), (1, Mark::Nought), (2, Mark::Cross)]);
        assert!(winning_lines(&board, cell(2), Mark::Cross).is_empty());
    }

    #[test]
    fn only_lines_through_the_cell_are_checked() {
        // Row 0 is complete, but the move at 8 does not touch it.
        let board = board_with(&[
            (0, Mark::Cross),
            (1, Mark::Cross),
            (2, Mark::Cross),
            (8, Mark::Cross),
        ]);
        assert!(winning_lines(&board, cell(8), Mark::Cross).is_empty());
    }

    #[test]
    fn off_diagonal_cells_skip_diagonals() {
        // 1 is on neither diagonal even though 0,4,8 is complete.
        let board = board_with(&[
            (0, Mark::Cross),
            (4, Mark::Cross),
            (8, Mark::Cross),
            (1, Mark::Cross),
        ]);
        assert!(winning_lines(&board, cell(1), Mark::Cross).is_empty());
    }

    //=====================================================================
    // Multiple Lines
    //=====================================================================

    #[test]
    fn reports_every_completed_line_in_priority_order() {
        // Centre completes row 1, column 1 and both diagonals.
        let marks: Vec<_> = Cell::ALL.iter().map(|c| (c.index(), Mark::Cross)).collect();
        let board = board_with(&marks);
        let lines = winning_lines(&board, cell(4), Mark::Cross);

        let kinds: Vec<_> = lines.iter().map(WinningLine::kind).collect();
        assert_eq!(
            kinds,
            vec![
                LineKind::Row(1),
                LineKind::Column(1),
                LineKind::AntiDiagonal,
                LineKind::MainDiagonal,
            ]
        );
    }

    #[test]
    fn row_and_diagonal_together() {
        let board = board_with(&[
            (0, Mark::Cross),
            (1, Mark::Cross),
            (4, Mark::Cross),
            (8, Mark::Cross),
            (2, Mark::Cross),
        ]);
        // Placing 0 last would close row 0 and the main diagonal.
        let lines = winning_lines(&board, cell(0), Mark::Cross);
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().any(|l| l.kind() == LineKind::Row(0)));
        assert!(lines.iter().any(|l| l.kind() == LineKind::MainDiagonal));
    }
}
