//=========================================================================
// Game Engine
//=========================================================================
//
// Owns the board and the game state machine.
//
// State machine:
// ```text
//               play(free cell), no line
//                 ┌───────────┐
//                 ▼           │
//   reset() ─► InProgress ────┘
//                 │
//                 │ play(free cell) completes a line  → highlight line(s)
//                 │ play(occupied cell)               → no highlight
//                 ▼
//               Ended ── play(..) ignored
//                 │
//                 └── reset() ─► InProgress
// ```
//
// Every operation is synchronous and total over the nine cells and both
// marks; nothing here can fail.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;

//=== External Crates =====================================================

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::{winning_lines, Board, Cell, Mark, WinningLine};

//=== GameState ===========================================================

/// Whether the board still accepts moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    #[default]
    InProgress,
    Ended,
}

//=== MoveOutcome =========================================================

/// Result of a single [`GameEngine::play`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Mark recorded, game continues.
    Placed { cell: Cell, mark: Mark },

    /// Mark recorded and completed one or more lines. Game ended.
    Won {
        cell: Cell,
        mark: Mark,
        lines: Vec<WinningLine>,
    },

    /// Target cell was already occupied. Game ended without a winner.
    Forfeited { cell: Cell },

    /// Game had already ended; nothing changed.
    Ignored,
}

//=== GameStatus ==========================================================

/// Human-facing summary of the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game in progress, `Mark` moves next.
    ToMove(Mark),

    /// Every cell is filled and nobody won. Only a reset continues play.
    BoardFull,

    /// `Mark` completed a line.
    Won(Mark),

    /// Ended by a move onto an occupied cell.
    Aborted,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToMove(mark) => write!(f, "{} to move", mark),
            Self::BoardFull => f.write_str("board full, press reset"),
            Self::Won(mark) => write!(f, "{} wins", mark),
            Self::Aborted => f.write_str("game over"),
        }
    }
}

//=== GameEngine ==========================================================

/// Board, turn order, win detection and reset for one running session.
///
/// # Examples
///
/// ```
/// use noughts_crosses::core::game::{Cell, GameEngine, GameState, MoveOutcome};
///
/// let mut game = GameEngine::new();
/// for index in [0, 3, 1, 4] {
///     game.play(Cell::new(index).unwrap());
/// }
///
/// let outcome = game.play(Cell::new(2).unwrap());
/// assert!(matches!(outcome, MoveOutcome::Won { .. }));
/// assert_eq!(game.state(), GameState::Ended);
/// assert!(game.is_highlighted(Cell::new(1).unwrap()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    board: Board,
    state: GameState,
    highlighted: [bool; Cell::COUNT],
    lines: Vec<WinningLine>,
}

impl GameEngine {
    //--- Construction -----------------------------------------------------

    /// Creates an empty board, in progress, Cross to move.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Queries ----------------------------------------------------------

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Mark the next accepted move will place.
    pub fn next_mark(&self) -> Mark {
        self.board.next_mark()
    }

    /// Whether `cell` belongs to a winning line.
    pub fn is_highlighted(&self, cell: Cell) -> bool {
        self.highlighted[cell.index()]
    }

    /// Lines completed by the move that ended the game (empty otherwise).
    pub fn winning_lines(&self) -> &[WinningLine] {
        &self.lines
    }

    pub fn status(&self) -> GameStatus {
        match (self.state, self.lines.first()) {
            (GameState::Ended, Some(line)) => GameStatus::Won(line.mark()),
            (GameState::Ended, None) => GameStatus::Aborted,
            (GameState::InProgress, _) if self.board.is_full() => GameStatus::BoardFull,
            (GameState::InProgress, _) => GameStatus::ToMove(self.next_mark()),
        }
    }

    //--- Moves ------------------------------------------------------------

    /// Attempts to place the next mark on `cell`.
    ///
    /// - Game already ended: ignored.
    /// - Cell occupied: the game ends with no winner, the cell keeps its
    ///   mark.
    /// - Otherwise the mark is recorded and every line it completes is
    ///   highlighted, ending the game.
    pub fn play(&mut self, cell: Cell) -> MoveOutcome {
        if self.state == GameState::Ended {
            warn!(target: "core::game", "Move on cell {} ignored: game has ended", cell);
            return MoveOutcome::Ignored;
        }

        let mark = self.board.next_mark();
        if !self.board.place(cell, mark) {
            info!(target: "core::game", "Cell {} already taken, game over", cell);
            self.end_game(Vec::new());
            return MoveOutcome::Forfeited { cell };
        }

        debug!(target: "core::game", "{} placed on cell {}", mark, cell);

        let lines = winning_lines(&self.board, cell, mark);
        if lines.is_empty() {
            if self.board.is_full() {
                info!(target: "core::game", "Board full with no winner");
            }
            return MoveOutcome::Placed { cell, mark };
        }

        info!(target: "core::game", "{} wins ({} line(s))", mark, lines.len());
        self.end_game(lines.clone());
        MoveOutcome::Won { cell, mark, lines }
    }

    /// Finalizes the game, flagging every cell of every winning line.
    fn end_game(&mut self, lines: Vec<WinningLine>) {
        self.state = GameState::Ended;
        for line in &lines {
            for cell in line.cells() {
                self.highlighted[cell.index()] = true;
            }
        }
        self.lines = lines;
    }

    //--- Reset ------------------------------------------------------------

    /// Clears the board and highlights and returns to `InProgress`.
    ///
    /// Idempotent: resetting a fresh game changes nothing.
    pub fn reset(&mut self) {
        self.board.clear();
        self.highlighted = [false; Cell::COUNT];
        self.lines.clear();
        self.state = GameState::InProgress;
        info!(target: "core::game", "Board reset");
    }
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

    fn play_all(game: &mut GameEngine, indices: &[usize]) -> Vec<MoveOutcome> {
        indices.iter().map(|&i| game.play(cell(i))).collect()
    }

    //=====================================================================
    // Turn Order
    //=====================================================================

    #[test]
    fn cross_opens_and_marks_alternate() {
        let mut game = GameEngine::new();
        let outcomes = play_all(&mut game, &[4, 0, 8, 2]);

        let marks: Vec<_> = outcomes
            .iter()
            .map(|o| match o {
                MoveOutcome::Placed { mark, .. } => *mark,
                other => panic!("Expected Placed, got {:?}", other),
            })
            .collect();

        assert_eq!(marks, vec![Mark::Cross, Mark::Nought, Mark::Cross, Mark::Nought]);
    }

    //=====================================================================
    // Winning
    //=====================================================================

    #[test]
    fn winning_move_ends_game_and_highlights_line() {
        let mut game = GameEngine::new();
        play_all(&mut game, &[0, 3, 1, 4]);

        match game.play(cell(2)) {
            MoveOutcome::Won { mark, lines, .. } => {
                assert_eq!(mark, Mark::Cross);
                assert_eq!(lines.len(), 1);
            }
            other => panic!("Expected Won, got {:?}", other),
        }

        assert_eq!(game.state(), GameState::Ended);
        for i in [0, 1, 2] {
            assert!(game.is_highlighted(cell(i)), "Cell {} should be highlighted", i);
        }
        for i in [3, 4] {
            assert!(!game.is_highlighted(cell(i)), "Cell {} must not be highlighted", i);
        }
        assert_eq!(game.status(), GameStatus::Won(Mark::Cross));
    }

    #[test]
    fn nought_can_win() {
        let mut game = GameEngine::new();
        let outcomes = play_all(&mut game, &[0, 2, 1, 4, 8, 6]);

        assert!(matches!(
            outcomes.last(),
            Some(MoveOutcome::Won { mark: Mark::Nought, .. })
        ));
        assert_eq!(game.status(), GameStatus::Won(Mark::Nought));
    }

    #[test]
    fn double_line_highlights_both() {
        // X holds all four corners, so X on the centre closes both diagonals.
        let mut game = GameEngine::new();
        play_all(&mut game, &[0, 1, 2, 3, 6, 5, 8, 7]);

        match game.play(cell(4)) {
            MoveOutcome::Won { lines, .. } => assert_eq!(lines.len(), 2),
            other => panic!("Expected Won, got {:?}", other),
        }
        for i in [0, 2, 4, 6, 8] {
            assert!(game.is_highlighted(cell(i)));
        }
        assert_eq!(game.winning_lines().len(), 2);
    }

    //=====================================================================
    // Illegal Moves
    //=====================================================================

    #[test]
    fn occupied_cell_ends_game_without_highlight() {
        let mut game = GameEngine::new();
        game.play(cell(0));

        assert_eq!(game.play(cell(0)), MoveOutcome::Forfeited { cell: cell(0) });
        assert_eq!(game.state(), GameState::Ended);
        assert_eq!(game.board().get(cell(0)), Some(Mark::Cross));
        assert!(Cell::ALL.iter().all(|&c| !game.is_highlighted(c)));
        assert_eq!(game.status(), GameStatus::Aborted);
    }

    #[test]
    fn moves_after_end_are_ignored() {
        let mut game = GameEngine::new();
        game.play(cell(0));
        game.play(cell(0));

        let before = game.board().clone();
        assert_eq!(game.play(cell(5)), MoveOutcome::Ignored);
        assert_eq!(game.board(), &before, "Ended board must not change");
    }

    //=====================================================================
    // Board Full
    //=====================================================================

    #[test]
    fn full_board_without_winner_stays_in_progress() {
        // X O X / X O O / O X X
        let mut game = GameEngine::new();
        play_all(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        assert_eq!(game.state(), GameState::InProgress);
        assert!(game.board().is_full());
        assert_eq!(game.status(), GameStatus::BoardFull);
    }

    //=====================================================================
    // Reset
    //=====================================================================

    #[test]
    fn reset_clears_everything() {
        let mut game = GameEngine::new();
        play_all(&mut game, &[0, 3, 1, 4, 2]);
        game.reset();

        assert_eq!(game.state(), GameState::InProgress);
        assert!(game.board().is_empty());
        assert!(game.winning_lines().is_empty());
        assert!(Cell::ALL.iter().all(|&c| !game.is_highlighted(c)));
        assert_eq!(game.next_mark(), Mark::Cross);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut once = GameEngine::new();
        once.reset();

        let mut twice = GameEngine::new();
        twice.reset();
        twice.reset();

        assert_eq!(once.board(), twice.board());
        assert_eq!(once.state(), twice.state());
        assert_eq!(twice.state(), GameState::InProgress);
        assert!(twice.board().is_empty());
    }

    #[test]
    fn status_display() {
        assert_eq!(GameStatus::ToMove(Mark::Cross).to_string(), "X to move");
        assert_eq!(GameStatus::Won(Mark::Nought).to_string(), "O wins");
        assert_eq!(GameStatus::Aborted.to_string(), "game over");
    }
}
