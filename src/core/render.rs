//=========================================================================
// Render State
//=========================================================================
//
// Read-only snapshot of what the drawing layer needs for one frame.
//
// Captured after input has been applied; capturing never mutates the
// game. The drawing layer decides how each record becomes pixels.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::game::{Cell, GameEngine, Mark};
use crate::core::geometry::BoardGeometry;

//=== MarkSprite ==========================================================

/// One occupied cell, positioned for drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkSprite {
    pub kind: Mark,
    pub cell: Cell,
    /// Pixel center of the cell.
    pub center: (f32, f32),
    /// Part of a winning line.
    pub highlighted: bool,
}

//=== RenderState =========================================================

/// Board size plus every occupied cell, in index order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub width: f32,
    pub height: f32,
    pub marks: Vec<MarkSprite>,
}

impl RenderState {
    /// Snapshots `game` laid out on `geometry`.
    pub fn capture(game: &GameEngine, geometry: &BoardGeometry) -> Self {
        let marks = game
            .board()
            .occupied()
            .map(|(cell, kind)| MarkSprite {
                kind,
                cell,
                center: geometry.center_of(cell),
                highlighted: game.is_highlighted(cell),
            })
            .collect();

        Self {
            width: geometry.width(),
            height: geometry.height(),
            marks,
        }
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

    #[test]
    fn empty_game_has_no_marks() {
        let state = RenderState::capture(&GameEngine::new(), &BoardGeometry::new(300.0, 300.0));
        assert!(state.marks.is_empty());
        assert_eq!((state.width, state.height), (300.0, 300.0));
    }

    #[test]
    fn sprites_carry_kind_center_and_highlight() {
        let mut game = GameEngine::new();
        for i in [0, 3, 1, 4, 2] {
            game.play(cell(i));
        }

        let state = RenderState::capture(&game, &BoardGeometry::new(300.0, 300.0));
        assert_eq!(state.marks.len(), 5);

        let first = state.marks[0];
        assert_eq!(first.kind, Mark::Cross);
        assert_eq!(first.center, (50.0, 50.0));
        assert!(first.highlighted);

        let nought = state.marks.iter().find(|s| s.cell == cell(4)).unwrap();
        assert_eq!(nought.kind, Mark::Nought);
        assert!(!nought.highlighted);
    }

    #[test]
    fn capture_does_not_mutate_game() {
        let mut game = GameEngine::new();
        game.play(cell(4));
        let before = game.board().clone();

        let _ = RenderState::capture(&game, &BoardGeometry::new(90.0, 90.0));
        assert_eq!(game.board(), &before);
    }
}
