//=========================================================================
// Shape Batch
//=========================================================================
//
// Turns a RenderState into drawing primitives for one frame.
//
//   grid   → 4 lines at the thirds
//   Cross  → 2 diagonal lines through the cell center
//   Nought → 1 full arc around the cell center
//
// Highlighted marks take the highlight color, everything else the base
// mark color. A mark never reaches past 40% of its cell, whatever the
// configured extent, so small windows keep marks inside their cells.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::config::{Color, GameConfig};
use crate::core::game::Mark;
use crate::core::render::{MarkSprite, RenderState};

/// Largest mark half-extent as a fraction of the cell side.
const MAX_EXTENT_RATIO: f32 = 0.4;

//=== Shape ===============================================================

/// A stroked primitive in window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Shape {
    Line {
        from: (f32, f32),
        to: (f32, f32),
        thickness: f32,
        color: Color,
    },
    Arc {
        center: (f32, f32),
        radius: f32,
        thickness: f32,
        color: Color,
    },
}

//=== Batch ===============================================================

/// Ordered primitives for one frame (grid first, marks on top).
#[derive(Debug, Clone, Default)]
pub(crate) struct Batch {
    shapes: Vec<Shape>,
}

impl Batch {
    /// Builds the frame's shapes from `state` styled by `config`.
    pub(crate) fn build(state: &RenderState, config: &GameConfig) -> Self {
        let mut batch = Self {
            shapes: Vec::with_capacity(4 + 2 * state.marks.len()),
        };

        batch.push_grid(state.width, state.height, config);

        let cell_side = state.width.min(state.height) / 3.0;
        let extent = config.mark_extent().min(cell_side * MAX_EXTENT_RATIO);
        for sprite in &state.marks {
            batch.push_mark(sprite, extent, config);
        }

        batch
    }

    pub(crate) fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    //--- Internal Helpers -------------------------------------------------

    fn push_grid(&mut self, width: f32, height: f32, config: &GameConfig) {
        let thickness = config.grid_thickness();
        let color = config.palette().grid;

        for i in 1..3 {
            let x = i as f32 * width / 3.0;
            let y = i as f32 * height / 3.0;
            self.shapes.push(Shape::Line { from: (x, 0.0), to: (x, height), thickness, color });
            self.shapes.push(Shape::Line { from: (0.0, y), to: (width, y), thickness, color });
        }
    }

    fn push_mark(&mut self, sprite: &MarkSprite, d: f32, config: &GameConfig) {
        let palette = config.palette();
        let color = if sprite.highlighted { palette.highlight } else { palette.mark };
        let thickness = config.mark_thickness();
        let (cx, cy) = sprite.center;

        match sprite.kind {
            Mark::Cross => {
                self.shapes.push(Shape::Line {
                    from: (cx - d, cy - d),
                    to: (cx + d, cy + d),
                    thickness,
                    color,
                });
                self.shapes.push(Shape::Line {
                    from: (cx + d, cy - d),
                    to: (cx - d, cy + d),
                    thickness,
                    color,
                });
            }
            Mark::Nought => {
                self.shapes.push(Shape::Arc { center: (cx, cy), radius: d, thickness, color });
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
