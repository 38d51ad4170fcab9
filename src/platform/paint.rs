//=========================================================================
// Batch Painting
//=========================================================================
//
// Replays a Batch through an egui Painter.
//
//   Shape::Line → Painter::line_segment
//   Shape::Arc  → Painter::circle_stroke
//
// Batch coordinates are physical pixels while egui works in points, so
// every position, radius and stroke width is divided by the
// pixels-per-point factor.
//
//=========================================================================

//=== External Crates =====================================================

use egui::{pos2, Color32, Painter, Pos2, Stroke};

//=== Internal Dependencies ===============================================

use super::batch::{Batch, Shape};
use crate::config::Color;

//=== Painting ============================================================

pub(crate) fn color32(color: Color) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

/// Fills the painter's area with `background`, then draws every shape of
/// `batch` in order.
pub(crate) fn paint_batch(painter: &Painter, batch: &Batch, background: Color, pixels_per_point: f32) {
    let scale = 1.0 / pixels_per_point;
    let to_point = |(x, y): (f32, f32)| -> Pos2 { pos2(x * scale, y * scale) };

    painter.rect_filled(painter.clip_rect(), 0.0, color32(background));

    for shape in batch.shapes() {
        match *shape {
            Shape::Line { from, to, thickness, color } => {
                painter.line_segment(
                    [to_point(from), to_point(to)],
                    Stroke::new(thickness * scale, color32(color)),
                );
            }
            Shape::Arc { center, radius, thickness, color } => {
                painter.circle_stroke(
                    to_point(center),
                    radius * scale,
                    Stroke::new(thickness * scale, color32(color)),
                );
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
