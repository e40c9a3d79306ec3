//! Collision primitives for the side-scrolling play field
//!
//! Everything is tested against the glider's axis-aligned box. Obstacles
//! reduce to "horizontal overlap, then outside the gap" checks; power-ups use
//! a forgiving circle test.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    /// Box of half-extent `radius` centered on `center`
    pub fn centered(center: Vec2, radius: f32) -> Self {
        Self {
            x: center.x - radius,
            y: center.y - radius,
            width: radius * 2.0,
            height: radius * 2.0,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap with the horizontal span [left, right)
    pub fn overlaps_span(&self, left: f32, right: f32) -> bool {
        self.left() < right && self.right() > left
    }

    /// Whether any part of the box lies above `top` or below `bottom`
    pub fn escapes_window(&self, top: f32, bottom: f32) -> bool {
        self.top() < top || self.bottom() > bottom
    }
}

/// Glider box against a gap column spanning [x, x + width]
pub fn gap_column_collision(bounds: &Bounds, x: f32, width: f32, gap_top: f32, gap_bottom: f32) -> bool {
    bounds.overlaps_span(x, x + width) && bounds.escapes_window(gap_top, gap_bottom)
}

/// Glider box against a thin full-height beam; vertical position is ignored
pub fn beam_collision(bounds: &Bounds, center_x: f32, half_width: f32) -> bool {
    bounds.right() > center_x - half_width && bounds.left() < center_x + half_width
}

/// Conservative horizontal extent of a column tilted by `rotation` radians
///
/// Not an exact rotated-rectangle test: the column is treated as a box whose
/// width grows with the projected height of the field.
pub fn tilted_width(width: f32, rotation: f32, field_height: f32) -> f32 {
    width * rotation.cos().abs() + field_height * rotation.sin().abs()
}

/// Circle-vs-circle pickup test with a tolerance that shrinks the contact distance
pub fn pickup_collision(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32, tolerance: f32) -> bool {
    a.distance(b) < a_radius + b_radius - tolerance
}

/// Whether a box pokes past the top or bottom edge of the play field
pub fn out_of_field(bounds: &Bounds, field_height: f32) -> bool {
    bounds.top() < 0.0 || bounds.bottom() > field_height
}
