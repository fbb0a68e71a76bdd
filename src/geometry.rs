//! Playfield geometry: bounds checks, clamped movement and square overlap.

use serde::{Deserialize, Serialize};

/// A point on the playfield. Mutated in place by movement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle, origin at the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Square of side `size` centred on `center`.
    pub fn square_around(center: Position, size: f32) -> Self {
        let half = size / 2.0;
        Self {
            x: center.x as f32 - half,
            y: center.y as f32 - half,
            width: size,
            height: size,
        }
    }

    /// Bounding-box test. Touching edges count as overlapping.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.x + self.width < other.x
            || self.x > other.x + other.width
            || self.y + self.height < other.y
            || self.y > other.y + other.height)
    }
}

/// The visible area every entity is clamped to. Fixed for a whole session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: i32,
    pub height: i32,
}

impl Playfield {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Both bounds are inclusive.
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        (0..=self.width).contains(&pos.x) && (0..=self.height).contains(&pos.y)
    }

    /// Applies `delta` to `pos`, then clamps each axis independently.
    pub fn clamp_move(&self, pos: &mut Position, delta: Position) {
        pos.x = pos.x.saturating_add(delta.x).clamp(0, self.width);
        pos.y = pos.y.saturating_add(delta.y).clamp(0, self.height);
    }

    /// Clamps a freshly created position into the playfield.
    pub fn clamped(&self, pos: Position) -> Position {
        let mut pos = pos;
        self.clamp_move(&mut pos, Position::default());
        pos
    }
}
