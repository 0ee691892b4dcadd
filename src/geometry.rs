//! Axis-aligned rectangles and the two collision primitives everything else
//! is built on.

use glam::Vec2;

use crate::config::{VIRTUAL_HEIGHT, VIRTUAL_WIDTH};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect { x, y, width, height }
    }

    /// A rectangle of the given size whose centre is `center`.
    pub fn centered_at(center: Vec2, width: f32, height: f32) -> Self {
        Rect::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Same size, top-left moved to `(x, y)`.
    pub fn at(&self, x: f32, y: f32) -> Self {
        Rect { x, y, ..*self }
    }

    pub fn translated(&self, offset: Vec2) -> Self {
        self.at(self.x + offset.x, self.y + offset.y)
    }

    /// Keep the rectangle inside `bounds`. Assumes it fits.
    pub fn clamp_within(&mut self, bounds: &Rect) {
        self.x = self.x.max(bounds.x).min(bounds.right() - self.width);
        self.y = self.y.max(bounds.y).min(bounds.bottom() - self.height);
    }

    /// True when the rectangle lies entirely beyond any edge of `bounds`.
    pub fn is_fully_outside(&self, bounds: &Rect) -> bool {
        self.right() < bounds.x
            || self.x > bounds.right()
            || self.bottom() < bounds.y
            || self.y > bounds.bottom()
    }

    pub fn is_within(&self, bounds: &Rect) -> bool {
        self.x >= bounds.x
            && self.y >= bounds.y
            && self.right() <= bounds.right()
            && self.bottom() <= bounds.bottom()
    }
}

/// The virtual playfield every entity lives in.
pub const fn playfield() -> Rect {
    Rect::new(0.0, 0.0, VIRTUAL_WIDTH, VIRTUAL_HEIGHT)
}

/// Unit vector pointing from `from` to `to`, via `atan2`. Coincident points
/// yield `(1, 0)` rather than NaN.
pub fn heading_towards(from: Vec2, to: Vec2) -> Vec2 {
    let delta = to - from;
    let angle = delta.y.atan2(delta.x);
    Vec2::new(angle.cos(), angle.sin())
}

/// Strict AABB overlap: rectangles that merely share an edge do not collide.
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

/// Smallest axial push that moves `a` out of `b`.
///
/// The axis with the smaller overlap wins (ties go to y). The push points
/// away from `b`'s centre. Non-overlapping rectangles yield `Vec2::ZERO`.
pub fn minimum_translation_vector(a: &Rect, b: &Rect) -> Vec2 {
    let overlap_x = a.right().min(b.right()) - a.x.max(b.x);
    let overlap_y = a.bottom().min(b.bottom()) - a.y.max(b.y);
    if overlap_x <= 0.0 || overlap_y <= 0.0 {
        return Vec2::ZERO;
    }

    let (ca, cb) = (a.center(), b.center());
    if overlap_x < overlap_y {
        let dx = if ca.x < cb.x { -overlap_x } else { overlap_x };
        Vec2::new(dx, 0.0)
    } else {
        let dy = if ca.y < cb.y { -overlap_y } else { overlap_y };
        Vec2::new(0.0, dy)
    }
}

/// Push `rect` out of `other` along the MTV. Returns whether it moved.
pub fn push_out(rect: &mut Rect, other: &Rect) -> bool {
    let mtv = minimum_translation_vector(rect, other);
    if mtv == Vec2::ZERO {
        return false;
    }
    *rect = rect.translated(mtv);
    true
}
