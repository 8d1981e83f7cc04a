//! Axis-aligned rectangle (origin + size)

use serde::{Deserialize, Serialize};

use super::Point;

/// Axis-aligned rectangle with origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub p: Point,
    /// Width and height (non-negative)
    pub s: Point,
}

impl Default for Rect {
    fn default() -> Self {
        Self {
            p: Point::ZERO,
            s: Point::ONE,
        }
    }
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            p: Point::new(x, y),
            s: Point::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.p.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.p.x + self.s.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.p.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.p.y + self.s.y
    }

    pub fn center(&self) -> Point {
        self.p + self.s * 0.5
    }

    /// Axis-aligned containment, edges inclusive
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.left() && pt.x <= self.right() && pt.y >= self.top() && pt.y <= self.bottom()
    }

    /// Grow by `margin` on every side
    pub fn inflate(&self, margin: f32) -> Rect {
        Rect {
            p: self.p - Point::splat(margin),
            s: self.s + Point::splat(2.0 * margin),
        }
    }

    /// Same rectangle moved by `delta`
    pub fn translate(&self, delta: Point) -> Rect {
        Rect {
            p: self.p + delta,
            s: self.s,
        }
    }

    /// Per-side overlap of `pt` with the rectangle: (left, right, top, bottom)
    ///
    /// Each value is how far `pt` sits inside that edge. Only meaningful when
    /// `contains(pt)` holds.
    pub fn penetration(&self, pt: Point) -> (f32, f32, f32, f32) {
        (
            pt.x - self.left(),
            self.right() - pt.x,
            pt.y - self.top(),
            self.bottom() - pt.y,
        )
    }
}
