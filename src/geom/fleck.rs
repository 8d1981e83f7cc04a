//! Fleck: a small draggable disc

use serde::{Deserialize, Serialize};

use super::Point;
use crate::distance;

/// A draggable circular target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fleck {
    pub x: f32,
    pub y: f32,
    pub r: f32,
}

impl Fleck {
    pub const fn new(x: f32, y: f32, r: f32) -> Self {
        Self { x, y, r }
    }

    /// Disc center (also the drag origin)
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Move the center to `p`, keeping the radius
    #[inline]
    pub fn set_center(&mut self, p: Point) {
        self.x = p.x;
        self.y = p.y;
    }

    /// Distance from `p` to the center
    #[inline]
    pub fn distance_to(&self, p: Point) -> f32 {
        distance(self.center(), p)
    }

    /// True if `p` lies on or inside the disc
    pub fn contains(&self, p: Point) -> bool {
        self.distance_to(p) <= self.r
    }

    /// Grow or shrink the radius, never below `min_radius`
    pub fn resize(&mut self, delta: f32, min_radius: f32) {
        self.r = (self.r + delta).max(min_radius);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_boundary() {
        let f = Fleck::new(10.0, 10.0, 5.0);
        assert!(f.contains(Point::new(10.0, 10.0)));
        assert!(f.contains(Point::new(15.0, 10.0))); // on the rim
        assert!(!f.contains(Point::new(15.1, 10.0)));
    }

    #[test]
    fn test_resize_floor() {
        let mut f = Fleck::new(0.0, 0.0, 4.0);
        f.resize(-10.0, 2.0);
        assert_eq!(f.r, 2.0);
        f.resize(3.0, 2.0);
        assert_eq!(f.r, 5.0);
    }
}
