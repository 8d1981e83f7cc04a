//! Geometry value types shared by the canvas and the arcade
//!
//! All coordinates are world coordinates in pixels. The canvas view maps
//! them to screen space (see `canvas::view`).

pub mod fleck;
pub mod rect;
pub mod segment;

pub use fleck::Fleck;
pub use rect::Rect;
pub use segment::{Segment, SubIndex};

use serde::{Deserialize, Serialize};

/// A point in the plane
pub type Point = glam::Vec2;

/// RGB color, each channel in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const GRAY: Color = Color::new(0.5, 0.5, 0.5);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::new(0.0, 0.8, 0.2);
    pub const BLUE: Color = Color::new(0.1, 0.3, 1.0);
    pub const YELLOW: Color = Color::new(1.0, 0.9, 0.2);
    pub const ORANGE: Color = Color::new(1.0, 0.5, 0.1);

    /// Linear blend toward `other` (t = 0 gives self)
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = crate::clamp_unit(t);
        Color::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::GRAY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_lerp() {
        let c = Color::BLACK.lerp(Color::WHITE, 0.5);
        assert!((c.r - 0.5).abs() < 1e-6);
        assert!((c.g - 0.5).abs() < 1e-6);
        // Out-of-range t is clamped
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 3.0), Color::WHITE);
    }

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, 5.0);
        assert_eq!(a + b, Point::new(4.0, 7.0));
        assert_eq!(b - a, Point::new(2.0, 3.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
        assert_ne!(a, b);
    }
}
