//! Pan (shift) and zoom bookkeeping
//!
//! Screen and world coordinates are related by
//! `screen = world * scale + shift`. Hit-testing and dragging happen in
//! world space, so a pan or zoom never changes which shape a pointer grabs.

use serde::{Deserialize, Serialize};

use crate::geom::Point;

/// Smallest scale `zoom_at` will produce
const MIN_SCALE: f32 = 1e-3;

/// Accumulated translation and zoom applied to all rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct View {
    /// Accumulated pan translation (screen pixels)
    pub shift: Point,
    /// Zoom factor
    pub scale: f32,
    /// True until the first pan session starts
    shift_init: bool,
    /// Shift at the start of the current pan session
    shift_start: Point,
    /// Screen position of the press that started the current session
    press: Point,
    /// Screen position of the last release
    release: Point,
    /// A pan session is in progress
    panning: bool,
}

impl Default for View {
    fn default() -> Self {
        Self {
            shift: Point::ZERO,
            scale: 1.0,
            shift_init: true,
            shift_start: Point::ZERO,
            press: Point::ZERO,
            release: Point::ZERO,
            panning: false,
        }
    }
}

impl View {
    /// Map a screen position into world space
    pub fn to_world(&self, screen: Point) -> Point {
        (screen - self.shift) / self.scale
    }

    /// Map a world position into screen space
    pub fn to_screen(&self, world: Point) -> Point {
        world * self.scale + self.shift
    }

    pub fn is_panning(&self) -> bool {
        self.panning
    }

    /// Screen position of the most recent release
    pub fn last_release(&self) -> Point {
        self.release
    }

    /// Start a pan session at screen position `press`
    pub fn begin_pan(&mut self, press: Point) {
        if self.shift_init {
            self.shift_init = false;
            self.shift = Point::ZERO;
            log::debug!("Shift initialized");
        }
        self.press = press;
        self.shift_start = self.shift;
        self.panning = true;
    }

    /// Update the shift for a pointer now at screen position `pos`
    pub fn drag_pan(&mut self, pos: Point) {
        if self.panning {
            self.shift = self.shift_start + (pos - self.press);
        }
    }

    /// Finish the pan session; the shift stays accumulated
    pub fn end_pan(&mut self, release: Point) {
        self.release = release;
        if self.panning {
            self.drag_pan(release);
            self.panning = false;
        }
    }

    /// Multiply the scale by `factor`, keeping the world point under the
    /// screen position `anchor` fixed. The result is clamped to
    /// `[min, max]` (bounds in either order, never below [`MIN_SCALE`]).
    pub fn zoom_at(&mut self, anchor: Point, factor: f32, min: f32, max: f32) {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let min = min.max(MIN_SCALE);
        let max = max.max(min);
        let new_scale = (self.scale * factor).clamp(min, max);
        if !new_scale.is_finite() || new_scale == self.scale {
            return;
        }
        let world = self.to_world(anchor);
        self.scale = new_scale;
        self.shift = anchor - world * new_scale;
        log::debug!("Zoom {:.3} at ({:.1}, {:.1})", self.scale, anchor.x, anchor.y);
    }

    /// Back to identity
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_mapping() {
        let view = View::default();
        let p = Point::new(12.0, -3.0);
        assert_eq!(view.to_world(p), p);
        assert_eq!(view.to_screen(p), p);
    }

    #[test]
    fn test_pan_accumulates_across_sessions() {
        let mut view = View::default();
        view.begin_pan(Point::new(10.0, 10.0));
        view.drag_pan(Point::new(30.0, 15.0));
        view.end_pan(Point::new(30.0, 15.0));
        assert_eq!(view.shift, Point::new(20.0, 5.0));
        assert!(!view.is_panning());

        view.begin_pan(Point::new(0.0, 0.0));
        view.drag_pan(Point::new(-5.0, 5.0));
        view.end_pan(Point::new(-5.0, 5.0));
        assert_eq!(view.shift, Point::new(15.0, 10.0));
        assert_eq!(view.last_release(), Point::new(-5.0, 5.0));
    }

    #[test]
    fn test_drag_without_session_is_ignored() {
        let mut view = View::default();
        view.drag_pan(Point::new(50.0, 50.0));
        assert_eq!(view.shift, Point::ZERO);
    }

    #[test]
    fn test_zoom_keeps_anchor_fixed() {
        let mut view = View::default();
        view.shift = Point::new(40.0, -20.0);
        let anchor = Point::new(200.0, 150.0);
        let before = view.to_world(anchor);
        view.zoom_at(anchor, 2.0, 0.1, 10.0);
        assert!((view.scale - 2.0).abs() < 1e-6);
        let after = view.to_world(anchor);
        assert!((before - after).length() < 1e-3);
    }

    #[test]
    fn test_zoom_clamped() {
        let mut view = View::default();
        for _ in 0..100 {
            view.zoom_at(Point::ZERO, 1.5, 0.5, 4.0);
        }
        assert!((view.scale - 4.0).abs() < 1e-6);
        for _ in 0..100 {
            view.zoom_at(Point::ZERO, 0.5, 0.5, 4.0);
        }
        assert!((view.scale - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_zoom_with_swapped_bounds() {
        let mut view = View::default();
        for _ in 0..100 {
            view.zoom_at(Point::new(10.0, 10.0), 1.5, 5.0, 2.0);
        }
        assert!((view.scale - 5.0).abs() < 1e-6);
        for _ in 0..100 {
            view.zoom_at(Point::new(10.0, 10.0), 0.5, 5.0, 2.0);
        }
        assert!((view.scale - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_zoom_never_reaches_zero() {
        let mut view = View::default();
        for _ in 0..100 {
            view.zoom_at(Point::new(3.0, 4.0), 0.1, 0.0, -1.0);
        }
        assert!(view.scale >= MIN_SCALE);
        let world = view.to_world(Point::new(3.0, 4.0));
        assert!(world.is_finite());
    }
}
