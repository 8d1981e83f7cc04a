//! Pointer trail and hover coloring

use serde::{Deserialize, Serialize};

use crate::geom::{Color, Point};

/// Bounded history of pointer positions (newest first)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trail {
    points: Vec<Point>,
    max_len: usize,
}

impl Trail {
    pub fn new(max_len: usize) -> Self {
        Self {
            points: Vec::with_capacity(max_len),
            max_len,
        }
    }

    /// Record a pointer position, dropping the oldest beyond capacity
    pub fn record(&mut self, p: Point) {
        if self.max_len == 0 {
            return;
        }
        self.points.insert(0, p);
        if self.points.len() > self.max_len {
            self.points.pop();
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn newest(&self) -> Option<Point> {
        self.points.first().copied()
    }
}

/// Pointer color: `hover` while over a shape, gray otherwise
pub fn pointer_color(over_shape: bool, hover: Color) -> Color {
    if over_shape { hover } else { Color::GRAY }
}
