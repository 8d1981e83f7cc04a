//! Draggable line segment with grab handles at both ends and the middle

use serde::{Deserialize, Serialize};

use super::Point;

/// Which handle of a segment was grabbed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubIndex {
    Start,
    Middle,
    End,
}

/// A line segment from `a` to `b`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    pub fn midpoint(&self) -> Point {
        (self.a + self.b) * 0.5
    }

    /// Position of a handle
    pub fn handle(&self, sub: SubIndex) -> Point {
        match sub {
            SubIndex::Start => self.a,
            SubIndex::Middle => self.midpoint(),
            SubIndex::End => self.b,
        }
    }

    /// Move a handle to `p`
    ///
    /// Moving the middle handle translates the whole segment; the end handles
    /// move only their own endpoint.
    pub fn set_handle(&mut self, sub: SubIndex, p: Point) {
        match sub {
            SubIndex::Start => self.a = p,
            SubIndex::End => self.b = p,
            SubIndex::Middle => {
                let delta = p - self.midpoint();
                self.a += delta;
                self.b += delta;
            }
        }
    }

    /// Handles in pick priority order (endpoints before the middle)
    pub fn handles(&self) -> [(SubIndex, Point); 3] {
        [
            (SubIndex::Start, self.a),
            (SubIndex::End, self.b),
            (SubIndex::Middle, self.midpoint()),
        ]
    }
}
