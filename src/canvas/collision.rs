//! Pointer hit-testing
//!
//! Shapes are scanned in a fixed priority order: flecks first, then segment
//! handles. Within one kind the nearest candidate wins and ties keep the
//! earlier element. The first kind with any candidate ends the scan.

use crate::geom::{Fleck, Point, Segment, SubIndex};

/// Kind of shape a hit refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Fleck,
    Segment,
    Brick,
    Paddle,
}

/// Details of a positive hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub kind: ShapeKind,
    /// Index into the collection of that kind
    pub index: usize,
    /// Grabbed handle, for segments
    pub sub: Option<SubIndex>,
    /// Pointer position at the time of the hit
    pub point: Point,
    /// Shape origin minus pointer; keeps the grab stable while dragging
    pub offset: Point,
    /// Distance from pointer to the shape's reference point
    pub distance: f32,
}

impl Hit {
    /// Where the shape origin must go for a pointer at `pointer`
    #[inline]
    pub fn origin_for(&self, pointer: Point) -> Point {
        pointer + self.offset
    }
}

/// Outcome of a hit-test
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CollisionResult {
    #[default]
    None,
    Hit(Hit),
}

impl CollisionResult {
    pub fn miss() -> Self {
        CollisionResult::None
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, CollisionResult::Hit(_))
    }

    pub fn hit(&self) -> Option<&Hit> {
        match self {
            CollisionResult::Hit(hit) => Some(hit),
            CollisionResult::None => None,
        }
    }

    pub fn kind(&self) -> Option<ShapeKind> {
        self.hit().map(|h| h.kind)
    }
}

/// Keep the closer of two candidates; `best` wins ties
pub(crate) fn closer(best: Option<Hit>, candidate: Hit) -> Option<Hit> {
    match best {
        Some(b) if b.distance <= candidate.distance => Some(b),
        _ => Some(candidate),
    }
}

/// Nearest fleck whose disc contains `pointer`
pub fn hit_fleck(pointer: Point, flecks: &[Fleck]) -> Option<Hit> {
    flecks
        .iter()
        .enumerate()
        .filter_map(|(index, fleck)| {
            let distance = fleck.distance_to(pointer);
            (distance <= fleck.r).then(|| Hit {
                kind: ShapeKind::Fleck,
                index,
                sub: None,
                point: pointer,
                offset: fleck.center() - pointer,
                distance,
            })
        })
        .fold(None, closer)
}

/// Nearest segment handle within `pick_radius` of `pointer`
pub fn hit_segment(pointer: Point, segments: &[Segment], pick_radius: f32) -> Option<Hit> {
    let mut best = None;
    for (index, segment) in segments.iter().enumerate() {
        for (sub, handle) in segment.handles() {
            let distance = crate::distance(handle, pointer);
            if distance <= pick_radius {
                best = closer(
                    best,
                    Hit {
                        kind: ShapeKind::Segment,
                        index,
                        sub: Some(sub),
                        point: pointer,
                        offset: handle - pointer,
                        distance,
                    },
                );
            }
        }
    }
    best
}

/// Hit-test the canvas shapes at `pointer`
pub fn hit_test(
    pointer: Point,
    flecks: &[Fleck],
    segments: &[Segment],
    pick_radius: f32,
) -> CollisionResult {
    if let Some(hit) = hit_fleck(pointer, flecks) {
        return CollisionResult::Hit(hit);
    }
    if let Some(hit) = hit_segment(pointer, segments, pick_radius) {
        return CollisionResult::Hit(hit);
    }
    CollisionResult::miss()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flecks() -> Vec<Fleck> {
        vec![
            Fleck::new(30.0, 30.0, 20.0),
            Fleck::new(300.0, 300.0, 50.0),
            Fleck::new(500.0, 200.0, 40.0),
        ]
    }

    fn segments() -> Vec<Segment> {
        vec![Segment::new(Point::new(100.0, 400.0), Point::new(200.0, 400.0))]
    }

    #[test]
    fn test_default_is_none() {
        let result = CollisionResult::default();
        assert!(!result.is_hit());
        assert!(result.hit().is_none());
        assert_eq!(result.kind(), None);
    }

    #[test]
    fn test_miss_outside_everything() {
        let result = hit_test(Point::new(700.0, 700.0), &flecks(), &segments(), 10.0);
        assert_eq!(result, CollisionResult::None);

        // Just outside a rim and just outside a handle's pick radius
        let result = hit_test(Point::new(30.0, 50.5), &flecks(), &segments(), 10.0);
        assert!(!result.is_hit());
        let result = hit_test(Point::new(100.0, 410.5), &flecks(), &segments(), 10.0);
        assert!(!result.is_hit());
    }

    #[test]
    fn test_center_always_hits() {
        for radius in [0.001, 1.0, 50.0] {
            let discs = [Fleck::new(12.0, -4.0, radius)];
            let result = hit_test(Point::new(12.0, -4.0), &discs, &[], 10.0);
            let hit = result.hit().expect("center must hit");
            assert_eq!(hit.kind, ShapeKind::Fleck);
            assert_eq!(hit.index, 0);
            assert_eq!(hit.offset, Point::ZERO);
        }
    }

    #[test]
    fn test_nearest_fleck_wins() {
        let discs = [Fleck::new(0.0, 0.0, 50.0), Fleck::new(20.0, 0.0, 50.0)];
        let hit = hit_test(Point::new(15.0, 0.0), &discs, &[], 10.0);
        assert_eq!(hit.hit().map(|h| h.index), Some(1));
    }

    #[test]
    fn test_tie_keeps_declaration_order() {
        let discs = [Fleck::new(-10.0, 0.0, 20.0), Fleck::new(10.0, 0.0, 20.0)];
        let hit = hit_test(Point::ZERO, &discs, &[], 10.0);
        assert_eq!(hit.hit().map(|h| h.index), Some(0));
    }

    #[test]
    fn test_fleck_before_segment() {
        // Segment handle sits inside the fleck
        let discs = [Fleck::new(100.0, 400.0, 15.0)];
        let hit = hit_test(Point::new(101.0, 400.0), &discs, &segments(), 10.0);
        assert_eq!(hit.kind(), Some(ShapeKind::Fleck));
    }

    #[test]
    fn test_segment_records_endpoint() {
        let hit = hit_test(Point::new(197.0, 402.0), &[], &segments(), 10.0);
        let hit = hit.hit().expect("end handle");
        assert_eq!(hit.kind, ShapeKind::Segment);
        assert_eq!(hit.sub, Some(SubIndex::End));
        assert_eq!(hit.offset, Point::new(3.0, -2.0));

        let hit = hit_test(Point::new(100.0, 395.0), &[], &segments(), 10.0);
        assert_eq!(hit.hit().and_then(|h| h.sub), Some(SubIndex::Start));

        let hit = hit_test(Point::new(150.0, 400.0), &[], &segments(), 10.0);
        assert_eq!(hit.hit().and_then(|h| h.sub), Some(SubIndex::Middle));
    }

    #[test]
    fn test_endpoint_preferred_over_middle_on_tie() {
        // Short segment: start and middle are 5 apart, pointer halfway between
        let segs = [Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0))];
        let hit = hit_test(Point::new(2.5, 0.0), &[], &segs, 10.0);
        assert_eq!(hit.hit().and_then(|h| h.sub), Some(SubIndex::Start));
    }
}
