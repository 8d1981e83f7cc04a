//! Drawing primitives built from display-list commands

use std::f32::consts::TAU;

use super::{DisplayList, DrawCmd};
use crate::geom::{Point, Rect};

/// Filled circle
pub fn circle(list: &mut DisplayList, center: Point, radius: f32) {
    list.push(DrawCmd::Arc {
        center,
        radius,
        start: 0.0,
        end: TAU,
    });
    list.push(DrawCmd::Fill);
}

/// Circle outline
pub fn ring(list: &mut DisplayList, center: Point, radius: f32) {
    list.push(DrawCmd::Arc {
        center,
        radius,
        start: 0.0,
        end: TAU,
    });
    list.push(DrawCmd::Stroke);
}

/// Stroked straight line
pub fn line(list: &mut DisplayList, a: Point, b: Point) {
    list.push(DrawCmd::MoveTo(a));
    list.push(DrawCmd::LineTo(b));
    list.push(DrawCmd::Stroke);
}

/// Stroked polyline through `points`; fewer than two points draw nothing
pub fn line_strip(list: &mut DisplayList, points: &[Point]) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    if rest.is_empty() {
        return;
    }
    list.push(DrawCmd::MoveTo(*first));
    for p in rest {
        list.push(DrawCmd::LineTo(*p));
    }
    list.push(DrawCmd::Stroke);
}

/// Filled closed polygon
pub fn polygon(list: &mut DisplayList, points: &[Point]) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    list.push(DrawCmd::MoveTo(*first));
    for p in rest {
        list.push(DrawCmd::LineTo(*p));
    }
    list.push(DrawCmd::LineTo(*first));
    list.push(DrawCmd::Fill);
}

/// Filled rectangle
pub fn rectangle(list: &mut DisplayList, rect: &Rect) {
    list.push(DrawCmd::Rectangle {
        origin: rect.p,
        size: rect.s,
    });
    list.push(DrawCmd::Fill);
}

/// Rectangle outline
pub fn frame(list: &mut DisplayList, rect: &Rect) {
    list.push(DrawCmd::Rectangle {
        origin: rect.p,
        size: rect.s,
    });
    list.push(DrawCmd::Stroke);
}

/// Centered text label
pub fn text(list: &mut DisplayList, pos: Point, text: impl Into<String>, scale: f32) {
    list.push(DrawCmd::Text {
        pos,
        text: text.into(),
        scale,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_strip_needs_two_points() {
        let mut list = DisplayList::new();
        line_strip(&mut list, &[]);
        line_strip(&mut list, &[Point::ZERO]);
        assert!(list.is_empty());

        line_strip(&mut list, &[Point::ZERO, Point::ONE, Point::X]);
        assert_eq!(list.len(), 4);
        assert_eq!(list.commands()[3], DrawCmd::Stroke);
    }

    #[test]
    fn test_polygon_closes_path() {
        let mut list = DisplayList::new();
        polygon(&mut list, &[Point::ZERO, Point::X, Point::Y]);
        assert_eq!(list.commands()[3], DrawCmd::LineTo(Point::ZERO));
        assert_eq!(list.commands()[4], DrawCmd::Fill);
    }

    #[test]
    fn test_circle_is_full_arc() {
        let mut list = DisplayList::new();
        circle(&mut list, Point::ONE, 3.0);
        match &list.commands()[0] {
            DrawCmd::Arc { start, end, .. } => {
                assert_eq!(*start, 0.0);
                assert_eq!(*end, TAU);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
