//! Display lists for the fleck canvas and the arcade

use glam::Vec2;

use super::{DisplayList, DrawCmd, shapes};
use crate::canvas::{CanvasState, ShapeKind, Trail};
use crate::clock::AnimationClock;
use crate::geom::{Color, Point, SubIndex};
use crate::sim::{GamePhase, GameState};

/// Fleck fill colors, cycled by index
const FLECK_COLORS: [Color; 4] = [
    Color::new(0.2, 0.6, 1.0),
    Color::new(1.0, 0.6, 0.2),
    Color::new(0.4, 0.8, 0.4),
    Color::new(0.8, 0.4, 0.8),
];

const HANDLE_RADIUS: f32 = 4.0;
const LINE_WIDTH: f32 = 2.0;
/// Blend toward white for a grabbed fleck
const GRAB_HIGHLIGHT: f32 = 0.4;
/// Alpha steps a trail is drawn in
const TRAIL_BANDS: usize = 4;

/// Fading polyline through the trail (newest band most opaque)
fn trail(list: &mut DisplayList, trail: &Trail, color: Color, scale: f32) {
    let points = trail.points();
    if points.len() < 2 {
        return;
    }
    let band = (points.len() - 1).div_ceil(TRAIL_BANDS);
    list.line_width(LINE_WIDTH, scale);
    for (i, start) in (0..points.len() - 1).step_by(band).enumerate() {
        let end = (start + band + 1).min(points.len());
        let alpha = (1.0 - i as f32 / TRAIL_BANDS as f32) * 0.8;
        list.color_alpha(color, alpha);
        shapes::line_strip(list, &points[start..end]);
    }
}

/// Upward arrow above the served ball
fn launch_arrow(list: &mut DisplayList, ball: Point, radius: f32) {
    let tip = ball - Vec2::new(0.0, radius * 4.0);
    let base = ball - Vec2::new(0.0, radius * 2.0);
    shapes::polygon(
        list,
        &[
            tip,
            base + Vec2::new(radius, 0.0),
            base - Vec2::new(radius, 0.0),
        ],
    );
}

/// Small dot circling `center` at the clock's rotation angle
fn spin_marker(list: &mut DisplayList, center: Point, orbit: f32, clock: &AnimationClock, size: f32) {
    let angle = clock.rotation();
    let pos = center + Vec2::from_angle(angle) * orbit;
    shapes::circle(list, pos, size);
}

/// Render the fleck canvas in world space under its view transform
pub fn render_canvas(state: &CanvasState) -> DisplayList {
    let mut list = DisplayList::new();
    let scale = state.view.scale;
    let grabbed = state.collision.hit().copied();

    list.scoped(|list| {
        list.push(DrawCmd::Translate(state.view.shift));
        list.push(DrawCmd::Scale(scale));

        // Trail under everything else
        trail(list, &state.trail, Color::GRAY, scale);

        for (i, fleck) in state.flecks.iter().enumerate() {
            let is_grabbed =
                grabbed.is_some_and(|h| h.kind == ShapeKind::Fleck && h.index == i);
            let fill = FLECK_COLORS[i % FLECK_COLORS.len()];
            list.color(if is_grabbed { fill.lerp(Color::WHITE, GRAB_HIGHLIGHT) } else { fill });
            shapes::circle(list, fleck.center(), fleck.r);

            list.color(if is_grabbed { Color::RED } else { Color::BLACK });
            list.line_width(if is_grabbed { 2.0 * LINE_WIDTH } else { LINE_WIDTH }, scale);
            shapes::ring(list, fleck.center(), fleck.r);

            list.color(Color::WHITE);
            spin_marker(list, fleck.center(), fleck.r * 0.7, &state.clock, fleck.r * 0.15);
        }

        for (i, segment) in state.segments.iter().enumerate() {
            list.color(Color::BLACK);
            list.line_width(LINE_WIDTH, scale);
            shapes::line(list, segment.a, segment.b);

            let grabbed_sub = grabbed
                .filter(|h| h.kind == ShapeKind::Segment && h.index == i)
                .and_then(|h| h.sub);
            for sub in [SubIndex::Start, SubIndex::Middle, SubIndex::End] {
                let handle = segment.handle(sub);
                if grabbed_sub == Some(sub) {
                    list.color(Color::RED);
                    shapes::circle(list, handle, HANDLE_RADIUS / scale);
                } else {
                    list.color(Color::GRAY);
                    shapes::ring(list, handle, HANDLE_RADIUS / scale);
                }
            }
        }

        list.color(state.pointer_color);
        shapes::circle(list, state.pointer, HANDLE_RADIUS / scale);
    });

    list
}

/// Render the arcade; `clock` drives the ball's spin marker
pub fn render_game(state: &GameState, clock: &AnimationClock) -> DisplayList {
    let mut list = DisplayList::new();

    list.color(Color::GRAY);
    list.line_width(LINE_WIDTH, 1.0);
    shapes::frame(&mut list, &state.playground);

    for brick in &state.bricks {
        list.color(brick.color);
        shapes::rectangle(&mut list, &brick.rect);
    }

    list.color(Color::WHITE);
    shapes::rectangle(&mut list, &state.paddle);

    trail(&mut list, &state.ball.trail, Color::YELLOW, 1.0);

    let ball = &state.ball;
    list.color(Color::WHITE);
    shapes::circle(&mut list, ball.pos, ball.radius);
    list.color(Color::BLACK);
    spin_marker(&mut list, ball.pos, ball.radius * 0.5, clock, ball.radius * 0.25);
    if matches!(state.phase, GamePhase::Serve | GamePhase::Cleared) {
        list.color(Color::YELLOW);
        launch_arrow(&mut list, ball.pos, ball.radius);
    }

    let pg = &state.playground;
    list.color(Color::GRAY);
    shapes::text(
        &mut list,
        Point::new(pg.center().x, pg.top() + 16.0),
        format!(
            "bricks {}  cleared {}  lost {}",
            state.bricks.len(),
            state.bricks_cleared,
            state.balls_lost
        ),
        1.0,
    );
    let banner = match state.phase {
        GamePhase::Paused => Some("paused"),
        GamePhase::Cleared => Some("cleared - click to play again"),
        GamePhase::Serve | GamePhase::Playing => None,
    };
    if let Some(banner) = banner {
        shapes::text(&mut list, pg.center(), banner, 2.0);
    }

    list
}
