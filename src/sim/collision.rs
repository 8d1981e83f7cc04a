//! Collision detection for the ball against walls, paddle and bricks
//!
//! The ball is treated as a point tested against rectangles inflated by the
//! ball radius, so every test is a plain axis-aligned containment.

use glam::Vec2;

use super::state::Brick;
use crate::canvas::{CollisionResult, Hit, ShapeKind};
use crate::geom::{Point, Rect};

/// Surface normal of the side of `rect` the ball overlaps, if any
///
/// The side with the least penetration wins; ties prefer the vertical
/// sides (top/bottom) so a ball dropping onto a corner bounces upward.
pub fn ball_rect_collision(ball_pos: Vec2, ball_radius: f32, rect: &Rect) -> Option<Vec2> {
    let bounds = rect.inflate(ball_radius);
    if !bounds.contains(ball_pos) {
        return None;
    }

    let (left, right, top, bottom) = bounds.penetration(ball_pos);
    let vertical = top.min(bottom);
    let horizontal = left.min(right);

    let normal = if vertical <= horizontal {
        if top <= bottom {
            Vec2::new(0.0, -1.0)
        } else {
            Vec2::new(0.0, 1.0)
        }
    } else if left <= right {
        Vec2::new(-1.0, 0.0)
    } else {
        Vec2::new(1.0, 0.0)
    };
    Some(normal)
}

/// First brick (in order) the ball overlaps, with the surface normal
pub fn ball_brick_collision(
    ball_pos: Vec2,
    ball_radius: f32,
    bricks: &[Brick],
) -> Option<(usize, Vec2)> {
    bricks.iter().enumerate().find_map(|(i, brick)| {
        ball_rect_collision(ball_pos, ball_radius, &brick.rect).map(|n| (i, n))
    })
}

/// Ball overlaps the paddle
pub fn ball_paddle_collision(ball_pos: Vec2, ball_radius: f32, paddle: &Rect) -> bool {
    paddle.inflate(ball_radius).contains(ball_pos)
}

/// Normal of the left, right or top wall the ball touches
///
/// The bottom is open; see [`ball_lost`].
pub fn ball_wall_collision(ball_pos: Vec2, ball_radius: f32, playground: &Rect) -> Option<Vec2> {
    if ball_pos.x - ball_radius < playground.left() {
        Some(Vec2::new(1.0, 0.0))
    } else if ball_pos.x + ball_radius > playground.right() {
        Some(Vec2::new(-1.0, 0.0))
    } else if ball_pos.y - ball_radius < playground.top() {
        Some(Vec2::new(0.0, 1.0))
    } else {
        None
    }
}

/// Ball fully left the playground through the bottom
pub fn ball_lost(ball_pos: Vec2, ball_radius: f32, playground: &Rect) -> bool {
    ball_pos.y - ball_radius > playground.bottom()
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n, applied only when moving into the
/// surface so an overlapping ball cannot get stuck flipping back and forth.
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    let along = velocity.dot(normal);
    if along < 0.0 {
        velocity - 2.0 * along * normal
    } else {
        velocity
    }
}

/// Outgoing velocity off the paddle
///
/// The angle depends on where the ball meets the paddle: the center sends it
/// straight up, the edges up to `max_angle` to either side.
pub fn paddle_bounce(ball_pos: Vec2, paddle: &Rect, speed: f32, max_angle: f32) -> Vec2 {
    let half = (paddle.s.x / 2.0).max(f32::EPSILON);
    let t = ((ball_pos.x - paddle.center().x) / half).clamp(-1.0, 1.0);
    let angle = t * max_angle;
    Vec2::new(angle.sin(), -angle.cos()) * speed
}

/// Hit-test the pointer against bricks, then the paddle
pub fn hit_test(pointer: Point, bricks: &[Brick], paddle: &Rect) -> CollisionResult {
    let brick = bricks
        .iter()
        .enumerate()
        .filter(|(_, b)| b.rect.contains(pointer))
        .map(|(index, b)| Hit {
            kind: ShapeKind::Brick,
            index,
            sub: None,
            point: pointer,
            offset: b.rect.p - pointer,
            distance: crate::distance(b.rect.center(), pointer),
        })
        .fold(None, crate::canvas::collision::closer);
    if let Some(hit) = brick {
        return CollisionResult::Hit(hit);
    }

    if paddle.contains(pointer) {
        return CollisionResult::Hit(Hit {
            kind: ShapeKind::Paddle,
            index: 0,
            sub: None,
            point: pointer,
            offset: paddle.p - pointer,
            distance: crate::distance(paddle.center(), pointer),
        });
    }

    CollisionResult::miss()
}
