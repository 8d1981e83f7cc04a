//! Paddle-and-brick arcade simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable brick order
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{ball_brick_collision, ball_paddle_collision, ball_rect_collision, reflect_velocity};
pub use state::{Ball, BallState, Brick, GamePhase, GameState};
pub use tick::{TickInput, generate_bricks, tick};

use crate::canvas::CollisionResult;
use crate::geom::Point;

impl GameState {
    /// Hit-test a pointer position against bricks, then the paddle
    pub fn hit_test(&self, pointer: Point) -> CollisionResult {
        collision::hit_test(pointer, &self.bricks, &self.paddle)
    }
}
