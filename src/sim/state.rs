//! Arcade state and core simulation types

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::canvas::Trail;
use crate::consts::*;
use crate::geom::{Color, Point, Rect};
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball rides on the paddle, waiting for launch input
    Serve,
    /// Ball is in play
    Playing,
    /// Every brick is gone; the next launch lays out a fresh grid
    Cleared,
    /// Game is paused
    Paused,
}

/// Ball state - attached to paddle or free-moving
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BallState {
    /// Ball sits on the paddle at a horizontal offset from its center
    Attached { offset: f32 },
    /// Ball is free-moving
    Free,
}

/// Number of trail points kept for the ball
pub const BALL_TRAIL_LENGTH: usize = 16;

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Point,
    pub vel: Point,
    pub radius: f32,
    pub state: BallState,
    /// Recent positions (newest first), for rendering
    pub trail: Trail,
}

impl Ball {
    pub fn new(radius: f32) -> Self {
        Self {
            pos: Point::ZERO,
            vel: Point::ZERO,
            radius,
            state: BallState::Attached { offset: 0.0 },
            trail: Trail::new(BALL_TRAIL_LENGTH),
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self.state, BallState::Free)
    }

    /// Put the ball back on the paddle
    pub fn attach(&mut self, paddle: &Rect) {
        self.state = BallState::Attached { offset: 0.0 };
        self.vel = Point::ZERO;
        self.trail.clear();
        self.update_attached(paddle);
    }

    /// Follow the paddle while attached
    pub fn update_attached(&mut self, paddle: &Rect) {
        if let BallState::Attached { offset } = self.state {
            self.pos = Point::new(paddle.center().x + offset, paddle.top() - self.radius - 1.0);
        }
    }

    /// Launch straight up, deviated by `angle` radians (positive is rightward)
    pub fn launch(&mut self, speed: f32, angle: f32) {
        if let BallState::Attached { .. } = self.state {
            self.vel = Point::new(angle.sin(), -angle.cos()) * speed;
            self.state = BallState::Free;
        }
    }
}

/// A brick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub id: u32,
    pub rect: Rect,
    pub color: Color,
}

/// Brick palette, one color per row
pub const BRICK_COLORS: [Color; 6] = [
    Color::RED,
    Color::ORANGE,
    Color::YELLOW,
    Color::GREEN,
    Color::BLUE,
    Color::new(0.6, 0.2, 0.8),
];

/// Complete arcade state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub phase: GamePhase,
    /// Phase to return to after unpausing
    resume_phase: GamePhase,
    /// Playground bounds
    pub playground: Rect,
    pub paddle: Rect,
    pub ball: Ball,
    /// Active bricks (stable order)
    pub bricks: Vec<Brick>,
    /// Bricks are laid out lazily on the first tick
    pub bricks_initialized: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub bricks_cleared: u32,
    pub balls_lost: u32,
    /// Ball speed (pixels per second)
    pub ball_speed: f32,
    pub brick_rows: u32,
    pub brick_cols: u32,
    next_id: u32,
}

impl GameState {
    pub fn new(settings: &Settings) -> Self {
        let playground = settings.playground();
        let paddle = Rect::new(
            playground.center().x - settings.paddle_width / 2.0,
            playground.bottom() - PADDLE_MARGIN - settings.paddle_height,
            settings.paddle_width,
            settings.paddle_height,
        );
        let mut ball = Ball::new(settings.ball_radius);
        ball.update_attached(&paddle);

        Self {
            seed: settings.seed,
            rng: Pcg32::seed_from_u64(settings.seed),
            phase: GamePhase::Serve,
            resume_phase: GamePhase::Serve,
            playground,
            paddle,
            ball,
            bricks: Vec::new(),
            bricks_initialized: false,
            time_ticks: 0,
            bricks_cleared: 0,
            balls_lost: 0,
            ball_speed: settings.ball_speed,
            brick_rows: settings.brick_rows,
            brick_cols: settings.brick_cols,
            next_id: 1,
        }
    }

    /// Allocate a new brick ID
    pub fn next_brick_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Random launch angle within the jitter bound
    pub fn launch_angle(&mut self) -> f32 {
        self.rng.random_range(-LAUNCH_JITTER..=LAUNCH_JITTER)
    }

    /// Random palette index for a brick row
    pub fn row_color(&mut self) -> Color {
        BRICK_COLORS[self.rng.random_range(0..BRICK_COLORS.len())]
    }

    /// Change the playground (e.g. on resize); keeps the paddle inside
    pub fn set_playground(&mut self, playground: Rect) {
        self.playground = playground;
        self.paddle.p.y = playground.bottom() - PADDLE_MARGIN - self.paddle.s.y;
        let x = self.paddle.center().x;
        super::tick::move_paddle(self, x);
        self.ball.update_attached(&self.paddle);
    }

    /// Enter or leave pause
    pub fn toggle_pause(&mut self) {
        if self.phase == GamePhase::Paused {
            self.phase = self.resume_phase;
        } else {
            self.resume_phase = self.phase;
            self.phase = GamePhase::Paused;
        }
    }
}
