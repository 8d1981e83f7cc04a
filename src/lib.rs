//! Fleck Canvas - interactive 2D canvas toys
//!
//! Core modules:
//! - `geom`: Value types (points, flecks, segments, rectangles, colors)
//! - `canvas`: Draggable flecks and segments, pointer trail, pan/zoom
//! - `clock`: Animation clock and fixed-interval timer
//! - `sim`: Paddle-and-brick arcade simulation
//! - `renderer`: Toolkit-independent display list
//! - `platform`: Input events delivered by the host toolkit

pub mod canvas;
pub mod clock;
pub mod geom;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Canvas configuration constants
pub mod consts {
    /// Animation timer interval in milliseconds
    pub const ANIM_INTERVAL_MS: u32 = 20;
    /// Default animation step width per tick
    pub const ANIM_STEP: f32 = 0.0025;
    /// Minimal animation step width
    pub const ANIM_STEP_MIN: f32 = 0.0025;
    /// Maximal animation step width
    pub const ANIM_STEP_MAX: f32 = 0.025;
    /// Step multiplier applied by `faster`
    pub const ANIM_STEP_UP: f32 = 1.1;
    /// Step multiplier applied by `slower`
    pub const ANIM_STEP_DOWN: f32 = 0.9;

    /// Maximum timer ticks delivered per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Pick radius around segment handles
    pub const PICK_RADIUS: f32 = 10.0;
    /// Pointer trail length
    pub const TRAIL_LENGTH: usize = 64;

    /// Zoom defaults
    pub const ZOOM_STEP: f32 = 1.1;
    pub const ZOOM_MIN: f32 = 0.1;
    pub const ZOOM_MAX: f32 = 10.0;

    /// Smallest fleck radius reachable by scrolling
    pub const FLECK_MIN_RADIUS: f32 = 2.0;
    /// Radius change per scroll notch
    pub const FLECK_RADIUS_STEP: f32 = 2.0;

    /// Arcade defaults
    pub const PLAYGROUND_WIDTH: f32 = 640.0;
    pub const PLAYGROUND_HEIGHT: f32 = 480.0;
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 12.0;
    /// Gap between paddle bottom and playground bottom
    pub const PADDLE_MARGIN: f32 = 24.0;
    pub const BALL_RADIUS: f32 = 6.0;
    /// Ball speed in pixels per second
    pub const BALL_SPEED: f32 = 300.0;
    /// Max launch deviation from vertical (radians)
    pub const LAUNCH_JITTER: f32 = 0.35;
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICK_COLS: u32 = 10;
    pub const BRICK_HEIGHT: f32 = 18.0;
    pub const BRICK_GAP: f32 = 4.0;
    pub const BRICK_TOP: f32 = 40.0;

    /// Fixed simulation timestep for the arcade (matches the animation timer)
    pub const SIM_DT: f32 = 0.020;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

/// Clamp a value into [0, 1]
#[inline]
pub fn clamp_unit(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}
