//! Canvas settings and preferences
//!
//! Stored as JSON next to the binary (or wherever the host points). Every
//! field has a default, so partial files are fine.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::clock::{AnimMode, AnimationClock, FixedStep};
use crate::consts::*;
use crate::geom::{Color, Rect};

/// Canvas and arcade settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Picking ===
    /// Radius around segment handles that still grabs them
    pub pick_radius: f32,
    /// Pointer color while hovering a fleck
    pub hover_color: Color,

    // === Trail ===
    /// Record and draw the pointer trail
    pub trails: bool,
    /// Number of trail points kept
    pub trail_length: usize,

    // === Animation ===
    pub anim_mode: AnimMode,
    pub anim_step: f32,
    pub anim_step_min: f32,
    pub anim_step_max: f32,
    /// Timer interval (ms)
    pub anim_interval_ms: u32,

    // === View ===
    /// Zoom multiplier per scroll notch
    pub zoom_step: f32,
    pub zoom_min: f32,
    pub zoom_max: f32,
    /// Fleck radius change per scroll notch
    pub fleck_radius_step: f32,
    pub fleck_min_radius: f32,

    // === Arcade ===
    pub playground_width: f32,
    pub playground_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_radius: f32,
    /// Ball speed (pixels per second)
    pub ball_speed: f32,
    pub brick_rows: u32,
    pub brick_cols: u32,
    /// Seed for launch jitter and brick colors
    pub seed: u64,

    // === Accessibility ===
    /// Reduced motion (animation starts halted)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pick_radius: PICK_RADIUS,
            hover_color: Color::RED,

            trails: true,
            trail_length: TRAIL_LENGTH,

            anim_mode: AnimMode::Bounce,
            anim_step: ANIM_STEP,
            anim_step_min: ANIM_STEP_MIN,
            anim_step_max: ANIM_STEP_MAX,
            anim_interval_ms: ANIM_INTERVAL_MS,

            zoom_step: ZOOM_STEP,
            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,
            fleck_radius_step: FLECK_RADIUS_STEP,
            fleck_min_radius: FLECK_MIN_RADIUS,

            playground_width: PLAYGROUND_WIDTH,
            playground_height: PLAYGROUND_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
            seed: 0x5EED,

            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Invalid settings in {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Cannot read {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Playground bounds for the arcade
    pub fn playground(&self) -> Rect {
        Rect::new(0.0, 0.0, self.playground_width, self.playground_height)
    }

    /// Animation clock configured from these settings
    pub fn animation_clock(&self) -> AnimationClock {
        let mut clock = AnimationClock::new(
            self.anim_step,
            self.anim_step_min,
            self.anim_step_max,
            self.anim_mode,
        );
        if self.reduced_motion {
            clock.toggle_running();
        }
        clock
    }

    /// Timer driving the animation clock
    pub fn animation_timer(&self) -> FixedStep {
        FixedStep::new(self.anim_interval_ms)
    }

    /// Effective trail capacity (0 when trails are off)
    pub fn effective_trail_length(&self) -> usize {
        if self.trails { self.trail_length } else { 0 }
    }
}
