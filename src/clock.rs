//! Animation clock
//!
//! A repeating timer advances a bounded phase in [0, 1] by a configurable
//! step. The phase drives rotations and translations used purely for visual
//! feedback. [`FixedStep`] turns irregular frame times into whole timer
//! ticks.

use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::consts::*;
use crate::platform::Key;

/// How the phase behaves at the 0/1 boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimMode {
    /// Clamp at the boundary and reverse direction
    #[default]
    Bounce,
    /// Jump to the opposite end (continuous rotation)
    Wrap,
    /// Toggle between 0 and 1 on every tick
    Vibrate,
}

/// Bounded animation phase with adjustable step width
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationClock {
    phase: f32,
    step: f32,
    step_min: f32,
    step_max: f32,
    running: bool,
    /// Direction flag: true moves the phase toward 0
    reverse: bool,
    pub mode: AnimMode,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(ANIM_STEP, ANIM_STEP_MIN, ANIM_STEP_MAX, AnimMode::default())
    }
}

impl AnimationClock {
    /// Create a clock; bounds are sorted and the step is clamped into them
    pub fn new(step: f32, step_min: f32, step_max: f32, mode: AnimMode) -> Self {
        let (step_min, step_max) = if step_min <= step_max {
            (step_min, step_max)
        } else {
            (step_max, step_min)
        };
        Self {
            phase: 0.0,
            step: step.clamp(step_min, step_max),
            step_min,
            step_max,
            running: true,
            reverse: true,
            mode,
        }
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_reversed(&self) -> bool {
        self.reverse
    }

    /// Advance by one timer tick. Returns true when the phase changed.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        let before = self.phase;
        match self.mode {
            AnimMode::Bounce => {
                if self.reverse {
                    self.phase -= self.step;
                    if self.phase <= 0.0 {
                        self.phase = 0.0;
                        self.reverse = false;
                    }
                } else {
                    self.phase += self.step;
                    if self.phase >= 1.0 {
                        self.phase = 1.0;
                        self.reverse = true;
                    }
                }
            }
            AnimMode::Wrap => {
                self.phase = if self.reverse {
                    if self.phase <= self.step { 1.0 } else { self.phase - self.step }
                } else if self.phase >= 1.0 - self.step {
                    0.0
                } else {
                    self.phase + self.step
                };
            }
            AnimMode::Vibrate => {
                self.phase = if self.phase > 0.0 { 0.0 } else { 1.0 };
            }
        }
        self.phase = crate::clamp_unit(self.phase);
        self.phase != before
    }

    /// Widen the step (capped at the maximum)
    pub fn faster(&mut self) {
        self.step = (self.step * ANIM_STEP_UP).min(self.step_max);
    }

    /// Narrow the step (floored at the minimum)
    pub fn slower(&mut self) {
        self.step = (self.step * ANIM_STEP_DOWN).max(self.step_min);
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    pub fn toggle_direction(&mut self) {
        self.reverse = !self.reverse;
    }

    /// Apply an animation key. Returns true if the key was consumed.
    pub fn apply_key(&mut self, key: Key) -> bool {
        match key {
            Key::Faster => self.faster(),
            Key::Slower => self.slower(),
            Key::Reverse => self.toggle_direction(),
            Key::Halt => self.toggle_running(),
            _ => return false,
        }
        log::debug!(
            "Animation: step={:.4} running={} reverse={}",
            self.step,
            self.running,
            self.reverse
        );
        true
    }

    /// Phase as an angle in radians
    pub fn rotation(&self) -> f32 {
        self.phase * TAU
    }

    /// Phase scaled to a translation distance
    pub fn translation(&self, amplitude: f32) -> f32 {
        self.phase * amplitude
    }
}

/// Fixed-interval timer driven by elapsed wall time
#[derive(Debug, Clone)]
pub struct FixedStep {
    interval: f32,
    accumulator: f32,
    max_substeps: u32,
    connected: bool,
}

impl FixedStep {
    /// Timer firing every `interval_ms` milliseconds
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval: interval_ms.max(1) as f32 / 1000.0,
            accumulator: 0.0,
            max_substeps: MAX_SUBSTEPS,
            connected: true,
        }
    }

    /// Interval in seconds
    pub fn interval(&self) -> f32 {
        self.interval
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Stop the timer for good; no tick is reported afterwards
    pub fn disconnect(&mut self) {
        if self.connected {
            log::debug!("Animation timer disconnected");
        }
        self.connected = false;
        self.accumulator = 0.0;
    }

    /// Add `elapsed` seconds and return how many ticks are due
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        if !self.connected {
            return 0;
        }
        // Clamp long stalls (window hidden, debugger) to a few intervals
        let elapsed = elapsed.clamp(0.0, self.interval * (self.max_substeps + 1) as f32);
        self.accumulator += elapsed;

        let mut ticks = 0;
        while self.accumulator >= self.interval && ticks < self.max_substeps {
            self.accumulator -= self.interval;
            ticks += 1;
        }
        ticks
    }

    /// Advance and tick `clock` once per due interval.
    /// Returns true if the clock phase changed (redraw needed).
    pub fn drive(&mut self, elapsed: f32, clock: &mut AnimationClock) -> bool {
        let mut changed = false;
        for _ in 0..self.advance(elapsed) {
            changed |= clock.tick();
        }
        changed
    }
}

impl Drop for FixedStep {
    fn drop(&mut self) {
        self.disconnect();
    }
}
