//! Input events delivered by the host toolkit

use crate::geom::Point;

/// Pointer button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Middle,
    Secondary,
}

impl MouseButton {
    /// Map a toolkit button number (1 = primary, 2 = middle, 3 = secondary)
    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(MouseButton::Primary),
            2 => Some(MouseButton::Middle),
            3 => Some(MouseButton::Secondary),
            _ => None,
        }
    }
}

/// Scroll direction; smooth scrolling is folded into up/down by sign
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

impl ScrollDirection {
    /// Direction from a smooth-scroll delta (negative dy scrolls up)
    pub fn from_delta(dy: f32) -> Option<Self> {
        if dy < 0.0 {
            Some(ScrollDirection::Up)
        } else if dy > 0.0 {
            Some(ScrollDirection::Down)
        } else {
            None
        }
    }
}

/// Keyboard commands understood by the canvases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Increase animation step width
    Faster,
    /// Decrease animation step width
    Slower,
    /// Reverse animation direction
    Reverse,
    /// Halt/resume the animation
    Halt,
    /// Serve the ball
    Launch,
    /// Reset pan and zoom
    ResetView,
}

impl Key {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' | '=' => Some(Key::Faster),
            '-' | '_' => Some(Key::Slower),
            'r' | 'R' => Some(Key::Reverse),
            'h' | 'H' => Some(Key::Halt),
            ' ' => Some(Key::Launch),
            '0' => Some(Key::ResetView),
            _ => None,
        }
    }
}

/// A single input event in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Press { pos: Point, button: MouseButton },
    Motion { pos: Point },
    Release { pos: Point, button: MouseButton },
    Scroll { pos: Point, direction: ScrollDirection },
    Key(Key),
}
