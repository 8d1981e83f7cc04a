//! Platform abstraction layer
//!
//! The host toolkit owns the window and the event loop. It translates its
//! pointer, scroll and key callbacks into [`InputEvent`]s and feeds them to
//! the canvas or the arcade.

pub mod input;

pub use input::{InputEvent, Key, MouseButton, ScrollDirection};
