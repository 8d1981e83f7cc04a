//! Toolkit-independent rendering
//!
//! Scenes are turned into a [`DisplayList`] of immediate-mode drawing
//! commands. The host replays them on its drawing surface (a cairo context,
//! an HTML canvas, ...), so nothing here depends on a graphics backend.

pub mod scene;
pub mod shapes;

pub use scene::{render_canvas, render_game};

use crate::geom::{Color, Point};

/// One immediate-mode drawing command
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    SetColor { color: Color, alpha: f32 },
    SetLineWidth(f32),
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc from `start` to `end` (radians)
    Arc { center: Point, radius: f32, start: f32, end: f32 },
    Rectangle { origin: Point, size: Point },
    /// Text centered horizontally on `pos`
    Text { pos: Point, text: String, scale: f32 },
    Stroke,
    Fill,
    Save,
    Restore,
    Translate(Point),
    Scale(f32),
    Rotate(f32),
}

/// Ordered list of drawing commands
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    cmds: Vec<DrawCmd>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cmd: DrawCmd) {
        self.cmds.push(cmd);
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmds
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    pub fn color(&mut self, color: Color) {
        self.push(DrawCmd::SetColor { color, alpha: 1.0 });
    }

    pub fn color_alpha(&mut self, color: Color, alpha: f32) {
        self.push(DrawCmd::SetColor {
            color,
            alpha: crate::clamp_unit(alpha),
        });
    }

    /// Line width compensated for the current zoom so strokes keep their
    /// on-screen thickness
    pub fn line_width(&mut self, width: f32, scale: f32) {
        let scale = if scale == 0.0 { 1.0 } else { scale };
        self.push(DrawCmd::SetLineWidth(width / scale));
    }

    /// Run `f` between a save/restore pair
    pub fn scoped(&mut self, f: impl FnOnce(&mut Self)) {
        self.push(DrawCmd::Save);
        f(self);
        self.push(DrawCmd::Restore);
    }

    /// Number of commands matching `pred`
    pub fn count(&self, pred: impl Fn(&DrawCmd) -> bool) -> usize {
        self.cmds.iter().filter(|&c| pred(c)).count()
    }
}

impl IntoIterator for DisplayList {
    type Item = DrawCmd;
    type IntoIter = std::vec::IntoIter<DrawCmd>;

    fn into_iter(self) -> Self::IntoIter {
        self.cmds.into_iter()
    }
}
