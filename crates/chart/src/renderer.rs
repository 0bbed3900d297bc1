//! Drawing surface abstraction.

use pattern::PatternKind;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in canvas coordinates, origin at the top left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A surface the chart host paints on.
///
/// Calls arrive in paint order: `clear`, then pattern bands, then bars, then
/// lines. Implementations only need to honour that order.
pub trait Renderer {
    /// Drop everything painted so far.
    fn clear(&mut self);

    /// Paint one value bar.
    fn draw_bar(&mut self, bar: Rect, color: &str);

    /// Paint a background band covering a detected pattern.
    fn draw_pattern(&mut self, band: Rect, color: &str, kind: PatternKind);

    /// Paint a straight line segment.
    fn draw_line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, width: f64);
}

/// One recorded renderer call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear,
    Bar {
        rect: Rect,
        color: String,
    },
    Pattern {
        rect: Rect,
        color: String,
        kind: PatternKind,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        color: String,
        width: f64,
    },
}

/// Renderer that keeps the calls of the latest frame as [`DrawCommand`]s.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
    frames: usize,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands since the last `clear`, starting with that `Clear`.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of times `clear` was called, one per paint pass.
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.frames += 1;
    }

    fn draw_bar(&mut self, bar: Rect, color: &str) {
        self.commands.push(DrawCommand::Bar {
            rect: bar,
            color: color.to_string(),
        });
    }

    fn draw_pattern(&mut self, band: Rect, color: &str, kind: PatternKind) {
        self.commands.push(DrawCommand::Pattern {
            rect: band,
            color: color.to_string(),
            kind,
        });
    }

    fn draw_line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, width: f64) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color: color.to_string(),
            width,
        });
    }
}
