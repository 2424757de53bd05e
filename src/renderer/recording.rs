//! Surface that records draw calls instead of drawing
//!
//! Used by tests and by the native headless runner.

use glam::Vec2;

use super::Surface;
use crate::sim::Rect;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f32,
        height: f32,
    },
    FillRect {
        rect: Rect,
        color: String,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: String,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        line_width: f32,
        color: String,
    },
    Text {
        text: String,
        at: Vec2,
        font: String,
        color: String,
    },
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Filled rectangles drawn in `color`
    pub fn count_fill_rects(&self, color: &str) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { color: drawn, .. } if drawn == color))
            .count()
    }

    /// Filled circles drawn in `color`
    pub fn count_circles(&self, color: &str) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { color: drawn, .. } if drawn == color))
            .count()
    }

    /// All text drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        // A cleared frame starts a new recording
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            color: color.to_string(),
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color: color.to_string(),
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: &str) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            line_width,
            color: color.to_string(),
        });
    }

    fn fill_text_centered(&mut self, text: &str, at: Vec2, font: &str, color: &str) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            font: font.to_string(),
            color: color.to_string(),
        });
    }
}
