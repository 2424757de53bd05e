//! Canvas 2D surface (browser only)

use std::f64::consts::TAU;

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use super::Surface;
use crate::sim::Rect;

impl Surface for CanvasRenderingContext2d {
    fn clear(&mut self, width: f32, height: f32) {
        self.clear_rect(0.0, 0.0, f64::from(width), f64::from(height));
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.set_fill_style_str(color);
        CanvasRenderingContext2d::fill_rect(
            self,
            f64::from(rect.pos.x),
            f64::from(rect.pos.y),
            f64::from(rect.size.x),
            f64::from(rect.size.y),
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.begin_path();
        if let Err(e) = self.arc(
            f64::from(center.x),
            f64::from(center.y),
            f64::from(radius),
            0.0,
            TAU,
        ) {
            log::warn!("arc failed: {:?}", e);
        }
        self.set_fill_style_str(color);
        self.fill();
        self.close_path();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: &str) {
        self.begin_path();
        if let Err(e) = self.arc(
            f64::from(center.x),
            f64::from(center.y),
            f64::from(radius),
            0.0,
            TAU,
        ) {
            log::warn!("arc failed: {:?}", e);
        }
        self.set_line_width(f64::from(line_width));
        self.set_stroke_style_str(color);
        self.stroke();
        self.close_path();
    }

    fn fill_text_centered(&mut self, text: &str, at: Vec2, font: &str, color: &str) {
        self.set_fill_style_str(color);
        self.set_font(font);
        self.set_text_align("center");
        if let Err(e) = self.fill_text(text, f64::from(at.x), f64::from(at.y)) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }
}
