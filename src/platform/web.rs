//! Browser DOM bindings

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlElement, Window};

use super::*;
use crate::sim::GameState;
use crate::ui::{HudField, HudSnapshot, restart_visible};

/// Every page element the game talks to
pub struct Dom {
    pub window: Window,
    pub document: Document,
    pub canvas: HtmlCanvasElement,
    pub ctx: CanvasRenderingContext2d,
    pub score: Element,
    pub multiplier: Element,
    pub lives: Element,
    pub restart: HtmlElement,
}

impl Dom {
    /// Look up the canvas, its 2D context and the HUD elements
    pub fn lookup() -> Result<Self, SetupError> {
        let window = web_sys::window().ok_or(SetupError::NoWindow)?;
        let document = window.document().ok_or(SetupError::NoDocument)?;

        check_required(|id| document.get_element_by_id(id).is_some())?;
        let element = |id: &'static str| {
            document
                .get_element_by_id(id)
                .ok_or_else(|| SetupError::MissingElements(vec![id]))
        };

        let canvas: HtmlCanvasElement = element(CANVAS_ID)?
            .dyn_into()
            .map_err(|_| SetupError::NotACanvas(CANVAS_ID))?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or(SetupError::NoContext(CANVAS_ID))?
            .dyn_into()
            .map_err(|_| SetupError::NoContext(CANVAS_ID))?;

        let score = element(SCORE_ID)?;
        let multiplier = element(MULTIPLIER_ID)?;
        let lives = element(LIVES_ID)?;
        let restart: HtmlElement = element(RESTART_ID)?
            .dyn_into()
            .map_err(|_| SetupError::NotAnHtmlElement(RESTART_ID))?;

        Ok(Self {
            window,
            document,
            canvas,
            ctx,
            score,
            multiplier,
            lives,
            restart,
        })
    }

    /// Logical playfield size
    pub fn canvas_size(&self) -> (f32, f32) {
        (self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn hud_element(&self, field: HudField) -> &Element {
        match field {
            HudField::Score => &self.score,
            HudField::Multiplier => &self.multiplier,
            HudField::Lives => &self.lives,
        }
    }

    /// Write changed HUD values and return the snapshot that is now shown
    pub fn sync_hud(&self, state: &GameState, shown: Option<&HudSnapshot>) -> HudSnapshot {
        let snapshot = HudSnapshot::capture(state);
        for (field, text) in snapshot.changes(shown) {
            self.hud_element(field).set_text_content(Some(&text));
        }
        snapshot
    }

    /// Show the restart button on game over, hide it otherwise
    pub fn sync_restart(&self, state: &GameState) {
        let display = if restart_visible(state.phase) {
            "block"
        } else {
            "none"
        };
        if let Err(e) = self.restart.style().set_property("display", display) {
            log::warn!("Cannot toggle restart button: {:?}", e);
        }
    }
}

/// Surface a fatal setup error to the console and the user
pub fn report_fatal(err: &SetupError) {
    log::error!("Game setup failed: {}", err);
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message("Game setup failed. Check console.");
    }
}
