//! 2D rendering module
//!
//! Rendering is a pure read of [`GameState`] through the [`Surface`] trait.
//! The browser implementation draws on a `CanvasRenderingContext2d`; the
//! recording implementation keeps draw commands for tests.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;

pub use recording::{DrawCommand, RecordingSurface};

use glam::Vec2;

use crate::sim::{GamePhase, GameState, Rect};

/// Colour palette
pub const COLOR_PLAYER: &str = "#fff";
pub const COLOR_PROJECTILE: &str = "#0f0";
pub const COLOR_TARGET: &str = "#f00";
pub const COLOR_TARGET_RIM: &str = "#900";
pub const COLOR_TEXT: &str = "#fff";

/// Game-over banner font
pub const GAME_OVER_FONT: &str = "40px Arial";
/// Rim stroke width for targets
pub const TARGET_RIM_WIDTH: f32 = 2.0;

/// The drawing operations the game needs from a display surface
pub trait Surface {
    /// Clear a `width` x `height` region at the origin
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, rect: Rect, color: &str);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: &str);
    /// Draw `text` horizontally centered on `at`
    fn fill_text_centered(&mut self, text: &str, at: Vec2, font: &str, color: &str);
}

/// Text shown once the session has ended
pub fn game_over_message(score: u64) -> String {
    format!("Game Over! Score: {}", score)
}

/// Render one complete frame
pub fn render_frame<S: Surface>(surface: &mut S, state: &GameState) {
    let width = state.tuning.field_width;
    let height = state.tuning.field_height;

    surface.clear(width, height);

    if state.phase == GamePhase::GameOver {
        surface.fill_text_centered(
            &game_over_message(state.score),
            Vec2::new(width / 2.0, height / 2.0),
            GAME_OVER_FONT,
            COLOR_TEXT,
        );
        return;
    }

    surface.fill_rect(state.player.bounds(), COLOR_PLAYER);

    for projectile in &state.projectiles {
        surface.fill_rect(projectile.bounds(), COLOR_PROJECTILE);
    }

    for target in &state.targets {
        let center = target.center();
        surface.fill_circle(center, target.radius, COLOR_TARGET);
        surface.stroke_circle(center, target.radius, TARGET_RIM_WIDTH, COLOR_TARGET_RIM);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use crate::sim::{TickInput, tick};

    #[test]
    fn test_playing_frame() {
        let mut state = GameState::new(5, Tuning::default());
        tick(
            &mut state,
            &TickInput {
                fire: true,
                ..Default::default()
            },
        );

        let mut surface = RecordingSurface::default();
        render_frame(&mut surface, &state);

        assert_eq!(
            surface.commands[0],
            DrawCommand::Clear {
                width: 800.0,
                height: 600.0
            }
        );
        assert_eq!(
            surface.commands[1],
            DrawCommand::FillRect {
                rect: state.player.bounds(),
                color: COLOR_PLAYER.to_string(),
            }
        );
        assert_eq!(surface.count_fill_rects(COLOR_PROJECTILE), 1);
        assert_eq!(surface.count_circles(COLOR_TARGET), state.targets.len());
        assert!(surface.texts().is_empty());
    }

    #[test]
    fn test_game_over_frame() {
        let mut state = GameState::new(5, Tuning::default());
        state.score = 150;
        state.phase = GamePhase::GameOver;

        let mut surface = RecordingSurface::default();
        render_frame(&mut surface, &state);

        // Clear plus the banner, no entities
        assert_eq!(surface.commands.len(), 2);
        assert_eq!(surface.texts(), vec!["Game Over! Score: 150"]);
        match &surface.commands[1] {
            DrawCommand::Text { at, font, .. } => {
                assert_eq!(*at, Vec2::new(400.0, 300.0));
                assert_eq!(font, GAME_OVER_FONT);
            }
            other => panic!("expected text, got {:?}", other),
        }
    }
}
