//! Idle/demo mode: the computer plays the game
//!
//! Chases the lowest target (the one closest to costing a life) and shoots
//! whenever it sits under it.

use super::state::GameState;
use super::tick::TickInput;

/// Horizontal slack before the autopilot bothers moving (pixels)
const DEAD_ZONE: f32 = 3.0;

/// Produce input for the next tick
pub fn steer(state: &GameState) -> TickInput {
    let Some(target) = state
        .targets
        .iter()
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
    else {
        return TickInput::default();
    };

    let offset = target.center().x - state.player.center_x();
    let aligned = offset.abs() <= target.radius;

    TickInput {
        move_left: offset < -DEAD_ZONE,
        move_right: offset > DEAD_ZONE,
        fire: aligned && state.fire_ready,
    }
}
