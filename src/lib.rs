//! Shooting Gallery - a falling-target canvas shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, timers, session state)
//! - `renderer`: Draws a session onto a 2D surface
//! - `platform`: Browser DOM lookup and setup errors
//! - `tuning`: Data-driven game balance
//! - `ui`: HUD change tracking

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Simulation ticks per second
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame gap fed to the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Default playfield size (overridden by the canvas size in the browser)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 30.0;
    /// Pixels per tick
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Distance from the bottom of the playfield to the player's top edge
    pub const PLAYER_BOTTOM_OFFSET: f32 = 50.0;

    /// Projectile defaults
    pub const PROJECTILE_WIDTH: f32 = 10.0;
    pub const PROJECTILE_HEIGHT: f32 = 20.0;
    pub const PROJECTILE_SPEED: f32 = 7.0;

    /// Target defaults: fall speed is `MIN + U[0,1) * SPREAD`, pixels per tick
    pub const TARGET_RADIUS: f32 = 20.0;
    pub const TARGET_MIN_SPEED: f32 = 1.0;
    pub const TARGET_SPEED_SPREAD: f32 = 2.0;

    /// Scoring and session
    pub const BASE_POINTS: u64 = 10;
    /// Largest accepted `base_points` override
    pub const MAX_BASE_POINTS: u64 = u32::MAX as u64;
    pub const INITIAL_LIVES: u8 = 3;

    /// Timers (milliseconds)
    pub const SPAWN_INTERVAL_MS: u32 = 1_000;
    pub const SPEED_RAMP_INTERVAL_MS: u32 = 10_000;
    pub const FIRE_COOLDOWN_MS: u32 = 200;

    /// Difficulty ramp
    pub const SPEED_RAMP_STEP: f32 = 0.1;
    pub const SPEED_MULTIPLIER_CAP: f32 = 2.0;
}

/// Convert a duration in milliseconds to whole simulation ticks.
///
/// Rounds up so a timer never fires early, and never returns zero.
#[inline]
pub fn ms_to_ticks(ms: u32) -> u64 {
    let ticks = (u64::from(ms) * u64::from(consts::TICK_RATE)).div_ceil(1000);
    ticks.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ms_to_ticks() {
        assert_eq!(ms_to_ticks(200), 12);
        assert_eq!(ms_to_ticks(1_000), 60);
        assert_eq!(ms_to_ticks(10_000), 600);
        // Partial ticks round up
        assert_eq!(ms_to_ticks(20), 2);
        // Never zero
        assert_eq!(ms_to_ticks(0), 1);
    }
}
