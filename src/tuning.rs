//! Game balance and playfield tuning
//!
//! Every gameplay constant lives here so it can be overridden with JSON.
//! Missing fields fall back to the defaults in [`crate::consts`].

use serde::Deserialize;
use thiserror::Error;

use crate::consts::*;
use crate::ms_to_ticks;

/// Errors raised while reading tuning overrides
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("tuning JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Gameplay tuning
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub field_width: f32,
    pub field_height: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    pub player_speed: f32,
    pub player_bottom_offset: f32,

    // === Projectiles ===
    pub projectile_width: f32,
    pub projectile_height: f32,
    pub projectile_speed: f32,

    // === Targets ===
    pub target_radius: f32,
    pub target_min_speed: f32,
    pub target_speed_spread: f32,

    // === Session ===
    pub base_points: u64,
    pub initial_lives: u8,

    // === Timers (ms) ===
    pub spawn_interval_ms: u32,
    pub speed_ramp_interval_ms: u32,
    pub fire_cooldown_ms: u32,

    // === Difficulty ===
    pub speed_ramp_step: f32,
    pub speed_multiplier_cap: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_speed: PLAYER_SPEED,
            player_bottom_offset: PLAYER_BOTTOM_OFFSET,

            projectile_width: PROJECTILE_WIDTH,
            projectile_height: PROJECTILE_HEIGHT,
            projectile_speed: PROJECTILE_SPEED,

            target_radius: TARGET_RADIUS,
            target_min_speed: TARGET_MIN_SPEED,
            target_speed_spread: TARGET_SPEED_SPREAD,

            base_points: BASE_POINTS,
            initial_lives: INITIAL_LIVES,

            spawn_interval_ms: SPAWN_INTERVAL_MS,
            speed_ramp_interval_ms: SPEED_RAMP_INTERVAL_MS,
            fire_cooldown_ms: FIRE_COOLDOWN_MS,

            speed_ramp_step: SPEED_RAMP_STEP,
            speed_multiplier_cap: SPEED_MULTIPLIER_CAP,
        }
    }
}

impl Tuning {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "shooting_gallery_tuning";

    /// Environment variable naming a JSON override file (native only)
    pub const ENV_VAR: &'static str = "SHOOTING_GALLERY_TUNING";

    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: "must be a positive number",
                })
            }
        }

        positive("field_width", self.field_width)?;
        positive("field_height", self.field_height)?;
        positive("player_width", self.player_width)?;
        positive("player_height", self.player_height)?;
        positive("player_speed", self.player_speed)?;
        positive("projectile_width", self.projectile_width)?;
        positive("projectile_height", self.projectile_height)?;
        positive("projectile_speed", self.projectile_speed)?;
        positive("target_radius", self.target_radius)?;
        positive("target_min_speed", self.target_min_speed)?;

        if !(self.target_speed_spread.is_finite() && self.target_speed_spread >= 0.0) {
            return Err(TuningError::Invalid {
                field: "target_speed_spread",
                reason: "must be zero or positive",
            });
        }
        if !(self.speed_ramp_step.is_finite() && self.speed_ramp_step >= 0.0) {
            return Err(TuningError::Invalid {
                field: "speed_ramp_step",
                reason: "must be zero or positive",
            });
        }
        if !(self.speed_multiplier_cap.is_finite() && self.speed_multiplier_cap >= 1.0) {
            return Err(TuningError::Invalid {
                field: "speed_multiplier_cap",
                reason: "must be at least 1.0",
            });
        }
        if self.player_width > self.field_width {
            return Err(TuningError::Invalid {
                field: "player_width",
                reason: "wider than the playfield",
            });
        }
        if self.target_radius * 2.0 >= self.field_width {
            return Err(TuningError::Invalid {
                field: "target_radius",
                reason: "targets do not fit across the playfield",
            });
        }
        if self.player_bottom_offset < 0.0 || self.player_bottom_offset > self.field_height {
            return Err(TuningError::Invalid {
                field: "player_bottom_offset",
                reason: "places the player outside the playfield",
            });
        }
        if self.initial_lives == 0 {
            return Err(TuningError::Invalid {
                field: "initial_lives",
                reason: "must be at least 1",
            });
        }
        if self.base_points > MAX_BASE_POINTS {
            return Err(TuningError::Invalid {
                field: "base_points",
                reason: "too large to score with",
            });
        }
        if self.spawn_interval_ms == 0 {
            return Err(TuningError::Invalid {
                field: "spawn_interval_ms",
                reason: "must be non-zero",
            });
        }
        if self.speed_ramp_interval_ms == 0 {
            return Err(TuningError::Invalid {
                field: "speed_ramp_interval_ms",
                reason: "must be non-zero",
            });
        }

        Ok(())
    }

    /// Ticks between target spawns
    pub fn spawn_interval_ticks(&self) -> u64 {
        ms_to_ticks(self.spawn_interval_ms)
    }

    /// Ticks between speed ramps
    pub fn speed_ramp_interval_ticks(&self) -> u64 {
        ms_to_ticks(self.speed_ramp_interval_ms)
    }

    /// Ticks a fired shot blocks the next one
    pub fn fire_cooldown_ticks(&self) -> u64 {
        ms_to_ticks(self.fire_cooldown_ms)
    }

    /// Load overrides from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning overrides from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring stored tuning: {}", e),
                }
            }
        }

        Self::default()
    }

    /// Load overrides from the file named by `SHOOTING_GALLERY_TUNING`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning overrides from {}", path);
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring tuning file {}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read tuning file {}: {}", path, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "base_points": 25, "initial_lives": 5 }"#).unwrap();
        assert_eq!(tuning.base_points, 25);
        assert_eq!(tuning.initial_lives, 5);
        assert_eq!(tuning.fire_cooldown_ms, FIRE_COOLDOWN_MS);
        assert_eq!(tuning.field_width, FIELD_WIDTH);
    }

    #[test]
    fn test_malformed_json() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Tuning::from_json(r#"{ "initial_lives": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "initial_lives",
                ..
            }
        ));

        let err = Tuning::from_json(r#"{ "speed_multiplier_cap": 0.5 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "speed_multiplier_cap",
                ..
            }
        ));

        let err = Tuning::from_json(r#"{ "field_width": 30.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { .. }));
    }

    #[test]
    fn test_huge_base_points_rejected() {
        let err = Tuning::from_json(r#"{ "base_points": 10000000000000000000 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "base_points",
                ..
            }
        ));

        let json = format!(r#"{{ "base_points": {} }}"#, MAX_BASE_POINTS);
        assert_eq!(Tuning::from_json(&json).unwrap().base_points, MAX_BASE_POINTS);
    }

    #[test]
    fn test_timer_ticks() {
        let tuning = Tuning::default();
        assert_eq!(tuning.spawn_interval_ticks(), 60);
        assert_eq!(tuning.speed_ramp_interval_ticks(), 600);
        assert_eq!(tuning.fire_cooldown_ticks(), 12);
    }
}
