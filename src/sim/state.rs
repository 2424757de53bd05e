//! Game state and core simulation types
//!
//! Everything a session needs lives in [`GameState`]: entities, counters,
//! the seeded RNG and the timer schedule. Positions are in playfield pixels
//! with the origin at the top-left corner and y growing downward.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::schedule::{Scheduler, TimerEvent};
use crate::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended, waiting for an explicit restart
    GameOver,
}

/// Axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }
}

/// Circle (center + radius)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// The player's shooter
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal pixels per tick
    pub speed: f32,
}

impl Player {
    /// Player centered horizontally near the bottom of the playfield
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(
                tuning.field_width / 2.0 - tuning.player_width / 2.0,
                tuning.field_height - tuning.player_bottom_offset,
            ),
            size: Vec2::new(tuning.player_width, tuning.player_height),
            speed: tuning.player_speed,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Move horizontally by `direction` steps (-1 left, +1 right), staying on screen
    pub fn step(&mut self, direction: f32, field_width: f32) {
        let max_x = (field_width - self.size.x).max(0.0);
        self.pos.x = (self.pos.x + direction * self.speed).clamp(0.0, max_x);
    }

    /// Top-left position for a projectile of `projectile_size` leaving the barrel
    pub fn muzzle(&self, projectile_size: Vec2) -> Vec2 {
        Vec2::new(
            self.pos.x + self.size.x / 2.0 - projectile_size.x / 2.0,
            self.pos.y,
        )
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }
}

/// A shot travelling straight up
#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Upward pixels per tick
    pub speed: f32,
    /// Tick the shot was fired on
    pub fired_at: u64,
}

impl Projectile {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn advance(&mut self) {
        self.pos.y -= self.speed;
    }

    /// True once the nose of the shot has crossed the top edge
    pub fn is_above_field(&self) -> bool {
        self.pos.y < 0.0
    }
}

/// A falling target
#[derive(Debug, Clone)]
pub struct Target {
    pub id: u32,
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    pub radius: f32,
    /// Downward pixels per tick (already scaled by the speed multiplier)
    pub speed: f32,
}

impl Target {
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.radius)
    }

    pub fn circle(&self) -> Circle {
        Circle::new(self.center(), self.radius)
    }

    pub fn advance(&mut self) {
        self.pos.y += self.speed;
    }

    /// True once the target has passed the bottom edge
    pub fn is_below_field(&self, field_height: f32) -> bool {
        self.pos.y > field_height
    }
}

/// Complete session state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Balance values the session was started with
    pub tuning: Tuning,
    /// Session counter; bumped by every reset
    pub epoch: u32,
    /// Simulation tick counter (keeps running across resets)
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    pub score: u64,
    /// Score factor, >= 1
    pub multiplier: u32,
    pub lives: u8,
    /// Fall speed factor for newly spawned targets
    pub speed_multiplier: f32,
    /// Cleared by a shot, set again when the cooldown expires
    pub fire_ready: bool,
    /// Pending timer events
    pub scheduler: Scheduler,
    pub player: Player,
    /// Active projectiles (ascending id)
    pub projectiles: Vec<Projectile>,
    /// Active targets (ascending id)
    pub targets: Vec<Target>,
    rng: Pcg32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new session with the given seed and tuning
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let player = Player::new(&tuning);
        let mut state = Self {
            seed,
            epoch: 0,
            time_ticks: 0,
            phase: GamePhase::Playing,
            score: 0,
            multiplier: 1,
            lives: tuning.initial_lives,
            speed_multiplier: 1.0,
            fire_ready: true,
            scheduler: Scheduler::default(),
            player,
            projectiles: Vec::new(),
            targets: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
            tuning,
        };

        state.reset();
        state
    }

    /// Reinitialize the session in place.
    ///
    /// Bumps the epoch so every timer scheduled by the previous session is
    /// discarded when it comes due, then arms fresh spawn/ramp timers and
    /// drops the first target.
    pub fn reset(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.multiplier = 1;
        self.lives = self.tuning.initial_lives;
        self.speed_multiplier = 1.0;
        self.fire_ready = true;
        self.player = Player::new(&self.tuning);
        self.projectiles.clear();
        self.targets.clear();

        let now = self.time_ticks;
        self.scheduler.schedule(
            now + self.tuning.spawn_interval_ticks(),
            self.epoch,
            TimerEvent::SpawnTarget,
        );
        self.scheduler.schedule(
            now + self.tuning.speed_ramp_interval_ticks(),
            self.epoch,
            TimerEvent::SpeedRamp,
        );

        log::info!("Session {} started (lives {})", self.epoch, self.lives);
        self.spawn_target();
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Drop a new target at a random column with a randomized fall speed
    pub fn spawn_target(&mut self) {
        let radius = self.tuning.target_radius;
        let max_x = self.tuning.field_width - radius * 2.0;
        let x = if max_x > 0.0 {
            self.rng.random_range(0.0..max_x)
        } else {
            0.0
        };
        let speed = (self.tuning.target_min_speed
            + self.rng.random::<f32>() * self.tuning.target_speed_spread)
            * self.speed_multiplier;

        let id = self.next_entity_id();
        self.targets.push(Target {
            id,
            pos: Vec2::new(x, 0.0),
            radius,
            speed,
        });
        log::debug!("Target {} spawned at x={:.1}, speed={:.2}", id, x, speed);
    }

    /// Fire a projectile from the player's muzzle and start the cooldown
    pub fn fire(&mut self) {
        let size = Vec2::new(self.tuning.projectile_width, self.tuning.projectile_height);
        let id = self.next_entity_id();
        self.projectiles.push(Projectile {
            id,
            pos: self.player.muzzle(size),
            size,
            speed: self.tuning.projectile_speed,
            fired_at: self.time_ticks,
        });

        self.fire_ready = false;
        self.scheduler.schedule(
            self.time_ticks + self.tuning.fire_cooldown_ticks(),
            self.epoch,
            TimerEvent::FireCooldownExpired,
        );
        log::debug!("Projectile {} fired", id);
    }

    /// Raise the fall speed factor for future targets, up to the cap
    pub fn ramp_speed(&mut self) {
        self.speed_multiplier =
            (self.speed_multiplier + self.tuning.speed_ramp_step).min(self.tuning.speed_multiplier_cap);
        log::debug!("Speed multiplier: {:.2}", self.speed_multiplier);
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let state = GameState::new(7, Tuning::default());
        assert_eq!(state.epoch, 1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.multiplier, 1);
        assert_eq!(state.lives, 3);
        assert_eq!(state.speed_multiplier, 1.0);
        assert!(state.fire_ready);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.targets.len(), 1);
        assert_eq!(state.targets[0].pos.y, 0.0);
        assert_eq!(state.player.pos, Vec2::new(375.0, 550.0));
    }

    #[test]
    fn test_reset_restores_initial_values() {
        let mut state = GameState::new(7, Tuning::default());
        state.score = 940;
        state.multiplier = 12;
        state.lives = 0;
        state.phase = GamePhase::GameOver;
        state.speed_multiplier = 1.7;
        state.fire_ready = false;
        state.player.pos.x = 0.0;
        state.fire();
        state.spawn_target();

        state.reset();

        assert_eq!(state.epoch, 2);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.multiplier, 1);
        assert_eq!(state.lives, 3);
        assert_eq!(state.speed_multiplier, 1.0);
        assert!(state.fire_ready);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.targets.len(), 1);
        assert_eq!(state.player.pos.x, 375.0);
    }

    #[test]
    fn test_player_clamped_to_field() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        for _ in 0..200 {
            player.step(-1.0, tuning.field_width);
        }
        assert_eq!(player.pos.x, 0.0);
        for _ in 0..200 {
            player.step(1.0, tuning.field_width);
        }
        assert_eq!(player.pos.x, tuning.field_width - tuning.player_width);
    }

    #[test]
    fn test_muzzle_is_centered() {
        let player = Player::new(&Tuning::default());
        let muzzle = player.muzzle(Vec2::new(10.0, 20.0));
        assert_eq!(muzzle, Vec2::new(395.0, 550.0));
    }

    #[test]
    fn test_spawned_targets_in_range() {
        let mut state = GameState::new(42, Tuning::default());
        for _ in 0..500 {
            state.spawn_target();
        }
        for target in &state.targets {
            assert!(target.pos.x >= 0.0);
            assert!(target.pos.x < 800.0 - 40.0);
            assert!(target.speed >= 1.0 && target.speed <= 3.0);
        }
    }

    #[test]
    fn test_spawn_speed_scales_with_multiplier() {
        let mut state = GameState::new(42, Tuning::default());
        state.targets.clear();
        state.speed_multiplier = 2.0;
        for _ in 0..100 {
            state.spawn_target();
        }
        assert!(state.targets.iter().all(|t| t.speed >= 2.0 && t.speed <= 6.0));
    }

    #[test]
    fn test_ramp_speed_caps() {
        let mut state = GameState::new(1, Tuning::default());
        for _ in 0..50 {
            state.ramp_speed();
        }
        assert_eq!(state.speed_multiplier, 2.0);
    }
}
