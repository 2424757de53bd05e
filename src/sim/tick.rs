//! Fixed timestep simulation tick
//!
//! Advances a session by one tick: timers, player, projectiles, targets,
//! then projectile/target collisions.

use super::collision::rect_circle_overlap;
use super::schedule::TimerEvent;
use super::state::{GamePhase, GameState, Projectile, Target};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Fire request (already edge detected)
    pub fire: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Nothing moves, spawns or scores until an explicit restart
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    run_timers(state);

    // Player
    let direction = f32::from(i8::from(input.move_right) - i8::from(input.move_left));
    state.player.step(direction, state.tuning.field_width);

    if input.fire && state.fire_ready {
        state.fire();
    }

    // Projectiles
    for projectile in &mut state.projectiles {
        projectile.advance();
    }
    state.projectiles.retain(|p| !p.is_above_field());

    // Targets
    for target in &mut state.targets {
        target.advance();
    }
    let field_height = state.tuning.field_height;
    let (missed, falling): (Vec<Target>, Vec<Target>) = std::mem::take(&mut state.targets)
        .into_iter()
        .partition(|t| t.is_below_field(field_height));
    state.targets = falling;

    for target in &missed {
        state.multiplier = 1;
        state.lives = state.lives.saturating_sub(1);
        log::debug!("Target {} missed, lives: {}", target.id, state.lives);
    }
    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over in session {}: score {}",
            state.epoch,
            state.score
        );
        return;
    }

    resolve_hits(state);
}

/// Apply every timer event that has come due for the live session
fn run_timers(state: &mut GameState) {
    while let Some(event) = state.scheduler.pop_due(state.time_ticks, state.epoch) {
        match event {
            TimerEvent::FireCooldownExpired => state.fire_ready = true,
            TimerEvent::SpeedRamp => {
                state.ramp_speed();
                let due = state.time_ticks + state.tuning.speed_ramp_interval_ticks();
                state.scheduler.schedule(due, state.epoch, TimerEvent::SpeedRamp);
            }
            TimerEvent::SpawnTarget => {
                state.spawn_target();
                let due = state.time_ticks + state.tuning.spawn_interval_ticks();
                state.scheduler.schedule(due, state.epoch, TimerEvent::SpawnTarget);
            }
        }
    }
}

/// Match projectiles against targets and rebuild both containers.
///
/// Targets are scanned in id order; each takes the lowest-id unused
/// projectile that overlaps it. A projectile or target scores at most once.
fn resolve_hits(state: &mut GameState) {
    let projectiles = std::mem::take(&mut state.projectiles);
    let targets = std::mem::take(&mut state.targets);

    let mut spent = vec![false; projectiles.len()];
    let mut survivors = Vec::with_capacity(targets.len());

    for target in targets {
        let circle = target.circle();
        let hit = projectiles
            .iter()
            .enumerate()
            .find(|(i, p)| !spent[*i] && rect_circle_overlap(&p.bounds(), &circle))
            .map(|(i, _)| i);

        match hit {
            Some(i) => {
                spent[i] = true;
                let points = state
                    .tuning
                    .base_points
                    .saturating_mul(u64::from(state.multiplier));
                state.score = state.score.saturating_add(points);
                state.multiplier = state.multiplier.saturating_add(1);
                log::debug!(
                    "Hit target {} with projectile {}! Score: {}, multiplier: {}",
                    target.id,
                    projectiles[i].id,
                    state.score,
                    state.multiplier
                );
            }
            None => survivors.push(target),
        }
    }

    state.targets = survivors;
    state.projectiles = projectiles
        .into_iter()
        .zip(spent)
        .filter_map(|(p, used)| (!used).then_some(p))
        .collect::<Vec<Projectile>>();
}
