//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Timers are scheduled events, never wall-clock callbacks
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod input;
pub mod schedule;
pub mod state;
pub mod tick;

pub use autopilot::steer;
pub use collision::rect_circle_overlap;
pub use input::{Control, InputState};
pub use schedule::{ScheduledEvent, Scheduler, TimerEvent};
pub use state::{Circle, GamePhase, GameState, Player, Projectile, Rect, Target};
pub use tick::{TickInput, tick};
