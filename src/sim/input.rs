//! Held-key tracking for the three game controls

use super::tick::TickInput;

/// Logical controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    MoveLeft,
    MoveRight,
    Fire,
}

impl Control {
    /// Map a DOM `KeyboardEvent.code` to a control
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" | "KeyA" => Some(Control::MoveLeft),
            "ArrowRight" | "KeyD" => Some(Control::MoveRight),
            "Space" => Some(Control::Fire),
            _ => None,
        }
    }
}

/// Which controls are down, plus a latched fire press.
///
/// Fire is edge triggered: holding the key (or OS auto-repeat) produces one
/// request, not a stream.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub fire_held: bool,
    fire_pressed: bool,
}

impl InputState {
    pub fn press(&mut self, control: Control) {
        match control {
            Control::MoveLeft => self.left = true,
            Control::MoveRight => self.right = true,
            Control::Fire => {
                if !self.fire_held {
                    self.fire_pressed = true;
                }
                self.fire_held = true;
            }
        }
    }

    pub fn release(&mut self, control: Control) {
        match control {
            Control::MoveLeft => self.left = false,
            Control::MoveRight => self.right = false,
            Control::Fire => self.fire_held = false,
        }
    }

    /// Input for the next tick
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            move_left: self.left,
            move_right: self.right,
            fire: self.fire_pressed,
        }
    }

    /// Forget the latched fire press once a tick has seen it
    pub fn clear_edges(&mut self) {
        self.fire_pressed = false;
    }

    /// Release everything (focus loss, restart)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
