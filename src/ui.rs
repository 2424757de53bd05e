//! HUD state tracking
//!
//! The score, multiplier and lives outputs are owned by the page; the driver
//! only writes them when a value actually changed.

use crate::sim::{GamePhase, GameState};

/// One of the externally owned text outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudField {
    Score,
    Multiplier,
    Lives,
}

/// Values shown on the HUD at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudSnapshot {
    pub score: u64,
    pub multiplier: u32,
    pub lives: u8,
}

impl HudSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            score: state.score,
            multiplier: state.multiplier,
            lives: state.lives,
        }
    }

    pub fn text(&self, field: HudField) -> String {
        match field {
            HudField::Score => self.score.to_string(),
            HudField::Multiplier => self.multiplier.to_string(),
            HudField::Lives => self.lives.to_string(),
        }
    }

    /// Fields whose text differs from `previous` (all of them if there is none)
    pub fn changes(&self, previous: Option<&HudSnapshot>) -> Vec<(HudField, String)> {
        [HudField::Score, HudField::Multiplier, HudField::Lives]
            .into_iter()
            .filter(|&field| previous.is_none_or(|prev| prev.text(field) != self.text(field)))
            .map(|field| (field, self.text(field)))
            .collect()
    }
}

/// The restart control is only offered once the session has ended
pub fn restart_visible(phase: GamePhase) -> bool {
    phase == GamePhase::GameOver
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;

    #[test]
    fn test_first_sync_writes_everything() {
        let state = GameState::new(1, Tuning::default());
        let snapshot = HudSnapshot::capture(&state);
        let changes = snapshot.changes(None);
        assert_eq!(
            changes,
            vec![
                (HudField::Score, "0".to_string()),
                (HudField::Multiplier, "1".to_string()),
                (HudField::Lives, "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_only_changed_fields() {
        let before = HudSnapshot {
            score: 10,
            multiplier: 2,
            lives: 3,
        };
        let after = HudSnapshot {
            score: 30,
            multiplier: 3,
            lives: 3,
        };
        let changes = after.changes(Some(&before));
        assert_eq!(
            changes,
            vec![
                (HudField::Score, "30".to_string()),
                (HudField::Multiplier, "3".to_string()),
            ]
        );
        assert!(after.changes(Some(&after)).is_empty());
    }

    #[test]
    fn test_restart_visibility() {
        assert!(!restart_visible(GamePhase::Playing));
        assert!(restart_visible(GamePhase::GameOver));
    }
}
