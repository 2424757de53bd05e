//! Platform abstraction layer
//!
//! Browser setup: locating the canvas, its 2D context and the HUD elements
//! the page must provide. A missing piece is fatal.

use thiserror::Error;

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Canvas the game draws on
pub const CANVAS_ID: &str = "gameCanvas";
/// HUD outputs
pub const SCORE_ID: &str = "score";
pub const MULTIPLIER_ID: &str = "multiplier";
pub const LIVES_ID: &str = "lives";
/// Restart button shown on game over
pub const RESTART_ID: &str = "playAgain";

/// Every element id the page must provide
pub const REQUIRED_IDS: [&str; 5] = [CANVAS_ID, SCORE_ID, MULTIPLIER_ID, LIVES_ID, RESTART_ID];

/// Startup failures; the game does not run in a degraded mode
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("missing DOM elements: {}", .0.join(", "))]
    MissingElements(Vec<&'static str>),
    #[error("#{0} is not a <canvas> element")]
    NotACanvas(&'static str),
    #[error("#{0} is not an HTML element")]
    NotAnHtmlElement(&'static str),
    #[error("2D context unavailable on #{0}")]
    NoContext(&'static str),
}

/// Report which of the required ids `is_present` does not find
pub fn check_required(is_present: impl Fn(&str) -> bool) -> Result<(), SetupError> {
    let missing: Vec<&'static str> = REQUIRED_IDS
        .into_iter()
        .filter(|id| !is_present(id))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(SetupError::MissingElements(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_present() {
        assert_eq!(check_required(|_| true), Ok(()));
    }

    #[test]
    fn test_reports_every_missing_element() {
        let err = check_required(|id| id == CANVAS_ID || id == LIVES_ID).unwrap_err();
        assert_eq!(
            err,
            SetupError::MissingElements(vec![SCORE_ID, MULTIPLIER_ID, RESTART_ID])
        );
        assert_eq!(
            err.to_string(),
            "missing DOM elements: score, multiplier, playAgain"
        );
    }
}
