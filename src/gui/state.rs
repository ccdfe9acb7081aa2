//! Overlay state management.
//!
//! Holds the latest outcome polled from the assistant loop and the time of the
//! last manual reset.

use std::time::{Duration, Instant};

use crate::assistant::CycleOutcome;

/// How long the "New Shoe Started" notice stays up after a click.
const RESET_NOTICE: Duration = Duration::from_secs(2);

#[derive(Debug, Default)]
pub struct OverlayState {
    /// Latest outcome from the assistant loop.
    pub latest: Option<CycleOutcome>,
    /// When the New Shoe button was last clicked.
    pub shoe_reset_at: Option<Instant>,
    /// Whether the assistant loop is still alive.
    pub loop_running: bool,
}

impl OverlayState {
    /// Main line of the overlay.
    pub fn headline(&self, now: Instant) -> String {
        if self
            .shoe_reset_at
            .is_some_and(|at| now.duration_since(at) < RESET_NOTICE)
        {
            return "New Shoe Started".to_string();
        }
        match &self.latest {
            Some(outcome) => outcome.status_text(),
            None => "Waiting for game...".to_string(),
        }
    }

    /// Secondary line: the hand the advice is for.
    pub fn detail(&self) -> Option<String> {
        match &self.latest {
            Some(CycleOutcome::Advice(advice)) => Some(format!(
                "Player {} ({} {}) vs {} - {}",
                advice
                    .player_cards
                    .iter()
                    .map(|card| card.to_string())
                    .collect::<Vec<_>>()
                    .join("-"),
                if advice.player.ace_high { "soft" } else { "hard" },
                advice.player.total,
                advice.dealer_upcard,
                advice.observed_at.format("%H:%M:%S")
            )),
            _ if !self.loop_running => Some("Assistant stopped".to_string()),
            _ => None,
        }
    }
}
