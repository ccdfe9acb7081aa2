//! One observation cycle: recognize, count, evaluate, advise.

use chrono::{DateTime, Local};
use std::fmt;

use crate::assistant::config::AssistantConfig;
use crate::counting::{decide_hand, evaluate, BetPolicy, CardSymbol, CountTracker, Decision, HandValue};
use crate::recognition::{RecognitionSource, RegionRole};

/// Why a cycle produced no decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitReason {
    /// Nothing recognized in either region
    NoCards,
    /// Recognition failed and nothing usable was read
    RecognitionFailed,
    /// Fewer than two player cards visible
    PlayerHandIncomplete,
    /// No dealer upcard visible
    NoDealerCard,
    /// Count was just reset
    NewShoe,
}

impl fmt::Display for WaitReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaitReason::NoCards => write!(f, "Waiting for game..."),
            WaitReason::RecognitionFailed => write!(f, "Waiting (recognition failed)"),
            WaitReason::PlayerHandIncomplete => write!(f, "Waiting for player cards"),
            WaitReason::NoDealerCard => write!(f, "Waiting for dealer card"),
            WaitReason::NewShoe => write!(f, "New Shoe Started"),
        }
    }
}

/// A play recommendation for the hand on the table.
#[derive(Debug, Clone, PartialEq)]
pub struct Advice {
    pub bet: u32,
    pub decision: Decision,
    pub running_count: i32,
    pub true_count: f64,
    pub player_cards: Vec<CardSymbol>,
    pub player: HandValue,
    pub dealer_upcard: CardSymbol,
    pub observed_at: DateTime<Local>,
}

/// Result of one observation cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    Advice(Advice),
    Waiting {
        reason: WaitReason,
        bet: u32,
        running_count: i32,
        true_count: f64,
    },
}

impl CycleOutcome {
    pub fn bet(&self) -> u32 {
        match self {
            CycleOutcome::Advice(advice) => advice.bet,
            CycleOutcome::Waiting { bet, .. } => *bet,
        }
    }

    pub fn running_count(&self) -> i32 {
        match self {
            CycleOutcome::Advice(advice) => advice.running_count,
            CycleOutcome::Waiting { running_count, .. } => *running_count,
        }
    }

    pub fn true_count(&self) -> f64 {
        match self {
            CycleOutcome::Advice(advice) => advice.true_count,
            CycleOutcome::Waiting { true_count, .. } => *true_count,
        }
    }

    /// One-line summary for the overlay and the log.
    pub fn status_text(&self) -> String {
        match self {
            CycleOutcome::Advice(advice) => format!(
                "Bet: ${} | {} | RC: {} | TC: {:.1}",
                advice.bet, advice.decision, advice.running_count, advice.true_count
            ),
            CycleOutcome::Waiting {
                reason,
                bet,
                running_count,
                true_count,
            } => format!(
                "{} | Bet: ${} | RC: {} | TC: {:.1}",
                reason, bet, running_count, true_count
            ),
        }
    }
}

/// Cards seen in one region on the previous cycle.
#[derive(Debug, Default)]
struct SeenCards {
    last: Vec<CardSymbol>,
}

impl SeenCards {
    /// Returns the cards that were not visible last cycle.
    ///
    /// A hand that grew keeps its old prefix, so only the suffix is new. A
    /// shorter non-empty read that matches the start of the last one is a
    /// dropped card, not a new round: nothing is new and the longer hand is
    /// remembered. Any other change is treated as a new round and every card
    /// is new.
    fn update(&mut self, current: &[CardSymbol]) -> Vec<CardSymbol> {
        if !current.is_empty() && self.last.starts_with(current) {
            return Vec::new();
        }
        let fresh = if current.starts_with(&self.last) {
            current[self.last.len()..].to_vec()
        } else {
            current.to_vec()
        };
        self.last = current.to_vec();
        fresh
    }
}

/// Owns the count for the current shoe and turns observations into advice.
pub struct Advisor {
    tracker: CountTracker,
    bet_policy: BetPolicy,
    player_seen: SeenCards,
    dealer_seen: SeenCards,
}

impl Advisor {
    pub fn new(tracker: CountTracker, bet_policy: BetPolicy) -> Self {
        Self {
            tracker,
            bet_policy,
            player_seen: SeenCards::default(),
            dealer_seen: SeenCards::default(),
        }
    }

    pub fn from_config(config: &AssistantConfig) -> Self {
        let bet_policy = config.bet_policy();
        tracing::info!(
            decks = config.initial_decks,
            tiers = ?bet_policy.tiers(),
            "Advisor ready"
        );
        Self::new(config.count_tracker(), bet_policy)
    }

    pub fn tracker(&self) -> &CountTracker {
        &self.tracker
    }

    /// Starts a new shoe. Cards still on the table belong to the old shoe
    /// and are not counted again.
    pub fn reset(&mut self) {
        self.tracker.reset();
        tracing::info!("New shoe: count reset");
    }

    /// Runs one observation cycle against `source`.
    pub fn cycle(&mut self, source: &mut dyn RecognitionSource) -> CycleOutcome {
        source.next_cycle();
        let player = read_region(source, RegionRole::Player);
        let dealer = read_region(source, RegionRole::Dealer);
        let failed = player.is_none() || dealer.is_none();

        // A failed region keeps its memory so the same cards are not recounted
        // once it reads again.
        let fresh_player = player
            .as_deref()
            .map(|cards| self.player_seen.update(cards))
            .unwrap_or_default();
        let fresh_dealer = dealer
            .as_deref()
            .map(|cards| self.dealer_seen.update(cards))
            .unwrap_or_default();
        self.tracker.observe(&fresh_player);
        self.tracker.observe(&fresh_dealer);

        if !fresh_player.is_empty() || !fresh_dealer.is_empty() {
            tracing::debug!(
                new_cards = fresh_player.len() + fresh_dealer.len(),
                running_count = self.tracker.running_count(),
                "count updated"
            );
        }

        let player = player.unwrap_or_default();
        let dealer = dealer.unwrap_or_default();

        if player.is_empty() && dealer.is_empty() {
            let reason = if failed {
                WaitReason::RecognitionFailed
            } else {
                WaitReason::NoCards
            };
            return self.waiting(reason);
        }
        if player.len() < 2 {
            return self.waiting(WaitReason::PlayerHandIncomplete);
        }
        let Some(&dealer_upcard) = dealer.first() else {
            return self.waiting(WaitReason::NoDealerCard);
        };

        let true_count = self.tracker.true_count();
        let value = evaluate(&player);
        let decision = decide_hand(&player, dealer_upcard, true_count);
        tracing::debug!(
            total = value.total,
            soft = value.soft,
            dealer = %dealer_upcard,
            %decision,
            "hand evaluated"
        );

        CycleOutcome::Advice(Advice {
            bet: self.bet_policy.bet_size(true_count),
            decision,
            running_count: self.tracker.running_count(),
            true_count,
            player: value,
            player_cards: player,
            dealer_upcard,
            observed_at: Local::now(),
        })
    }

    /// Outcome carrying the current count without a decision.
    pub fn waiting(&self, reason: WaitReason) -> CycleOutcome {
        let state = self.tracker.snapshot();
        CycleOutcome::Waiting {
            reason,
            bet: self.bet_policy.bet_size(state.true_count),
            running_count: state.running_count,
            true_count: state.true_count,
        }
    }
}

/// Reads one region; failures are logged and reported as `None`.
fn read_region(source: &mut dyn RecognitionSource, role: RegionRole) -> Option<Vec<CardSymbol>> {
    match source.recognize(role) {
        Ok(cards) => Some(cards),
        Err(e) => {
            tracing::warn!(%role, "Recognition failed: {}", e);
            None
        }
    }
}
