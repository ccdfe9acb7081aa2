//! Hi-Lo running count and deck-depth estimate for one shoe.

use super::card::CardSymbol;

/// Cards in a single deck. Each observed card removes 1/52 of a deck.
const CARDS_PER_DECK: f64 = 52.0;

/// Smallest usable deck floor: one card left in the shoe.
pub const MIN_DECK_FLOOR: f64 = 1.0 / CARDS_PER_DECK;

/// Snapshot of the count for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountState {
    pub running_count: i32,
    pub decks_remaining: f64,
    pub true_count: f64,
}

/// Tracks the running count across a shoe.
///
/// The depth estimate is derived from the number of cards seen, so the result
/// does not depend on how observations were batched. It never drops below
/// `deck_floor`, which keeps the true count finite near the end of the shoe.
#[derive(Debug, Clone)]
pub struct CountTracker {
    running_count: i32,
    cards_seen: u32,
    initial_decks: f64,
    deck_floor: f64,
}

impl CountTracker {
    /// Creates a tracker for a fresh shoe.
    ///
    /// A `deck_floor` below one card (or not finite) is raised to
    /// `MIN_DECK_FLOOR`, and `initial_decks` is raised to the floor, so
    /// `decks_remaining` is always positive.
    pub fn new(initial_decks: f64, deck_floor: f64) -> Self {
        let deck_floor = if deck_floor.is_finite() && deck_floor >= MIN_DECK_FLOOR {
            deck_floor
        } else {
            tracing::warn!(deck_floor, "deck floor too small, using one card");
            MIN_DECK_FLOOR
        };
        let initial_decks = if initial_decks.is_finite() {
            initial_decks.max(deck_floor)
        } else {
            tracing::warn!(initial_decks, "initial decks not finite, using the floor");
            deck_floor
        };

        Self {
            running_count: 0,
            cards_seen: 0,
            initial_decks,
            deck_floor,
        }
    }

    /// Adds every card's Hi-Lo weight and removes it from the shoe estimate.
    ///
    /// Duplicates are counted as real cards.
    pub fn observe(&mut self, cards: &[CardSymbol]) {
        for card in cards {
            self.running_count += card.hi_lo_weight();
            self.cards_seen = self.cards_seen.saturating_add(1);
        }
    }

    pub fn running_count(&self) -> i32 {
        self.running_count
    }

    pub fn cards_seen(&self) -> u32 {
        self.cards_seen
    }

    pub fn decks_remaining(&self) -> f64 {
        let remaining = self.initial_decks - self.cards_seen as f64 / CARDS_PER_DECK;
        remaining.max(self.deck_floor)
    }

    pub fn true_count(&self) -> f64 {
        self.running_count as f64 / self.decks_remaining()
    }

    /// Starts a fresh shoe.
    pub fn reset(&mut self) {
        self.running_count = 0;
        self.cards_seen = 0;
    }

    pub fn snapshot(&self) -> CountState {
        CountState {
            running_count: self.running_count,
            decks_remaining: self.decks_remaining(),
            true_count: self.true_count(),
        }
    }
}
