//! Hand totals with ace flexibility.

use super::card::CardSymbol;

/// Evaluated hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandValue {
    pub total: u8,
    /// An ace is present anywhere in the hand.
    ///
    /// Stays set after the ace has been demoted, so callers can route the hand
    /// through the soft branches themselves.
    pub soft: bool,
    /// An ace is still counted as 11.
    pub ace_high: bool,
}

impl HandValue {
    pub fn is_bust(&self) -> bool {
        self.total > 21
    }
}

/// Sums a hand, counting aces as 11 and demoting them to 1 while the hand
/// would otherwise bust. At most one ace can stay at 11.
///
/// Demotion repeats for every ace that is needed, so `[A, A, K]` is 12, not
/// a bust after a single demotion.
pub fn evaluate(cards: &[CardSymbol]) -> HandValue {
    let mut total: u32 = 0;
    let mut aces_high: u32 = 0;

    for card in cards {
        total += u32::from(card.points());
        if card.is_ace() {
            aces_high += 1;
        }
    }

    let soft = aces_high > 0;
    while total > 21 && aces_high > 0 {
        total -= 10;
        aces_high -= 1;
    }

    HandValue {
        total: total.min(u32::from(u8::MAX)) as u8,
        soft,
        ace_high: aces_high > 0,
    }
}

/// Two cards of the same symbol.
pub fn is_pair(cards: &[CardSymbol]) -> bool {
    matches!(cards, [first, second] if first == second)
}

/// Two-card 21.
pub fn is_blackjack(cards: &[CardSymbol]) -> bool {
    cards.len() == 2 && evaluate(cards).total == 21
}
