//! Basic strategy with Hi-Lo index plays.
//!
//! Multi-deck, dealer stands on soft 17, double after split allowed. Every
//! rule is listed explicitly; dealer upcards are compared by point value, so
//! the ace is 11 and all face cards are 10.

use std::fmt;

use super::card::CardSymbol;
use super::hand::{evaluate, is_blackjack, is_pair};

const ACE: u8 = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Hit,
    Stand,
    DoubleDown,
    Split,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Decision::Hit => "Hit",
            Decision::Stand => "Stand",
            Decision::DoubleDown => "Double Down",
            Decision::Split => "Split",
        };
        f.write_str(text)
    }
}

/// Decision for a total, without pair information.
pub fn decide(player_total: u8, soft: bool, dealer_upcard: CardSymbol, true_count: f64) -> Decision {
    let dealer = dealer_upcard.points();
    if soft {
        decide_soft(player_total, dealer, true_count)
    } else {
        decide_hard(player_total, dealer, true_count)
    }
}

/// Decision for a concrete hand.
///
/// Pairs are split according to the pair table. Everything else is routed by
/// whether an ace currently counts as 11. Doubling is only offered on the
/// first two cards.
pub fn decide_hand(cards: &[CardSymbol], dealer_upcard: CardSymbol, true_count: f64) -> Decision {
    let value = evaluate(cards);
    if value.is_bust() || is_blackjack(cards) {
        return Decision::Stand;
    }

    if is_pair(cards) {
        if let Some(decision) = decide_pair(cards[0], dealer_upcard.points()) {
            return decision;
        }
    }

    let decision = decide(value.total, value.ace_high, dealer_upcard, true_count);

    match decision {
        Decision::DoubleDown if cards.len() > 2 => {
            if value.ace_high && value.total >= 18 {
                Decision::Stand
            } else {
                Decision::Hit
            }
        }
        other => other,
    }
}

/// Pair table. `None` means the pair plays as an ordinary total.
fn decide_pair(card: CardSymbol, dealer: u8) -> Option<Decision> {
    match card {
        CardSymbol::Ace | CardSymbol::Eight => Some(Decision::Split),
        ten if ten.is_ten_valued() => Some(Decision::Stand),
        CardSymbol::Nine => match dealer {
            7 | 10 | ACE => Some(Decision::Stand),
            _ => Some(Decision::Split),
        },
        CardSymbol::Two | CardSymbol::Three | CardSymbol::Seven => match dealer {
            2..=7 => Some(Decision::Split),
            _ => None,
        },
        CardSymbol::Six => match dealer {
            2..=6 => Some(Decision::Split),
            _ => None,
        },
        CardSymbol::Four => match dealer {
            5 | 6 => Some(Decision::Split),
            _ => None,
        },
        _ => None,
    }
}

fn decide_hard(total: u8, dealer: u8, tc: f64) -> Decision {
    use Decision::*;

    match total {
        0..=8 => Hit,
        9 => match dealer {
            3..=6 => DoubleDown,
            2 if tc >= 1.0 => DoubleDown,
            7 if tc >= 3.0 => DoubleDown,
            _ => Hit,
        },
        10 => match dealer {
            2..=9 => DoubleDown,
            10 | ACE if tc >= 4.0 => DoubleDown,
            _ => Hit,
        },
        11 => match dealer {
            2..=10 => DoubleDown,
            ACE if tc >= 1.0 => DoubleDown,
            _ => Hit,
        },
        12 => match dealer {
            2 if tc >= 3.0 => Stand,
            3 if tc >= 2.0 => Stand,
            4 if tc < 0.0 => Hit,
            4..=6 => Stand,
            _ => Hit,
        },
        13 => match dealer {
            2 if tc < -1.0 => Hit,
            2..=6 => Stand,
            _ => Hit,
        },
        14 => match dealer {
            2..=6 => Stand,
            _ => Hit,
        },
        15 => match dealer {
            2..=6 => Stand,
            10 if tc >= 4.0 => Stand,
            _ => Hit,
        },
        16 => match dealer {
            2..=6 => Stand,
            9 if tc >= 5.0 => Stand,
            10 if tc > 0.0 => Stand,
            _ => Hit,
        },
        _ => Stand,
    }
}

fn decide_soft(total: u8, dealer: u8, tc: f64) -> Decision {
    use Decision::*;

    match total {
        0..=12 => Hit,
        13 | 14 => match dealer {
            5 | 6 => DoubleDown,
            _ => Hit,
        },
        15 | 16 => match dealer {
            4..=6 => DoubleDown,
            _ => Hit,
        },
        17 => match dealer {
            3..=6 => DoubleDown,
            2 if tc >= 1.0 => DoubleDown,
            _ => Hit,
        },
        18 => match dealer {
            3..=6 => DoubleDown,
            2 | 7 | 8 => Stand,
            _ => Hit,
        },
        19 => match dealer {
            5 | 6 if tc >= 1.0 => DoubleDown,
            4 if tc >= 3.0 => DoubleDown,
            _ => Stand,
        },
        _ => Stand,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CardSymbol::*;
    use Decision::*;

    /// One upcard per dealer point value, 2 through ace.
    const UPCARDS: [CardSymbol; 10] = [Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten, Ace];

    fn hard_row(total: u8, tc: f64) -> Vec<Decision> {
        UPCARDS.iter().map(|&d| decide(total, false, d, tc)).collect()
    }

    fn soft_row(total: u8, tc: f64) -> Vec<Decision> {
        UPCARDS.iter().map(|&d| decide(total, true, d, tc)).collect()
    }

    fn pair_row(card: CardSymbol) -> Vec<Decision> {
        UPCARDS.iter().map(|&d| decide_hand(&[card, card], d, 0.0)).collect()
    }

    #[test]
    fn test_hard_sixteen_against_ten_hits_at_zero() {
        assert_eq!(decide(16, false, Ten, 0.0), Hit);
    }

    #[test]
    fn test_eleven_against_six_doubles() {
        assert_eq!(decide(11, false, Six, 1.0), DoubleDown);
    }

    #[test]
    fn test_aces_and_eights_always_split() {
        for dealer in UPCARDS.into_iter().chain([Jack, Queen, King]) {
            for tc in [-6.0, 0.0, 6.0] {
                assert_eq!(decide_hand(&[Eight, Eight], dealer, tc), Split);
                assert_eq!(decide_hand(&[Ace, Ace], dealer, tc), Split);
            }
        }
    }

    #[test]
    fn test_hard_totals_at_neutral_count() {
        let (h, s, d) = (Hit, Stand, DoubleDown);
        //                             2  3  4  5  6  7  8  9  10 A
        assert_eq!(hard_row(8, 0.0), [h, h, h, h, h, h, h, h, h, h]);
        assert_eq!(hard_row(9, 0.0), [h, d, d, d, d, h, h, h, h, h]);
        assert_eq!(hard_row(10, 0.0), [d, d, d, d, d, d, d, d, h, h]);
        assert_eq!(hard_row(11, 0.0), [d, d, d, d, d, d, d, d, d, h]);
        assert_eq!(hard_row(12, 0.0), [h, h, s, s, s, h, h, h, h, h]);
        assert_eq!(hard_row(13, 0.0), [s, s, s, s, s, h, h, h, h, h]);
        assert_eq!(hard_row(14, 0.0), [s, s, s, s, s, h, h, h, h, h]);
        assert_eq!(hard_row(15, 0.0), [s, s, s, s, s, h, h, h, h, h]);
        assert_eq!(hard_row(16, 0.0), [s, s, s, s, s, h, h, h, h, h]);
        assert_eq!(hard_row(17, 0.0), [s, s, s, s, s, s, s, s, s, s]);
        assert_eq!(hard_row(21, 0.0), [s, s, s, s, s, s, s, s, s, s]);
    }

    #[test]
    fn test_soft_totals_at_neutral_count() {
        let (h, s, d) = (Hit, Stand, DoubleDown);
        //                             2  3  4  5  6  7  8  9  10 A
        assert_eq!(soft_row(13, 0.0), [h, h, h, d, d, h, h, h, h, h]);
        assert_eq!(soft_row(14, 0.0), [h, h, h, d, d, h, h, h, h, h]);
        assert_eq!(soft_row(15, 0.0), [h, h, d, d, d, h, h, h, h, h]);
        assert_eq!(soft_row(16, 0.0), [h, h, d, d, d, h, h, h, h, h]);
        assert_eq!(soft_row(17, 0.0), [h, d, d, d, d, h, h, h, h, h]);
        assert_eq!(soft_row(18, 0.0), [s, d, d, d, d, s, s, h, h, h]);
        assert_eq!(soft_row(19, 0.0), [s, s, s, s, s, s, s, s, s, s]);
        assert_eq!(soft_row(20, 0.0), [s, s, s, s, s, s, s, s, s, s]);
    }

    #[test]
    fn test_pairs_at_neutral_count() {
        let (h, s, d, p) = (Hit, Stand, DoubleDown, Split);
        //                          2  3  4  5  6  7  8  9  10 A
        assert_eq!(pair_row(Two), [p, p, p, p, p, p, h, h, h, h]);
        assert_eq!(pair_row(Three), [p, p, p, p, p, p, h, h, h, h]);
        assert_eq!(pair_row(Four), [h, h, h, p, p, h, h, h, h, h]);
        assert_eq!(pair_row(Five), [d, d, d, d, d, d, d, d, h, h]);
        assert_eq!(pair_row(Six), [p, p, p, p, p, h, h, h, h, h]);
        assert_eq!(pair_row(Seven), [p, p, p, p, p, p, h, h, h, h]);
        assert_eq!(pair_row(Nine), [p, p, p, p, p, s, p, p, s, s]);
        assert_eq!(pair_row(Ten), [s, s, s, s, s, s, s, s, s, s]);
        assert_eq!(pair_row(Queen), [s, s, s, s, s, s, s, s, s, s]);
    }

    #[test]
    fn test_nines_stand_against_face_cards() {
        for dealer in [Jack, Queen, King] {
            assert_eq!(decide_hand(&[Nine, Nine], dealer, 0.0), Stand);
        }
    }

    #[test]
    fn test_hard_index_plays() {
        assert_eq!(decide(9, false, Two, 1.0), DoubleDown);
        assert_eq!(decide(9, false, Two, 0.9), Hit);
        assert_eq!(decide(9, false, Seven, 3.0), DoubleDown);
        assert_eq!(decide(10, false, Ten, 4.0), DoubleDown);
        assert_eq!(decide(10, false, Ace, 4.0), DoubleDown);
        assert_eq!(decide(10, false, King, 3.9), Hit);
        assert_eq!(decide(11, false, Ace, 1.0), DoubleDown);
        assert_eq!(decide(12, false, Two, 3.0), Stand);
        assert_eq!(decide(12, false, Three, 2.0), Stand);
        assert_eq!(decide(12, false, Four, -0.5), Hit);
        assert_eq!(decide(13, false, Two, -1.0), Stand);
        assert_eq!(decide(13, false, Two, -1.1), Hit);
        assert_eq!(decide(15, false, Ten, 4.0), Stand);
        assert_eq!(decide(16, false, Ten, 0.1), Stand);
        assert_eq!(decide(16, false, Nine, 5.0), Stand);
        assert_eq!(decide(16, false, Nine, 4.9), Hit);
    }

    #[test]
    fn test_soft_index_plays() {
        assert_eq!(decide(17, true, Two, 1.0), DoubleDown);
        assert_eq!(decide(19, true, Six, 1.0), DoubleDown);
        assert_eq!(decide(19, true, Five, 1.0), DoubleDown);
        assert_eq!(decide(19, true, Four, 3.0), DoubleDown);
        assert_eq!(decide(19, true, Four, 2.0), Stand);
    }

    #[test]
    fn test_soft_hand_routing_uses_live_ace() {
        // A-6-9 is a hard 16 even though it holds an ace.
        assert_eq!(decide_hand(&[Ace, Six, Nine], Five, 0.0), Stand);
        // A-5 doubles against a 5; A-2-3 cannot double any more.
        assert_eq!(decide_hand(&[Ace, Five], Five, 0.0), DoubleDown);
        assert_eq!(decide_hand(&[Ace, Two, Three], Five, 0.0), Hit);
    }

    #[test]
    fn test_multi_card_soft_eighteen_stands_instead_of_double() {
        assert_eq!(decide_hand(&[Ace, Seven], Four, 0.0), DoubleDown);
        assert_eq!(decide_hand(&[Ace, Three, Four], Four, 0.0), Stand);
    }

    #[test]
    fn test_multi_card_eleven_hits_instead_of_double() {
        assert_eq!(decide_hand(&[Three, Four, Four], Six, 1.0), Hit);
        assert_eq!(decide_hand(&[Six, Five], Six, 1.0), DoubleDown);
    }

    #[test]
    fn test_busted_hand_stands() {
        assert_eq!(decide_hand(&[Ten, Nine, Five], Six, 0.0), Stand);
        assert_eq!(decide_hand(&[Ace, King], Ace, 5.0), Stand);
    }

    #[test]
    fn test_decide_is_repeatable() {
        for tc in [-3.0, 0.0, 2.5] {
            assert_eq!(decide(12, false, Three, tc), decide(12, false, Three, tc));
            assert_eq!(
                decide_hand(&[Nine, Nine], Eight, tc),
                decide_hand(&[Nine, Nine], Eight, tc)
            );
        }
    }

    #[test]
    fn test_decision_labels() {
        assert_eq!(DoubleDown.to_string(), "Double Down");
        assert_eq!(Split.to_string(), "Split");
    }
}
