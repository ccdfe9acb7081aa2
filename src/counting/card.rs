//! Card symbols and the Hi-Lo value table.

use std::fmt;

/// A card rank as read off the table. Suits are irrelevant to counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardSymbol {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl CardSymbol {
    /// Parses a single recognized token.
    ///
    /// Accepts the printed ranks plus `T` for ten and lowercase face letters,
    /// which Tesseract produces regularly. Anything else is noise.
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim() {
            "2" => Some(CardSymbol::Two),
            "3" => Some(CardSymbol::Three),
            "4" => Some(CardSymbol::Four),
            "5" => Some(CardSymbol::Five),
            "6" => Some(CardSymbol::Six),
            "7" => Some(CardSymbol::Seven),
            "8" => Some(CardSymbol::Eight),
            "9" => Some(CardSymbol::Nine),
            "10" | "T" | "t" => Some(CardSymbol::Ten),
            "J" | "j" => Some(CardSymbol::Jack),
            "Q" | "q" => Some(CardSymbol::Queen),
            "K" | "k" => Some(CardSymbol::King),
            "A" | "a" => Some(CardSymbol::Ace),
            _ => None,
        }
    }

    /// Parses every token, silently dropping the ones that are not cards.
    pub fn parse_all<I, S>(tokens: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens
            .into_iter()
            .filter_map(|token| {
                let token = token.as_ref();
                let parsed = Self::parse(token);
                if parsed.is_none() {
                    tracing::debug!(token, "dropping unrecognized card token");
                }
                parsed
            })
            .collect()
    }

    /// Hi-Lo weight: +1 for 2-6, 0 for 7-9, -1 for tens and aces.
    pub const fn hi_lo_weight(self) -> i32 {
        match self {
            CardSymbol::Two
            | CardSymbol::Three
            | CardSymbol::Four
            | CardSymbol::Five
            | CardSymbol::Six => 1,
            CardSymbol::Seven | CardSymbol::Eight | CardSymbol::Nine => 0,
            CardSymbol::Ten
            | CardSymbol::Jack
            | CardSymbol::Queen
            | CardSymbol::King
            | CardSymbol::Ace => -1,
        }
    }

    /// Blackjack point value with the ace counted high.
    pub const fn points(self) -> u8 {
        match self {
            CardSymbol::Two => 2,
            CardSymbol::Three => 3,
            CardSymbol::Four => 4,
            CardSymbol::Five => 5,
            CardSymbol::Six => 6,
            CardSymbol::Seven => 7,
            CardSymbol::Eight => 8,
            CardSymbol::Nine => 9,
            CardSymbol::Ten | CardSymbol::Jack | CardSymbol::Queen | CardSymbol::King => 10,
            CardSymbol::Ace => 11,
        }
    }

    pub const fn is_ace(self) -> bool {
        matches!(self, CardSymbol::Ace)
    }

    pub const fn is_ten_valued(self) -> bool {
        self.points() == 10
    }
}

impl fmt::Display for CardSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            CardSymbol::Two => "2",
            CardSymbol::Three => "3",
            CardSymbol::Four => "4",
            CardSymbol::Five => "5",
            CardSymbol::Six => "6",
            CardSymbol::Seven => "7",
            CardSymbol::Eight => "8",
            CardSymbol::Nine => "9",
            CardSymbol::Ten => "10",
            CardSymbol::Jack => "J",
            CardSymbol::Queen => "Q",
            CardSymbol::King => "K",
            CardSymbol::Ace => "A",
        };
        f.write_str(text)
    }
}
