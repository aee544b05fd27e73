//! Card ranks and their blackjack values.

use core::fmt;
use core::str::FromStr;

use crate::error::CardParseError;

/// A playing card.
///
/// Suits never matter to the engine, so a card is just its rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Card {
    /// Ace, worth 11 or 1.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

/// All thirteen ranks, Ace first.
pub const RANKS: [Card; 13] = [
    Card::Ace,
    Card::Two,
    Card::Three,
    Card::Four,
    Card::Five,
    Card::Six,
    Card::Seven,
    Card::Eight,
    Card::Nine,
    Card::Ten,
    Card::Jack,
    Card::Queen,
    Card::King,
];

impl Card {
    /// Returns the hard value of the card, counting an Ace as 11.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Ace => 11,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
        }
    }

    /// Returns whether the card is an Ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Self::Ace)
    }

    /// Returns the short label of the card (`"A"`, `"2"`..`"10"`, `"J"`, `"Q"`, `"K"`).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Parses a card label such as `"A"`, `"10"` or `"q"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        RANKS
            .into_iter()
            .find(|card| card.symbol().eq_ignore_ascii_case(label))
            .ok_or(CardParseError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_cards_are_worth_ten() {
        assert_eq!(Card::Jack.value(), 10);
        assert_eq!(Card::Queen.value(), 10);
        assert_eq!(Card::King.value(), 10);
        assert_eq!(Card::Ace.value(), 11);
        assert_eq!(Card::Seven.value(), 7);
    }

    #[test]
    fn labels_parse_back() {
        for card in RANKS {
            assert_eq!(card.symbol().parse::<Card>(), Ok(card));
        }
        assert_eq!(" k ".parse::<Card>(), Ok(Card::King));
        assert_eq!("1".parse::<Card>(), Err(CardParseError));
        assert_eq!("".parse::<Card>(), Err(CardParseError));
    }
}
