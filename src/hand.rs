//! Player and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

fn evaluate_cards(cards: &[Card]) -> (u32, bool) {
    let mut value: u32 = 0;
    let mut aces: u32 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(u32::from(card.value()));
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// Calculates the blackjack value of a set of cards.
///
/// Aces start at 11. While the total is over 21 and an Ace is still counted
/// as 11, one Ace drops to 1. The result is the best total not over 21 when
/// one exists, otherwise the bust total with every Ace counted as 1.
///
/// ```
/// use bjsolo::{Card, hand_value};
///
/// assert_eq!(hand_value(&[Card::Ace, Card::Ace]), 12);
/// assert_eq!(hand_value(&[Card::Ace, Card::Ace, Card::Ace]), 13);
/// assert_eq!(hand_value(&[Card::King, Card::Queen, Card::Two]), 22);
/// ```
#[must_use]
pub fn hand_value(cards: &[Card]) -> u32 {
    evaluate_cards(cards).0
}

/// The player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in the order they were dealt.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn value(&self) -> u32 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

/// The dealer's hand.
///
/// The second card is the hole card. Until it is revealed, the `visible_*`
/// accessors only show the up card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    /// Cards in the hand.
    hand: Hand,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Returns all cards in the hand, including an unrevealed hole card.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    /// Returns the cards a player may see: only the up card while the hole
    /// card is hidden.
    #[must_use]
    pub fn visible_cards(&self) -> &[Card] {
        let cards = self.hand.cards();
        if self.hole_revealed {
            cards
        } else {
            &cards[..cards.len().min(1)]
        }
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<Card> {
        self.hand.cards().first().copied()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the visible value (only up card if hole not revealed).
    #[must_use]
    pub fn visible_value(&self) -> u32 {
        hand_value(self.visible_cards())
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.hand.value()
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.hand.is_soft()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.hand.clear();
        self.hole_revealed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn soft_flag_tracks_remaining_aces() {
        assert_eq!(evaluate_cards(&[Card::Ace, Card::Six]), (17, true));
        assert_eq!(evaluate_cards(&[Card::Ace, Card::Six, Card::Ten]), (17, false));
        assert_eq!(evaluate_cards(&[Card::Ace, Card::Ace, Card::Ace]), (13, true));
        assert_eq!(evaluate_cards(&[]), (0, false));
    }

    #[test]
    fn long_hands_are_not_clipped() {
        let aces = vec![Card::Ace; 24];
        assert_eq!(evaluate_cards(&aces), (24, false));

        let mut tens = vec![Card::Ten; 30];
        assert_eq!(hand_value(&tens), 300);
        tens.push(Card::Ace);
        assert_eq!(hand_value(&tens), 301);
    }

    #[test]
    fn dealer_hides_hole_card_until_revealed() {
        let mut dealer = DealerHand::new();
        assert!(dealer.visible_cards().is_empty());

        dealer.add_card(Card::Nine);
        dealer.add_card(Card::King);
        assert_eq!(dealer.visible_cards(), &[Card::Nine]);
        assert_eq!(dealer.visible_value(), 9);
        assert_eq!(dealer.value(), 19);

        dealer.reveal_hole();
        assert_eq!(dealer.visible_cards(), &[Card::Nine, Card::King]);
        assert_eq!(dealer.visible_value(), 19);

        dealer.clear();
        assert!(dealer.is_empty());
        assert!(!dealer.is_hole_revealed());
    }

    #[test]
    fn hand_from_cards() {
        let hand = Hand::from(vec![Card::Ten, Card::Queen, Card::Five]);
        assert_eq!(hand.len(), 3);
        assert!(hand.is_bust());
        assert!(!hand.is_soft());
    }
}
