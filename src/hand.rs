//! Hand valuation and the player/dealer hand type.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, JACK, KING};

/// Highest value a hand can reach without busting.
pub const TWENTY_ONE: u8 = 21;

const fn card_value(rank: u8) -> u8 {
    match rank {
        1 => 11,
        2..=10 => rank,
        JACK..=KING => 10,
        _ => 0,
    }
}

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u32 = 0;
    let mut aces: u32 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value += u32::from(card_value(card.rank));
    }

    // Each Ace drops from 11 to 1 until the hand fits.
    while value > u32::from(TWENTY_ONE) && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= u32::from(TWENTY_ONE);
    // Any total this large is already a bust, so clamping keeps the answer.
    (u8::try_from(value).unwrap_or(u8::MAX), is_soft)
}

/// Calculates the blackjack value of a set of cards.
///
/// Number cards count their face value, J/Q/K count 10 and Aces count 11.
/// While the total is over 21, one Ace at a time is downgraded to 1. The
/// result does not depend on card order, and an empty slice is worth 0.
///
/// ```
/// use bjlive::{Card, Suit, hand_value};
///
/// let aces = [Card::new(Suit::Hearts, 1), Card::new(Suit::Spades, 1)];
/// assert_eq!(hand_value(&aces), 12);
/// assert_eq!(hand_value(&[]), 0);
/// ```
#[must_use]
pub fn hand_value(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns whether an Ace is still counted as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// Projects the part of the dealer hand a player may see.
///
/// Before the reveal only the first (up) card is shown; afterwards every card
/// is. An empty hand yields an empty view either way.
#[must_use]
pub fn visible_cards(cards: &[Card], revealed: bool) -> &[Card] {
    if revealed {
        cards
    } else {
        &cards[..cards.len().min(1)]
    }
}

/// An ordered hand of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand {
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
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > TWENTY_ONE
    }

    /// Returns whether the hand totals exactly 21.
    #[must_use]
    pub fn is_twenty_one(&self) -> bool {
        self.value() == TWENTY_ONE
    }

    /// Returns whether the hand is a natural (two cards totalling 21).
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.is_twenty_one()
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

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
