//! The shoe cards are dealt from.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{ACE, Card, DECK_SIZE, KING, Suit};
use crate::error::DrawError;

/// An ordered shoe of one or more 52-card decks, drawn from the front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Creates an unshuffled shoe of `num_decks` standard decks.
    ///
    /// Cards are laid out suit by suit, Ace through King, one deck after another.
    #[must_use]
    pub fn ordered(num_decks: u8) -> Self {
        let mut cards = VecDeque::with_capacity(num_decks as usize * DECK_SIZE);

        for _ in 0..num_decks {
            for suit in Suit::ALL {
                for rank in ACE..=KING {
                    cards.push_back(Card::new(suit, rank));
                }
            }
        }

        Self { cards }
    }

    /// Creates and shuffles a shoe with the specified number of decks.
    pub fn generate<R: Rng + ?Sized>(num_decks: u8, rng: &mut R) -> Self {
        let mut deck = Self::ordered(num_decks);
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck whose draw order is the iteration order of `cards`.
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Uniformly permutes the remaining cards in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Removes and returns the front card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] when no cards are left.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        self.cards.pop_front().ok_or(DrawError::EmptyDeck)
    }

    /// Returns the card that would be drawn next.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards in draw order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }
}
