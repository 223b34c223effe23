//! The draw deck.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered stack of cards. The top of the deck is the last element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Cards in the deck, top last.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled deck with one card per rank and suit.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Creates a full 52-card deck in uniformly shuffled order.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.cards.shuffle(rng);
        deck
    }

    /// Creates a deck whose successive draws yield `draws` in order.
    ///
    /// ```
    /// use match_and_play::{Card, Deck, Rank, Suit};
    ///
    /// let first = Card::new(Rank::Two, Suit::Hearts);
    /// let second = Card::new(Rank::Ace, Suit::Spades);
    /// let mut deck = Deck::from_draws(&[first, second]);
    /// assert_eq!(deck.draw(), Some(first));
    /// assert_eq!(deck.draw(), Some(second));
    /// assert_eq!(deck.draw(), None);
    /// ```
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the top card, or `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the cards in the deck, top last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
