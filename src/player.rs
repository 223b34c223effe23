//! Player and hand representations.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Suit};
use crate::deck::Deck;
use crate::error::SelectionError;
use crate::rules::is_playable;

/// Outcome of drawing a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// A card was drawn and added to the hand.
    Drawn(Card),
    /// The deck was empty; nothing was drawn.
    DeckEmpty,
}

impl DrawOutcome {
    /// Returns the drawn card, if any.
    #[must_use]
    pub const fn card(self) -> Option<Card> {
        match self {
            Self::Drawn(card) => Some(card),
            Self::DeckEmpty => None,
        }
    }
}

impl fmt::Display for DrawOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Drawn(card) => write!(f, "Drawn: {card}"),
            Self::DeckEmpty => f.write_str("Deck is empty. No card drawn."),
        }
    }
}

/// A seated player and their hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Display name.
    name: String,
    /// Cards in the hand.
    hand: Vec<Card>,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Draws one card from `deck` into the hand.
    pub fn draw(&mut self, deck: &mut Deck) -> DrawOutcome {
        match deck.draw() {
            Some(card) => {
                self.hand.push(card);
                DrawOutcome::Drawn(card)
            }
            None => DrawOutcome::DeckEmpty,
        }
    }

    /// Removes and returns the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::OutOfRange`] if `index` is past the end of
    /// the hand. The hand is left untouched.
    pub fn play(&mut self, index: usize) -> Result<Card, SelectionError> {
        if index >= self.hand.len() {
            return Err(SelectionError::OutOfRange {
                index,
                len: self.hand.len(),
            });
        }
        Ok(self.hand.remove(index))
    }

    /// Returns the indices of cards that may be played on `top`.
    #[must_use]
    pub fn playable_indices(&self, top: Card, current_suit: Suit) -> Vec<usize> {
        self.hand
            .iter()
            .enumerate()
            .filter(|(_, card)| is_playable(**card, top, current_suit))
            .map(|(index, _)| index)
            .collect()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Discards the whole hand.
    pub(crate) fn clear_hand(&mut self) {
        self.hand.clear();
    }
}
