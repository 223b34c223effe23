//! The discard pile.

use alloc::vec::Vec;

use crate::card::{Card, Suit};

/// Played cards, oldest first.
///
/// The pile is never empty: it is created from the card turned up at the
/// deal. A Jack may attach a declared suit to the top card, which then
/// replaces that card's printed suit until the next card is pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscardPile {
    /// Cards below the top, oldest first.
    buried: Vec<Card>,
    /// The top card as it was played.
    top: Card,
    /// Suit declared by a Jack on the top card.
    declared_suit: Option<Suit>,
}

impl DiscardPile {
    /// Starts a pile with `seed` face up.
    #[must_use]
    pub const fn new(seed: Card) -> Self {
        Self {
            buried: Vec::new(),
            top: seed,
            declared_suit: None,
        }
    }

    /// Places `card` on top of the pile, clearing any declared suit.
    pub fn push(&mut self, card: Card) {
        let previous = core::mem::replace(&mut self.top, card);
        self.buried.push(previous);
        self.declared_suit = None;
    }

    /// Overrides the suit of the current top card.
    pub const fn declare_suit(&mut self, suit: Suit) {
        self.declared_suit = Some(suit);
    }

    /// Returns the top card with its effective suit.
    #[must_use]
    pub const fn top(&self) -> Card {
        Card::new(self.top.rank, self.current_suit())
    }

    /// Returns the top card as it was printed, ignoring any declared suit.
    #[must_use]
    pub const fn top_as_played(&self) -> Card {
        self.top
    }

    /// Returns the suit that legal plays must follow.
    #[must_use]
    pub const fn current_suit(&self) -> Suit {
        match self.declared_suit {
            Some(suit) => suit,
            None => self.top.suit,
        }
    }

    /// Returns the suit declared by a Jack on the top card, if any.
    #[must_use]
    pub const fn declared_suit(&self) -> Option<Suit> {
        self.declared_suit
    }

    /// Returns every card on the pile as played, oldest first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.buried.iter().chain(core::iter::once(&self.top))
    }

    /// Returns the number of cards on the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buried.len() + 1
    }

    /// Always `false`; the pile holds at least its seed card.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}
