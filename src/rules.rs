//! Legality, power-card effects and play direction.

use crate::card::{Card, Rank, Suit};

/// Returns whether `card` may be played on `top` while `current_suit` is
/// in force.
///
/// Jacks are always playable. Otherwise the card must follow the current
/// suit or match the rank of the top card.
///
/// ```
/// use match_and_play::{Card, Rank, Suit, is_playable};
///
/// let top = Card::new(Rank::Five, Suit::Diamonds);
/// assert!(is_playable(Card::new(Rank::Jack, Suit::Spades), top, Suit::Diamonds));
/// assert!(is_playable(Card::new(Rank::Five, Suit::Clubs), top, Suit::Diamonds));
/// assert!(!is_playable(Card::new(Rank::Two, Suit::Hearts), top, Suit::Diamonds));
/// ```
#[must_use]
pub fn is_playable(card: Card, top: Card, current_suit: Suit) -> bool {
    card.rank == Rank::Jack || card.suit == current_suit || card.rank == top.rank
}

/// Effect applied right after a card is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    /// No special effect.
    Normal,
    /// Queen: the next player draws one card.
    DrawOne,
    /// Ace: the direction of play reverses.
    Reverse,
    /// Jack: the player names the suit to follow.
    SwitchSuit,
}

impl Effect {
    /// Returns the effect triggered by playing `card`.
    #[must_use]
    pub const fn of(card: Card) -> Self {
        match card.rank {
            Rank::Queen => Self::DrawOne,
            Rank::Ace => Self::Reverse,
            Rank::Jack => Self::SwitchSuit,
            _ => Self::Normal,
        }
    }
}

/// Direction of play around the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Seat order ascending.
    #[default]
    Clockwise,
    /// Seat order descending.
    CounterClockwise,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }

    /// Returns the seat after `index` at a table of `seats` players.
    ///
    /// ```
    /// use match_and_play::Direction;
    ///
    /// assert_eq!(Direction::Clockwise.next(2, 3), 0);
    /// assert_eq!(Direction::CounterClockwise.next(0, 3), 2);
    /// ```
    #[must_use]
    pub const fn next(self, index: usize, seats: usize) -> usize {
        if seats == 0 {
            return 0;
        }
        match self {
            Self::Clockwise => (index + 1) % seats,
            Self::CounterClockwise => (index + seats - 1) % seats,
        }
    }
}
