//! Error types for game operations.

use thiserror::Error;

/// A chosen card index that cannot be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The move source could not produce an index.
    #[error("no card index was selected")]
    NoSelection,
    /// The index is past the end of the hand.
    #[error("card index {index} is out of range for a hand of {len}")]
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of cards in the hand.
        len: usize,
    },
    /// The card does not match the current suit or the top card's rank.
    #[error("card at index {index} cannot be played on the discard pile")]
    NotPlayable {
        /// The rejected index.
        index: usize,
    },
}

/// Input that does not name one of the four suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid suit, expected Hearts, Diamonds, Clubs or Spades")]
pub struct ParseSuitError;

/// Errors that can occur when joining a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// Cards have already been dealt.
    #[error("invalid game state for joining")]
    InvalidState,
    /// The table has reached its maximum number of players.
    #[error("table is full")]
    TableFull,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Fewer than two players have joined.
    #[error("at least two players are required")]
    NotEnoughPlayers,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
    /// The options deal no cards to each player.
    #[error("hand size must be at least one card")]
    EmptyHand,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// The chosen card cannot be played.
    #[error(transparent)]
    InvalidSelection(#[from] SelectionError),
    /// The player holds a playable card and may not draw instead.
    #[error("a playable card is in hand")]
    MustPlay,
}
