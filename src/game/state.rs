//! Game state types.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::player::DrawOutcome;
use crate::rules::{Direction, Effect};

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for players to join before the deal.
    WaitingForPlayers,
    /// Waiting for the current player to play or draw.
    AwaitingPlayerMove,
    /// A card has been played and its effect is being resolved. A Jack waits
    /// here until its player names a suit.
    ApplyingEffect,
    /// Checking whether the player who just played has emptied their hand.
    CheckingWin,
    /// A player has won; no further moves are accepted.
    GameOver,
}

/// Read-only snapshot of the table for the player whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnView {
    /// Seat of the acting player.
    pub player_id: u8,
    /// Name of the acting player.
    pub player_name: String,
    /// Cards in the acting player's hand.
    pub hand: Vec<Card>,
    /// Indices into `hand` that may legally be played.
    pub playable: Vec<usize>,
    /// Top of the discard pile, with any declared suit applied.
    pub top: Card,
    /// Suit that plays must follow.
    pub current_suit: Suit,
    /// Direction of play.
    pub direction: Direction,
    /// Cards left in the deck.
    pub cards_remaining: usize,
}

/// A card that was played along with its resolved effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedCard {
    /// The card as it was played.
    pub card: Card,
    /// The effect the card triggered.
    pub effect: Effect,
    /// For a Queen, the player forced to draw and what they drew.
    pub forced_draw: Option<(u8, DrawOutcome)>,
    /// Whether the player emptied their hand with this card.
    pub won: bool,
}

/// What the acting player did on a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAction {
    /// The player had nothing playable and drew.
    Drew(DrawOutcome),
    /// The player played a card.
    Played {
        /// The played card and its effect.
        played: PlayedCard,
        /// Suit named after a Jack.
        chosen_suit: Option<Suit>,
    },
}

/// Summary of one completed turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// Seat of the player who acted.
    pub player_id: u8,
    /// What the player did.
    pub action: TurnAction,
    /// The winner, if the game ended on this turn.
    pub winner: Option<u8>,
}

/// How [`Game::run`](super::Game::run) finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// A player emptied their hand.
    Winner(u8),
    /// The turn limit was reached without a winner.
    TurnLimit,
}
