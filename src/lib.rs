//! A Match and Play card game engine with optional `no_std` support.
//!
//! Match and Play is a Crazy Eights variant: players take turns matching the
//! suit or rank of the top discard, Jacks switch the suit, Queens make the
//! next player draw and Aces reverse the direction of play. The first player
//! to empty their hand wins.
//!
//! The crate provides a [`Game`] type that manages the full session:
//! dealing, turn order, legality checks, power-card effects and win
//! detection. Moves come from a [`MoveSource`] and table updates go to a
//! [`Presenter`], so the engine runs the same under a console prompt or a
//! scripted test.
//!
//! # Example
//!
//! ```
//! use match_and_play::{Game, GameOptions, GameState};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.join("Chandu").unwrap();
//! game.join("Ammu").unwrap();
//! game.deal().unwrap();
//!
//! assert_eq!(game.state(), GameState::AwaitingPlayerMove);
//! assert_eq!(game.cards_remaining(), 52 - 11);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod pile;
pub mod player;
pub mod rules;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, JoinError, ParseSuitError, SelectionError};
pub use game::{
    Game, GameState, MoveSource, PlayedCard, Presenter, RunOutcome, TurnAction, TurnReport,
    TurnView,
};
pub use options::GameOptions;
pub use pile::DiscardPile;
pub use player::{DrawOutcome, Player};
pub use rules::{Direction, Effect, is_playable};
