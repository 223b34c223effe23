//! Game engine and state management.

use alloc::string::String;
use alloc::vec::Vec;

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::{Card, Suit};
use crate::deck::Deck;
use crate::error::JoinError;
use crate::options::GameOptions;
use crate::pile::DiscardPile;
use crate::player::Player;
use crate::rules::Direction;

mod actions;
pub mod controller;
pub mod state;
mod turn;

pub use controller::{MoveSource, Presenter};
pub use state::{GameState, PlayedCard, RunOutcome, TurnAction, TurnReport, TurnView};

/// A Match and Play game engine that manages players, the deck, the discard
/// pile and turn flow.
///
/// The game owns every card. Cards move between the deck, the players' hands
/// and the discard pile only through the engine, so the three always hold
/// exactly 52 cards between them.
pub struct Game {
    /// Cards still in the deck.
    pub deck: Mutex<Deck>,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// Seated players, indexed by player ID.
    pub players: Mutex<Vec<Player>>,
    /// Discard pile, present once the cards are dealt.
    pub pile: Mutex<Option<DiscardPile>>,
    /// Seat of the player whose turn it is.
    current: Mutex<usize>,
    /// Direction of play.
    direction: Mutex<Direction>,
    /// Winner once the game is over.
    winner: Mutex<Option<u8>>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use match_and_play::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::WaitingForPlayers);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);

        Self {
            deck: Mutex::new(deck),
            options,
            state: Mutex::new(GameState::WaitingForPlayers),
            players: Mutex::new(Vec::new()),
            pile: Mutex::new(None),
            current: Mutex::new(0),
            direction: Mutex::new(Direction::Clockwise),
            winner: Mutex::new(None),
            rng: Mutex::new(rng),
        }
    }

    /// Seats a new player with an empty hand.
    ///
    /// Returns the assigned player ID, which is also the player's seat.
    ///
    /// # Errors
    ///
    /// Returns an error if the cards have already been dealt or the table is
    /// full.
    pub fn join(&self, name: impl Into<String>) -> Result<u8, JoinError> {
        if *self.state.lock() != GameState::WaitingForPlayers {
            return Err(JoinError::InvalidState);
        }

        let mut players = self.players.lock();
        if players.len() >= usize::from(self.options.max_players) {
            return Err(JoinError::TableFull);
        }

        let id = players.len() as u8;
        players.push(Player::new(name));
        debug!("{} joined at seat {id}", players[usize::from(id)].name());
        Ok(id)
    }

    /// Collects every card and starts over with a freshly shuffled deck.
    ///
    /// Players keep their seats. The game returns to the
    /// `WaitingForPlayers` state.
    pub fn reset(&self) {
        let deck = Deck::shuffled(&mut *self.rng.lock());
        let previous = self.deck.replace(deck);
        debug!("reshuffling with {} cards left undealt", previous.len());

        for player in self.players.lock().iter_mut() {
            player.clear_hand();
        }

        self.pile.replace(None);
        self.current.replace(0);
        self.direction.replace(Direction::Clockwise);
        self.winner.replace(None);
        self.state.replace(GameState::WaitingForPlayers);
        debug!("game reset");
    }

    /// Returns the number of seated players.
    pub fn player_count(&self) -> usize {
        self.players.lock().len()
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the player ID whose turn it is.
    ///
    /// Returns `None` before the deal and after the game is over.
    pub fn current_player(&self) -> Option<u8> {
        match self.state() {
            GameState::WaitingForPlayers | GameState::GameOver => None,
            _ => Some(*self.current.lock() as u8),
        }
    }

    /// Returns the direction of play.
    pub fn direction(&self) -> Direction {
        *self.direction.lock()
    }

    /// Returns the top of the discard pile with any declared suit applied.
    pub fn top_card(&self) -> Option<Card> {
        self.pile.lock().as_ref().map(DiscardPile::top)
    }

    /// Returns the suit that plays must follow.
    pub fn current_suit(&self) -> Option<Suit> {
        self.pile.lock().as_ref().map(DiscardPile::current_suit)
    }

    /// Returns the winner, if the game is over.
    pub fn winner(&self) -> Option<u8> {
        *self.winner.lock()
    }

    /// Returns a copy of the player's hand.
    ///
    /// Returns `None` if the player ID is not found.
    pub fn get_hand(&self, player_id: u8) -> Option<Vec<Card>> {
        self.players
            .lock()
            .get(usize::from(player_id))
            .map(|player| player.hand().to_vec())
    }

    /// Returns the player's name.
    pub fn player_name(&self, player_id: u8) -> Option<String> {
        self.players
            .lock()
            .get(usize::from(player_id))
            .map(|player| String::from(player.name()))
    }

    /// Returns the number of cards across the deck, every hand and the
    /// discard pile.
    pub fn card_total(&self) -> usize {
        let in_deck = self.cards_remaining();
        let in_hands: usize = self.players.lock().iter().map(Player::len).sum();
        let in_pile = self.pile.lock().as_ref().map_or(0, DiscardPile::len);
        in_deck + in_hands + in_pile
    }

    /// Returns the indices of the cards the player may play on the current
    /// discard pile.
    ///
    /// Returns an empty list before the deal or for an unknown player.
    pub fn playable_cards(&self, player_id: u8) -> Vec<usize> {
        let players = self.players.lock();
        let pile = self.pile.lock();
        match (players.get(usize::from(player_id)), pile.as_ref()) {
            (Some(player), Some(pile)) => player.playable_indices(pile.top(), pile.current_suit()),
            _ => Vec::new(),
        }
    }

    /// Returns a snapshot of the table for the player whose turn it is.
    ///
    /// Returns `None` when no player is acting (before the deal or after the
    /// game is over).
    pub fn turn_view(&self) -> Option<TurnView> {
        let player_id = self.current_player()?;
        let cards_remaining = self.cards_remaining();
        let direction = self.direction();

        let players = self.players.lock();
        let player = players.get(usize::from(player_id))?;
        let pile = self.pile.lock();
        let pile = pile.as_ref()?;

        Some(TurnView {
            player_id,
            player_name: String::from(player.name()),
            hand: player.hand().to_vec(),
            playable: player.playable_indices(pile.top(), pile.current_suit()),
            top: pile.top(),
            current_suit: pile.current_suit(),
            direction,
            cards_remaining,
        })
    }

    /// Returns the seat after the current one in the current direction.
    fn next_seat(&self) -> usize {
        let seats = self.player_count();
        let current = *self.current.lock();
        self.direction().next(current, seats)
    }
}
