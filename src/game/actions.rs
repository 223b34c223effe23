use log::{debug, info};

use crate::card::Suit;
use crate::error::{ActionError, DealError, SelectionError};
use crate::pile::DiscardPile;
use crate::player::{DrawOutcome, Player};
use crate::rules::{Direction, Effect, is_playable};

use super::{Game, GameState, PlayedCard};

impl Game {
    fn ensure_player_turn(&self, player_id: u8, expected: GameState) -> Result<(), ActionError> {
        if *self.state.lock() != expected {
            return Err(ActionError::InvalidState);
        }

        if usize::from(player_id) >= self.player_count() {
            return Err(ActionError::PlayerNotFound);
        }

        if *self.current.lock() != usize::from(player_id) {
            return Err(ActionError::NotYourTurn);
        }

        Ok(())
    }

    /// Deals the opening hands and turns up the first discard.
    ///
    /// Each player receives `hand_size` cards in seat order, then one card
    /// starts the discard pile and sets the opening suit. Player 0 moves
    /// first, clockwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for players, the hand size
    /// is zero, fewer than two players have joined, or the deck cannot cover
    /// the deal.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn deal(&self) -> Result<(), DealError> {
        let mut state = self.state.lock();
        if *state != GameState::WaitingForPlayers {
            return Err(DealError::InvalidState);
        }

        if self.options.hand_size == 0 {
            return Err(DealError::EmptyHand);
        }

        let mut players = self.players.lock();
        if players.len() < 2 {
            return Err(DealError::NotEnoughPlayers);
        }

        let mut deck = self.deck.lock();
        if deck.len() < self.options.cards_needed(players.len()) {
            return Err(DealError::NotEnoughCards);
        }

        for player in players.iter_mut() {
            for _ in 0..self.options.hand_size {
                player.draw(&mut deck);
            }
        }

        let seed = deck.draw().ok_or(DealError::NotEnoughCards)?;
        *self.pile.lock() = Some(DiscardPile::new(seed));
        *self.current.lock() = 0;
        *self.direction.lock() = Direction::Clockwise;
        *self.winner.lock() = None;
        *state = GameState::AwaitingPlayerMove;

        debug!(
            "dealt {} cards to {} players, {seed} starts the discard pile",
            self.options.hand_size,
            players.len()
        );

        Ok(())
    }

    /// Player action: draw a card because nothing in hand can be played.
    ///
    /// If the deck is empty nothing is drawn and the game carries on. Either
    /// way the turn passes to the next player.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not awaiting a move, the player cannot
    /// be found, it is not the player's turn, or the player holds a playable
    /// card.
    pub fn draw_for_turn(&self, player_id: u8) -> Result<DrawOutcome, ActionError> {
        self.ensure_player_turn(player_id, GameState::AwaitingPlayerMove)?;

        if !self.playable_cards(player_id).is_empty() {
            return Err(ActionError::MustPlay);
        }

        let outcome = self.draw_into(usize::from(player_id));
        debug!("player {player_id}: {outcome}");

        self.advance_turn();
        Ok(outcome)
    }

    /// Player action: play the card at `index` in the player's hand.
    ///
    /// The card goes on the discard pile and its effect is applied at once:
    /// after a Queen the next player draws one card, after an Ace the
    /// direction reverses. After a Jack the game stays in
    /// [`GameState::ApplyingEffect`] until [`Game::choose_suit`] names the
    /// new suit. Otherwise the win is checked and the turn advances.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not awaiting a move, the player cannot
    /// be found, or it is not the player's turn. An index that is out of
    /// range or not playable yields [`ActionError::InvalidSelection`] and
    /// leaves the game untouched.
    pub fn play_card(&self, player_id: u8, index: usize) -> Result<PlayedCard, ActionError> {
        self.ensure_player_turn(player_id, GameState::AwaitingPlayerMove)?;

        let (card, won) = {
            let mut players = self.players.lock();
            let player = players
                .get_mut(usize::from(player_id))
                .ok_or(ActionError::PlayerNotFound)?;
            let mut pile = self.pile.lock();
            let pile = pile.as_mut().ok_or(ActionError::InvalidState)?;

            let candidate = *player.hand().get(index).ok_or(SelectionError::OutOfRange {
                index,
                len: player.len(),
            })?;
            if !is_playable(candidate, pile.top(), pile.current_suit()) {
                return Err(SelectionError::NotPlayable { index }.into());
            }

            let card = player.play(index)?;
            pile.push(card);
            debug!("{} played {card}", player.name());
            (card, player.is_empty())
        };

        *self.state.lock() = GameState::ApplyingEffect;

        let effect = Effect::of(card);
        let forced_draw = self.apply_effect(effect);

        if effect != Effect::SwitchSuit {
            self.check_win_and_advance(player_id);
        }

        Ok(PlayedCard {
            card,
            effect,
            forced_draw,
            won,
        })
    }

    /// Player action: name the suit to follow after playing a Jack.
    ///
    /// The suit replaces the Jack's own suit on top of the discard pile until
    /// another card is played.
    ///
    /// # Errors
    ///
    /// Returns an error if no Jack is waiting for a suit, the player cannot be
    /// found, or it is not the player's turn.
    pub fn choose_suit(&self, player_id: u8, suit: Suit) -> Result<(), ActionError> {
        self.ensure_player_turn(player_id, GameState::ApplyingEffect)?;

        self.pile
            .lock()
            .as_mut()
            .ok_or(ActionError::InvalidState)?
            .declare_suit(suit);
        debug!("player {player_id} switched the suit to {suit}");

        self.check_win_and_advance(player_id);
        Ok(())
    }

    /// Applies a power-card effect for the player at the current seat.
    ///
    /// Returns the forced draw of a Queen.
    fn apply_effect(&self, effect: Effect) -> Option<(u8, DrawOutcome)> {
        match effect {
            Effect::DrawOne => {
                let target = self.next_seat();
                let outcome = self.draw_into(target);
                debug!("queen: player {target} must draw, {outcome}");
                Some((target as u8, outcome))
            }
            Effect::Reverse => {
                let mut direction = self.direction.lock();
                *direction = direction.reversed();
                debug!("ace: direction is now {:?}", *direction);
                None
            }
            Effect::SwitchSuit | Effect::Normal => None,
        }
    }

    fn check_win_and_advance(&self, player_id: u8) {
        *self.state.lock() = GameState::CheckingWin;

        let finished = self
            .players
            .lock()
            .get(usize::from(player_id))
            .is_some_and(Player::is_empty);

        if finished {
            *self.winner.lock() = Some(player_id);
            *self.state.lock() = GameState::GameOver;
            info!("player {player_id} has no cards left and wins");
            return;
        }

        self.advance_turn();
    }

    /// Moves the turn to the next seat in the current direction.
    fn advance_turn(&self) {
        let next = self.next_seat();
        *self.current.lock() = next;
        *self.state.lock() = GameState::AwaitingPlayerMove;
    }

    fn draw_into(&self, seat: usize) -> DrawOutcome {
        let mut players = self.players.lock();
        let mut deck = self.deck.lock();
        players
            .get_mut(seat)
            .map_or(DrawOutcome::DeckEmpty, |player| player.draw(&mut deck))
    }
}
