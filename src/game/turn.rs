use log::warn;

use crate::card::Suit;
use crate::error::{ActionError, SelectionError};
use crate::pile::DiscardPile;
use crate::rules::Effect;

use super::{
    Game, GameState, MoveSource, PlayedCard, Presenter, RunOutcome, TurnAction, TurnReport,
    TurnView,
};

impl Game {
    /// Plays one full turn for the current player.
    ///
    /// If the player holds nothing playable they draw and the turn passes.
    /// Otherwise `source` picks a card, and is asked again for as long as it
    /// returns an unusable index. After a Jack, `source` is asked for a suit
    /// until it names one. `presenter` is told about every step.
    ///
    /// A Jack left waiting for its suit by a direct [`Game::play_card`] call
    /// is finished here: `source` names the suit and the turn completes.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] if the game is not awaiting a
    /// move or a suit, for example before the deal or after the game is over.
    pub fn play_turn<M, P>(
        &self,
        source: &mut M,
        presenter: &mut P,
    ) -> Result<TurnReport, ActionError>
    where
        M: MoveSource + ?Sized,
        P: Presenter + ?Sized,
    {
        match self.state() {
            GameState::AwaitingPlayerMove => {}
            GameState::ApplyingEffect => return self.finish_pending_jack(source, presenter),
            _ => return Err(ActionError::InvalidState),
        }

        let view = self.turn_view().ok_or(ActionError::InvalidState)?;
        let player_id = view.player_id;
        presenter.turn_started(&view);

        if view.playable.is_empty() {
            let outcome = self.draw_for_turn(player_id)?;
            presenter.card_drawn(player_id, outcome);
            return Ok(TurnReport {
                player_id,
                action: TurnAction::Drew(outcome),
                winner: None,
            });
        }

        let played = loop {
            let result = source
                .select_card(&view)
                .ok_or(ActionError::InvalidSelection(SelectionError::NoSelection))
                .and_then(|index| self.play_card(player_id, index));

            match result {
                Ok(played) => break played,
                Err(ActionError::InvalidSelection(error)) => {
                    warn!("player {player_id}: {error}");
                    presenter.invalid_selection(player_id, error);
                }
                Err(error) => return Err(error),
            }
        };

        presenter.card_played(player_id, played.card);
        if played.effect != Effect::Normal {
            presenter.effect_applied(played.effect);
        }
        if let Some((target, outcome)) = played.forced_draw {
            presenter.card_drawn(target, outcome);
        }

        let chosen_suit = if played.effect == Effect::SwitchSuit {
            let view = self.turn_view().unwrap_or(view);
            Some(self.name_suit(source, presenter, &view)?)
        } else {
            None
        };

        Ok(self.report(player_id, played, chosen_suit, presenter))
    }

    fn finish_pending_jack<M, P>(
        &self,
        source: &mut M,
        presenter: &mut P,
    ) -> Result<TurnReport, ActionError>
    where
        M: MoveSource + ?Sized,
        P: Presenter + ?Sized,
    {
        let view = self.turn_view().ok_or(ActionError::InvalidState)?;
        let card = self
            .pile
            .lock()
            .as_ref()
            .map(DiscardPile::top_as_played)
            .ok_or(ActionError::InvalidState)?;
        let played = PlayedCard {
            card,
            effect: Effect::SwitchSuit,
            forced_draw: None,
            won: view.hand.is_empty(),
        };

        presenter.turn_started(&view);
        let suit = self.name_suit(source, presenter, &view)?;
        Ok(self.report(view.player_id, played, Some(suit), presenter))
    }

    /// Asks `source` for a suit until it names one, then completes the Jack.
    fn name_suit<M, P>(
        &self,
        source: &mut M,
        presenter: &mut P,
        view: &TurnView,
    ) -> Result<Suit, ActionError>
    where
        M: MoveSource + ?Sized,
        P: Presenter + ?Sized,
    {
        let player_id = view.player_id;
        let suit = loop {
            if let Some(suit) = source.select_suit(view) {
                break suit;
            }
            warn!("player {player_id}: invalid suit choice");
            presenter.invalid_suit(player_id);
        };
        self.choose_suit(player_id, suit)?;
        presenter.suit_changed(suit);
        Ok(suit)
    }

    fn report<P>(
        &self,
        player_id: u8,
        played: PlayedCard,
        chosen_suit: Option<Suit>,
        presenter: &mut P,
    ) -> TurnReport
    where
        P: Presenter + ?Sized,
    {
        let winner = self.winner();
        if let Some(winner) = winner {
            let name = self.player_name(winner).unwrap_or_default();
            presenter.winner(winner, &name);
        }

        TurnReport {
            player_id,
            action: TurnAction::Played {
                played,
                chosen_suit,
            },
            winner,
        }
    }

    /// Plays turns until a player wins or `turn_limit` turns have passed.
    ///
    /// Once the deck runs dry and nobody can follow, the game never ends on
    /// its own; the limit bounds such a session.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] if the cards have not been dealt.
    pub fn run<M, P>(
        &self,
        source: &mut M,
        presenter: &mut P,
        turn_limit: usize,
    ) -> Result<RunOutcome, ActionError>
    where
        M: MoveSource + ?Sized,
        P: Presenter + ?Sized,
    {
        for _ in 0..turn_limit {
            if let Some(winner) = self.winner() {
                return Ok(RunOutcome::Winner(winner));
            }

            let report = self.play_turn(source, presenter)?;
            if let Some(winner) = report.winner {
                return Ok(RunOutcome::Winner(winner));
            }
        }

        Ok(self.winner().map_or(RunOutcome::TurnLimit, RunOutcome::Winner))
    }
}
