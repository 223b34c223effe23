//! Collaborators that supply moves and observe the table.

use crate::card::{Card, Suit};
use crate::error::SelectionError;
use crate::player::DrawOutcome;
use crate::rules::Effect;

use super::state::TurnView;

/// Supplies move decisions for the player whose turn it is.
///
/// A human prompt, a scripted test harness and an automated policy all fit
/// behind this trait. The engine never holds a lock while calling into it.
pub trait MoveSource {
    /// Picks an index into `view.hand`.
    ///
    /// Returning `None` signals unusable input; the engine asks again without
    /// changing any state. An index that is out of range or not playable is
    /// rejected the same way.
    fn select_card(&mut self, view: &TurnView) -> Option<usize>;

    /// Names the suit to follow after a Jack.
    ///
    /// The engine keeps asking until a suit is returned.
    fn select_suit(&mut self, view: &TurnView) -> Option<Suit>;
}

/// Receives read-only notifications about the game.
///
/// Every method has an empty default body, so implementors only override
/// what they display. `()` is a presenter that ignores everything.
pub trait Presenter {
    /// A player is about to choose a card.
    fn turn_started(&mut self, _view: &TurnView) {}

    /// The chosen index was rejected.
    fn invalid_selection(&mut self, _player_id: u8, _error: SelectionError) {}

    /// The suit input was rejected.
    fn invalid_suit(&mut self, _player_id: u8) {}

    /// A player drew, either for lack of a playable card or forced by a Queen.
    fn card_drawn(&mut self, _player_id: u8, _outcome: DrawOutcome) {}

    /// A player played a card.
    fn card_played(&mut self, _player_id: u8, _card: Card) {}

    /// A power card took effect.
    fn effect_applied(&mut self, _effect: Effect) {}

    /// A Jack's player named a new suit.
    fn suit_changed(&mut self, _suit: Suit) {}

    /// The game has a winner.
    fn winner(&mut self, _player_id: u8, _name: &str) {}
}

impl Presenter for () {}
