use log::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::result::RoundResult;
use crate::shoe::DrawSource;

use super::{Engine, RoundState};

impl<S: DrawSource> Engine<S> {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// A hand over 21 ends the round at once as a player bust. The dealer does
    /// not draw, and the result is available from [`Engine::last_result`].
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw();
        self.player_hand.add_card(card);
        debug!(
            "player hits {card}, hand value {}",
            self.player_hand.value()
        );

        if self.player_hand.is_bust() {
            self.resolve();
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer plays out their hand and the round resolves before this
    /// returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state.
    pub fn stand(&mut self) -> Result<RoundResult, ActionError> {
        self.ensure_player_turn()?;

        Ok(self.play_dealer_and_resolve())
    }

    /// Player action: Double down (double bet, receive one card, then stand).
    ///
    /// The dealer turn runs even if the extra card busts the player, and a
    /// push after doubling refunds the extra half of the doubled stake. Both behaviours are kept
    /// from the desktop game and are worth revisiting with the product owner.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the wallet
    /// holds less than twice the bet.
    pub fn double_down(&mut self) -> Result<RoundResult, ActionError> {
        self.ensure_player_turn()?;

        if !self.can_double() {
            return Err(ActionError::InsufficientFunds);
        }

        self.bet *= 2;
        self.doubled = true;

        let card = self.draw();
        self.player_hand.add_card(card);
        debug!(
            "player doubles to {} and draws {card}, hand value {}",
            self.bet,
            self.player_hand.value()
        );

        Ok(self.play_dealer_and_resolve())
    }
}

impl<S> Engine<S> {
    /// Returns whether [`Engine::double_down`] would be accepted right now.
    pub fn can_double(&self) -> bool {
        self.state == RoundState::PlayerTurn && self.wallet >= self.bet.saturating_mul(2)
    }
}
