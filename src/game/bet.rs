use log::debug;

use crate::error::{BetError, InvalidBet};
use crate::shoe::DrawSource;

use super::{Engine, RoundState};

impl<S: DrawSource> Engine<S> {
    fn ensure_accepting_bets(&self) -> Result<(), BetError> {
        if self.session_over {
            return Err(BetError::SessionOver);
        }

        if !self.state.accepts_bets() {
            return Err(BetError::InvalidState);
        }

        Ok(())
    }

    fn validate_bet(&self, amount: i64) -> Result<(), InvalidBet> {
        if amount < 1 {
            return Err(InvalidBet::NotPositive);
        }

        if amount > self.wallet {
            return Err(InvalidBet::ExceedsWallet {
                bet: amount,
                wallet: self.wallet,
            });
        }

        Ok(())
    }

    /// Starts a round with the given stake and deals the opening cards.
    ///
    /// The stake is reserved, not withdrawn; the wallet only changes when the
    /// round resolves. Cards are dealt player, dealer up card, player, dealer
    /// hole card.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is over, a round is in progress, or the
    /// bet is not between 1 and the wallet balance.
    pub fn start_round(&mut self, amount: i64) -> Result<(), BetError> {
        self.ensure_accepting_bets()?;
        self.validate_bet(amount)?;

        self.reset_table();
        self.last_result = None;
        self.bet = amount;
        self.deal();

        self.state = RoundState::PlayerTurn;
        Ok(())
    }

    /// Parses a bet typed by the player and starts a round with it.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBet::NotNumeric`] if the text is not a whole number,
    /// and otherwise the same errors as [`Engine::start_round`].
    pub fn start_round_str(&mut self, input: &str) -> Result<(), BetError> {
        self.ensure_accepting_bets()?;

        let amount = input
            .trim()
            .parse::<i64>()
            .map_err(|_| InvalidBet::NotNumeric)?;

        self.start_round(amount)
    }

    /// Deals two cards to each side.
    fn deal(&mut self) {
        for _ in 0..2 {
            let card = self.draw();
            self.player_hand.add_card(card);

            let card = self.draw();
            self.dealer_hand.add_card(card);
        }

        debug!(
            "dealt player {:?} ({}), dealer up card {:?}, bet {}",
            self.player_hand.cards(),
            self.player_hand.value(),
            self.dealer_hand.up_card(),
            self.bet
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::card::Card;
    use crate::error::{BetError, InvalidBet};
    use crate::game::{Engine, RoundState};
    use crate::options::SessionOptions;

    fn tens() -> Engine<impl FnMut() -> Card> {
        Engine::with_source(SessionOptions::default(), || Card::Ten)
    }

    #[test]
    fn bet_bounds() {
        let mut engine = tens();
        assert_eq!(
            engine.start_round(0),
            Err(BetError::InvalidBet(InvalidBet::NotPositive))
        );
        assert_eq!(
            engine.start_round(1001),
            Err(BetError::InvalidBet(InvalidBet::ExceedsWallet {
                bet: 1001,
                wallet: 1000
            }))
        );
        assert_eq!(engine.state(), RoundState::Idle);
        assert!(engine.player_hand().is_empty());

        assert_eq!(engine.start_round(1000), Ok(()));
        assert_eq!(engine.bet(), 1000);
        assert_eq!(engine.wallet(), 1000);
    }

    #[test]
    fn text_bets() {
        let mut engine = tens();
        assert_eq!(
            engine.start_round_str("ten"),
            Err(BetError::InvalidBet(InvalidBet::NotNumeric))
        );
        assert_eq!(
            engine.start_round_str("2.5"),
            Err(BetError::InvalidBet(InvalidBet::NotNumeric))
        );
        assert_eq!(engine.start_round_str(" 25\n"), Ok(()));
        assert_eq!(engine.bet(), 25);
        assert_eq!(
            engine.start_round_str("abc"),
            Err(BetError::InvalidState)
        );
    }

    #[test]
    fn second_round_needs_resolution() {
        let mut engine = tens();
        engine.start_round(10).unwrap();
        assert_eq!(engine.start_round(10), Err(BetError::InvalidState));
        assert_eq!(engine.player_hand().len(), 2);
        assert_eq!(engine.dealer_hand().len(), 2);
    }
}
