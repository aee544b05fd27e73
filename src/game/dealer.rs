use log::{debug, info, warn};

use crate::result::{Outcome, RoundResult};
use crate::shoe::DrawSource;

use super::{Engine, RoundState};

/// The dealer draws below this total.
const DEALER_STANDS_AT: u32 = 17;

/// Decides the round from the final totals, bust checks first.
const fn decide(player_value: u32, dealer_value: u32) -> Outcome {
    if player_value > 21 {
        Outcome::PlayerBust
    } else if dealer_value > 21 || player_value > dealer_value {
        Outcome::Win
    } else if player_value == dealer_value {
        Outcome::Push
    } else {
        Outcome::DealerWins
    }
}

impl<S: DrawSource> Engine<S> {
    /// Dealer plays their hand.
    ///
    /// The dealer reveals their hole card and draws until reaching 17 or
    /// higher. Returns the number of cards drawn.
    fn dealer_play(&mut self) -> usize {
        self.state = RoundState::DealerTurn;
        self.dealer_hand.reveal_hole();

        let mut drawn = 0;
        while self.dealer_hand.value() < DEALER_STANDS_AT {
            let card = self.draw();
            self.dealer_hand.add_card(card);
            drawn += 1;
        }

        debug!(
            "dealer draws {drawn} card(s), hand {:?} ({})",
            self.dealer_hand.cards(),
            self.dealer_hand.value()
        );
        drawn
    }

    pub(super) fn play_dealer_and_resolve(&mut self) -> RoundResult {
        self.dealer_play();
        self.resolve()
    }

    /// Settles the round: decides the outcome, pays out, updates the high
    /// score and the session flag.
    pub(super) fn resolve(&mut self) -> RoundResult {
        self.dealer_hand.reveal_hole();

        let player_value = self.player_hand.value();
        let dealer_value = self.dealer_hand.value();
        let outcome = decide(player_value, dealer_value);

        let wallet_delta = outcome.payout(self.bet, self.doubled);
        self.wallet = self.wallet.saturating_add(wallet_delta);
        self.high_score = self.high_score.max(self.wallet);

        if self.wallet <= 0 {
            self.session_over = true;
        }

        let result = RoundResult {
            outcome,
            bet: self.bet,
            doubled: self.doubled,
            player_value,
            dealer_value,
            wallet_delta,
            wallet: self.wallet,
            high_score: self.high_score,
            session_over: self.session_over,
        };

        info!(
            "{} player {player_value} vs dealer {dealer_value}, wallet {} ({wallet_delta:+}), high score {}",
            outcome.message(),
            self.wallet,
            self.high_score
        );
        if self.session_over {
            warn!("wallet empty at {}, session over", self.wallet);
        }

        self.last_result = Some(result);
        self.state = RoundState::Resolved;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bust_is_checked_before_dealer_bust() {
        assert_eq!(decide(22, 25), Outcome::PlayerBust);
        assert_eq!(decide(12, 22), Outcome::Win);
        assert_eq!(decide(20, 19), Outcome::Win);
        assert_eq!(decide(18, 18), Outcome::Push);
        assert_eq!(decide(17, 20), Outcome::DealerWins);
    }
}
