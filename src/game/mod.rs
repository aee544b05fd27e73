//! Round engine and session state.

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::{DealerHand, Hand};
use crate::options::SessionOptions;
use crate::result::RoundResult;
use crate::shoe::{DrawSource, InfiniteShoe};

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::RoundState;

/// A single-player blackjack engine.
///
/// The engine owns the wallet, the current bet, both hands, the high score
/// and the round state. Every operation runs to completion before returning,
/// including the dealer's turn, so the engine is never observed mid-draw.
///
/// Cards come from a [`DrawSource`]; [`Engine::new`] uses a seeded
/// [`InfiniteShoe`], and [`Engine::with_source`] accepts any other source.
#[derive(Debug, Clone)]
pub struct Engine<S = InfiniteShoe> {
    /// Where cards come from.
    shoe: S,
    /// Session options.
    options: SessionOptions,
    /// Current round state.
    state: RoundState,
    /// Wallet balance.
    wallet: i64,
    /// Stake for the current round, `0` while idle.
    bet: i64,
    /// Whether the player doubled down this round.
    doubled: bool,
    /// Highest wallet balance seen this session.
    high_score: i64,
    /// Player's hand.
    player_hand: Hand,
    /// Dealer's hand.
    dealer_hand: DealerHand,
    /// Result of the most recently resolved round.
    last_result: Option<RoundResult>,
    /// Set once the wallet runs dry. Never cleared.
    session_over: bool,
}

impl Engine<InfiniteShoe> {
    /// Creates a new engine drawing from an [`InfiniteShoe`] seeded with `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{Engine, RoundState, SessionOptions};
    ///
    /// let engine = Engine::new(SessionOptions::default(), 42);
    /// assert_eq!(engine.wallet(), 1000);
    /// assert_eq!(engine.state(), RoundState::Idle);
    /// ```
    #[must_use]
    pub fn new(options: SessionOptions, seed: u64) -> Self {
        Self::with_source(options, InfiniteShoe::new(seed))
    }
}

impl<S> Engine<S> {
    /// Creates a new engine drawing cards from `shoe`.
    #[must_use]
    pub fn with_source(options: SessionOptions, shoe: S) -> Self {
        Self {
            shoe,
            options,
            state: RoundState::Idle,
            wallet: options.starting_wallet,
            bet: 0,
            doubled: false,
            high_score: options.starting_high_score.max(options.starting_wallet),
            player_hand: Hand::new(),
            dealer_hand: DealerHand::new(),
            last_result: None,
            session_over: options.starting_wallet <= 0,
        }
    }

    /// Returns the session options.
    pub const fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Returns the current round state.
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the wallet balance.
    pub const fn wallet(&self) -> i64 {
        self.wallet
    }

    /// Returns the stake for the current round, or `0` while idle.
    pub const fn bet(&self) -> i64 {
        self.bet
    }

    /// Returns whether the player doubled down this round.
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Returns the highest wallet balance seen this session.
    pub const fn high_score(&self) -> i64 {
        self.high_score
    }

    /// Returns the player's hand.
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    ///
    /// Use [`DealerHand::visible_cards`] to respect the hidden hole card.
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the result of the most recently resolved round.
    ///
    /// Cleared when the next round starts.
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns the message for the most recently resolved round.
    pub fn last_outcome_text(&self) -> Option<&'static str> {
        self.last_result.map(|result| result.outcome.message())
    }

    /// Returns whether the wallet has run dry. No further rounds may start.
    pub const fn is_session_over(&self) -> bool {
        self.session_over
    }

    /// Discards the hands of a resolved round and returns to [`RoundState::Idle`].
    ///
    /// Starting a new round from [`RoundState::Resolved`] does this implicitly.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not resolved.
    pub fn clear_round(&mut self) -> Result<(), ActionError> {
        if self.state != RoundState::Resolved {
            return Err(ActionError::InvalidState);
        }

        self.reset_table();
        self.state = RoundState::Idle;
        Ok(())
    }

    /// Clears hands and the stake.
    fn reset_table(&mut self) {
        self.player_hand.clear();
        self.dealer_hand.clear();
        self.bet = 0;
        self.doubled = false;
    }
}

impl<S: DrawSource> Engine<S> {
    /// Draws a card from the shoe.
    fn draw(&mut self) -> Card {
        self.shoe.draw()
    }
}
