//! Round result types for resolution.

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player went over 21. Checked before anything else.
    PlayerBust,
    /// Dealer busted or player has the higher total.
    Win,
    /// Equal totals.
    Push,
    /// Dealer has the higher total.
    DealerWins,
}

impl Outcome {
    /// Returns the message shown to the player for this outcome.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBust => "You busted! Dealer wins.",
            Self::Win => "You win!",
            Self::Push => "It's a tie!",
            Self::DealerWins => "Dealer wins.",
        }
    }

    /// Returns whether the player lost the stake.
    #[must_use]
    pub const fn is_loss(self) -> bool {
        matches!(self, Self::PlayerBust | Self::DealerWins)
    }

    /// Returns the wallet change for a stake of `bet`.
    ///
    /// A push normally returns nothing. After a double down `bet` is the
    /// doubled stake, and a push refunds its extra half.
    #[must_use]
    pub const fn payout(self, bet: i64, doubled: bool) -> i64 {
        match self {
            Self::Win => bet,
            Self::Push if doubled => bet / 2,
            Self::Push => 0,
            Self::PlayerBust | Self::DealerWins => -bet,
        }
    }
}

/// Result of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round ended.
    pub outcome: Outcome,
    /// The stake at resolution (already doubled after a double down).
    pub bet: i64,
    /// Whether the player doubled down.
    pub doubled: bool,
    /// The player's final hand value.
    pub player_value: u32,
    /// The dealer's final hand value.
    pub dealer_value: u32,
    /// Change applied to the wallet.
    pub wallet_delta: i64,
    /// Wallet balance after payout.
    pub wallet: i64,
    /// High score after payout.
    pub high_score: i64,
    /// Whether this round emptied the wallet and ended the session.
    pub session_over: bool,
}
