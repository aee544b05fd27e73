//! Round state types.

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundState {
    /// No bet placed, waiting for a round to start.
    #[default]
    Idle,
    /// Cards are dealt and the player may hit, stand or double down.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Payout has been applied. A new round may start.
    Resolved,
}

impl RoundState {
    /// Returns whether a new round may start from this state.
    #[must_use]
    pub const fn accepts_bets(self) -> bool {
        matches!(self, Self::Idle | Self::Resolved)
    }
}
