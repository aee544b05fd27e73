//! Error types for engine operations.
//!
//! Every error rejects the requested operation and leaves the engine
//! untouched. The `Display` strings are suitable for showing to the player.

use thiserror::Error;

/// Why a bet amount was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidBet {
    /// The bet text is not a whole number.
    #[error("please enter a valid number")]
    NotNumeric,
    /// The bet is zero or negative.
    #[error("bet must be at least 1")]
    NotPositive,
    /// The bet is larger than the wallet.
    #[error("bet of {bet} exceeds wallet balance of {wallet}")]
    ExceedsWallet {
        /// Requested bet.
        bet: i64,
        /// Wallet balance at the time of the request.
        wallet: i64,
    },
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// The bet amount was refused.
    #[error("invalid bet: {0}")]
    InvalidBet(#[from] InvalidBet),
    /// A round is already in progress.
    #[error("invalid game state for starting a round")]
    InvalidState,
    /// The wallet is empty and the session has ended.
    #[error("you're out of money")]
    SessionOver,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Not enough money in the wallet to double the bet.
    #[error("not enough to double down")]
    InsufficientFunds,
}

/// Error returned when a card label cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown card label")]
pub struct CardParseError;
