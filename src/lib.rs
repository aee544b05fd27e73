//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides an [`Engine`] type that owns the wallet, the bet, both
//! hands and the round state machine. A presentation layer drives it with
//! [`Engine::start_round`], [`Engine::hit`], [`Engine::stand`] and
//! [`Engine::double_down`], then renders whatever the query methods expose.
//!
//! Cards come from an [`InfiniteShoe`]: every draw is an independent, uniform
//! pick from the thirteen ranks.
//!
//! # Example
//!
//! ```
//! use bjsolo::{Engine, RoundState, SessionOptions};
//!
//! let mut engine = Engine::new(SessionOptions::default(), 42);
//! engine.start_round(10).unwrap();
//! assert_eq!(engine.state(), RoundState::PlayerTurn);
//!
//! let result = engine.stand().unwrap();
//! assert_eq!(engine.state(), RoundState::Resolved);
//! assert_eq!(engine.wallet(), 1000 + result.wallet_delta);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;

// Re-export main types
pub use card::{Card, RANKS};
pub use error::{ActionError, BetError, CardParseError, InvalidBet};
pub use game::{Engine, RoundState};
pub use hand::{DealerHand, Hand, hand_value};
pub use options::SessionOptions;
pub use result::{Outcome, RoundResult};
pub use shoe::{DrawSource, InfiniteShoe};
