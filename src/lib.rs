//! blackjack-rs: single-player blackjack against an automated dealer
//!
//! Layers, leaf first:
//! - [`cards`] and [`shoe`]: immutable cards and a shuffled 52-card shoe
//! - [`scoring`] and [`hand`]: soft-ace valuation and the hands built on it
//! - [`engine`]: one round as a state machine, dealer play, and payouts
//! - [`session`]: bankroll and history across rounds
//! - [`agents`]: automated hit/stand policies
//! - [`tui`]: the interactive terminal front end
//!
//! ## Quick start: play a round
//! ```
//! use blackjack_rs::cards::parse_cards;
//! use blackjack_rs::engine::{Outcome, Phase, RoundEngine};
//! use blackjack_rs::shoe::Shoe;
//!
//! // dealer gets the 1st and 3rd card, player the 2nd and 4th
//! let shoe = Shoe::from_draw_order(parse_cards("10c 10s 8d 9h").unwrap()).unwrap();
//! let mut round = RoundEngine::deal(shoe, 5).unwrap();
//! assert_eq!(round.phase(), Phase::PlayerTurn);
//!
//! round.stand().unwrap();
//! let settlement = round.play_dealer().unwrap();
//! assert_eq!(settlement.outcome, Outcome::PlayerWin);
//! assert_eq!(settlement.payout, 5);
//! ```
//!
//! ## TUI
//! ```sh
//! cargo run --bin blackjack-rs -- --bankroll 200 --seed 7
//! ```

pub mod agents;
pub mod cards;
pub mod engine;
pub mod hand;
pub mod scoring;
pub mod session;
pub mod shoe;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
