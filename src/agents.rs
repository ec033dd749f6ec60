//! Agents: automated decision policies for the player seat.
//!
//! The TUI uses them for hints and autoplay; simulations and benchmarks use
//! them to play rounds without a human.

use crate::cards::Card;
use crate::engine::{Phase, PlayerAction, RoundEngine, RoundError, Settlement};
use crate::hand::Hand;
use crate::scoring::DEALER_STANDS_ON;
use crate::shoe::Shoe;

/// Decides hit or stand for the player's hand given the dealer's upcard.
pub trait PlayerAgent {
    fn decide(&mut self, hand: &Hand, upcard: Card) -> PlayerAction;

    fn name(&self) -> &'static str {
        "agent"
    }
}

/// Hits below a fixed total, ignoring the dealer. `stand_on = 17` plays
/// exactly like the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdAgent {
    pub stand_on: u8,
}

impl ThresholdAgent {
    pub fn new(stand_on: u8) -> Self {
        Self { stand_on }
    }
}

impl Default for ThresholdAgent {
    fn default() -> Self {
        Self::new(DEALER_STANDS_ON)
    }
}

impl PlayerAgent for ThresholdAgent {
    fn decide(&mut self, hand: &Hand, _upcard: Card) -> PlayerAction {
        if hand.total() < self.stand_on {
            PlayerAction::Hit
        } else {
            PlayerAction::Stand
        }
    }

    fn name(&self) -> &'static str {
        "threshold"
    }
}

/// Basic strategy restricted to hit and stand (no doubles, no splits).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasicStrategyAgent;

impl BasicStrategyAgent {
    pub fn new() -> Self {
        Self
    }

    /// Stateless lookup, handy for hints.
    pub fn advise(hand: &Hand, upcard: Card) -> PlayerAction {
        let total = hand.total();
        // ace upcard counts 11, above every ten-valued card
        let up = upcard.rank().points();
        let stand = if hand.is_soft() {
            match total {
                19.. => true,
                18 => up <= 8,
                _ => false,
            }
        } else {
            match total {
                17.. => true,
                13..=16 => up <= 6,
                12 => (4..=6).contains(&up),
                _ => false,
            }
        };
        if stand {
            PlayerAction::Stand
        } else {
            PlayerAction::Hit
        }
    }
}

impl PlayerAgent for BasicStrategyAgent {
    fn decide(&mut self, hand: &Hand, upcard: Card) -> PlayerAction {
        Self::advise(hand, upcard)
    }

    fn name(&self) -> &'static str {
        "basic"
    }
}

/// Play a complete round from `shoe` with `agent` making the player's
/// decisions.
pub fn play_round(
    shoe: Shoe,
    bet: u64,
    agent: &mut dyn PlayerAgent,
) -> Result<Settlement, RoundError> {
    let mut round = RoundEngine::deal(shoe, bet)?;
    while round.phase() == Phase::PlayerTurn {
        let Some(upcard) = round.dealer_upcard() else {
            break;
        };
        let action = agent.decide(round.player(), upcard);
        round.act(action)?;
    }
    round.play_dealer()
}
