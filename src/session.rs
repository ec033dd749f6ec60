//! Bankroll and round bookkeeping across many rounds.
//!
//! A [`Session`] owns the money; each round gets a fresh [`Shoe`] and a fresh
//! [`RoundEngine`], so nothing leaks from one round into the next.

use crate::agents::PlayerAgent;
use crate::engine::{Outcome, Phase, PlayerAction, RoundEngine, RoundError, Settlement, MAX_BET};
use crate::shoe::Shoe;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const DEFAULT_BANKROLL: u64 = 100;
pub const DEFAULT_BET: u64 = 10;

/// Bankrolls are capped so every valid bet is a valid engine stake.
pub const MAX_BANKROLL: u64 = MAX_BET;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("bet must be between {min} and {max}, got {got}")]
    InvalidBet { min: u64, max: u64, got: u64 },
    #[error("a round is already in progress")]
    RoundInProgress,
    #[error("no round in progress")]
    NoRound,
    #[error("bankroll is empty")]
    Bankrupt,
    #[error(transparent)]
    Round(#[from] RoundError),
}

/// One finished round as kept in the session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct RoundSummary {
    pub round: u32,
    pub bet: u64,
    pub outcome: Option<Outcome>,
    pub payout: i64,
    pub player_total: u8,
    pub dealer_total: u8,
    pub bankroll_after: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub rounds: u32,
    pub wins: u32,
    pub losses: u32,
    pub pushes: u32,
    pub blackjacks: u32,
    pub forfeits: u32,
    pub net: i64,
}

#[derive(Debug)]
pub struct Session {
    bankroll: u64,
    starting_bankroll: u64,
    rng: ChaCha8Rng,
    round: Option<RoundEngine>,
    history: Vec<RoundSummary>,
    stats: SessionStats,
}

impl Session {
    /// `seed` fixes every shuffle in the session; `None` picks a random one.
    /// `bankroll` is clamped to [`MAX_BANKROLL`].
    pub fn new(bankroll: u64, seed: Option<u64>) -> Self {
        let bankroll = bankroll.min(MAX_BANKROLL);
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        Self {
            bankroll,
            starting_bankroll: bankroll,
            rng: ChaCha8Rng::seed_from_u64(seed),
            round: None,
            history: Vec::new(),
            stats: SessionStats::default(),
        }
    }

    pub fn bankroll(&self) -> u64 {
        self.bankroll
    }

    pub fn starting_bankroll(&self) -> u64 {
        self.starting_bankroll
    }

    pub fn round(&self) -> Option<&RoundEngine> {
        self.round.as_ref()
    }

    pub fn history(&self) -> &[RoundSummary] {
        &self.history
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn last_settlement(&self) -> Option<Settlement> {
        self.round.as_ref().and_then(|r| r.settlement())
    }

    /// A round has been dealt and is not settled yet.
    pub fn in_round(&self) -> bool {
        self.round.as_ref().is_some_and(|r| r.phase() != Phase::Settled)
    }

    pub fn is_over(&self) -> bool {
        self.bankroll == 0 && !self.in_round()
    }

    /// Check a bet against the `[1, bankroll]` range.
    pub fn validate_bet(&self, bet: u64) -> Result<(), SessionError> {
        if self.bankroll == 0 {
            return Err(SessionError::Bankrupt);
        }
        if bet == 0 || bet > self.bankroll {
            return Err(SessionError::InvalidBet { min: 1, max: self.bankroll, got: bet });
        }
        Ok(())
    }

    /// Shuffle a fresh shoe and deal a round.
    pub fn start_round(&mut self, bet: u64) -> Result<(), SessionError> {
        let shoe = Shoe::new(&mut self.rng);
        self.start_round_with_shoe(bet, shoe)
    }

    /// Deal a round from a caller-provided shoe (replays and tests).
    pub fn start_round_with_shoe(&mut self, bet: u64, shoe: Shoe) -> Result<(), SessionError> {
        if self.in_round() {
            return Err(SessionError::RoundInProgress);
        }
        self.validate_bet(bet)?;
        let round = RoundEngine::deal(shoe, bet)?;
        self.round = Some(round);
        self.advance()
    }

    pub fn hit(&mut self) -> Result<(), SessionError> {
        self.act(PlayerAction::Hit)
    }

    pub fn stand(&mut self) -> Result<(), SessionError> {
        self.act(PlayerAction::Stand)
    }

    pub fn act(&mut self, action: PlayerAction) -> Result<(), SessionError> {
        let round = self.round.as_mut().ok_or(SessionError::NoRound)?;
        round.act(action)?;
        self.advance()
    }

    /// Let `agent` make every remaining player decision of the current round.
    pub fn autoplay(&mut self, agent: &mut dyn PlayerAgent) -> Result<(), SessionError> {
        loop {
            let round = self.round.as_ref().ok_or(SessionError::NoRound)?;
            if round.phase() != Phase::PlayerTurn {
                return Ok(());
            }
            let Some(upcard) = round.dealer_upcard() else {
                return Ok(());
            };
            let action = agent.decide(round.player(), upcard);
            self.act(action)?;
        }
    }

    /// Give up on an unsettled round. The bet is lost.
    pub fn abandon_round(&mut self) -> Result<(), SessionError> {
        if !self.in_round() {
            return Err(SessionError::NoRound);
        }
        let Some(round) = self.round.take() else {
            return Err(SessionError::NoRound);
        };
        let bet = round.bet();
        let lost = i64::try_from(bet).unwrap_or(i64::MAX);
        self.bankroll = self.bankroll.saturating_sub(bet);
        self.stats.rounds += 1;
        self.stats.forfeits += 1;
        self.stats.losses += 1;
        self.stats.net = self.stats.net.saturating_sub(lost);
        self.push_summary(&round, None, -lost);
        log::warn!("round abandoned, bet {bet} forfeited; bankroll {}", self.bankroll);
        Ok(())
    }

    /// Once the player's turn is over, play the dealer and book the result.
    /// A dealer turn that cannot finish voids the round: no money moves and
    /// the session is ready to deal again.
    fn advance(&mut self) -> Result<(), SessionError> {
        let Some(round) = self.round.as_mut() else {
            return Ok(());
        };
        if round.phase() != Phase::DealerTurn {
            return Ok(());
        }
        let bet = round.bet();
        match round.play_dealer() {
            Ok(settlement) => {
                self.apply(settlement);
                Ok(())
            }
            Err(err) => {
                self.round = None;
                log::warn!("dealer turn failed: {err}; round voided, bet {bet} returned");
                Err(err.into())
            }
        }
    }

    fn apply(&mut self, settlement: Settlement) {
        let magnitude = settlement.payout.unsigned_abs();
        self.bankroll = if settlement.payout >= 0 {
            self.bankroll.saturating_add(magnitude).min(MAX_BANKROLL)
        } else {
            self.bankroll.saturating_sub(magnitude)
        };
        let outcome = settlement.outcome;
        self.stats.rounds += 1;
        self.stats.net = self.stats.net.saturating_add(settlement.payout);
        if outcome.is_push() {
            self.stats.pushes += 1;
        } else if outcome.player_won() {
            self.stats.wins += 1;
        } else {
            self.stats.losses += 1;
        }
        if outcome == Outcome::PlayerBlackjack {
            self.stats.blackjacks += 1;
        }
        if let Some(round) = self.round.take() {
            self.push_summary(&round, Some(outcome), settlement.payout);
            self.round = Some(round);
        }
        log::info!(
            "round {} booked: {:?} {:+}, bankroll {}",
            self.stats.rounds,
            outcome,
            settlement.payout,
            self.bankroll
        );
    }

    fn push_summary(&mut self, round: &RoundEngine, outcome: Option<Outcome>, payout: i64) {
        self.history.push(RoundSummary {
            round: self.stats.rounds,
            bet: round.bet(),
            outcome,
            payout,
            player_total: round.player().total(),
            dealer_total: round.dealer().total(),
            bankroll_after: self.bankroll,
        });
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_BANKROLL, None)
    }
}
