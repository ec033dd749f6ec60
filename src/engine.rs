//! One round of blackjack as an explicit state machine.
//!
//! `Dealing -> PlayerTurn -> DealerTurn -> Settled`. The engine never
//! blocks or prompts; a front end asks for a decision and then calls
//! [`RoundEngine::hit`] or [`RoundEngine::stand`].

use crate::cards::Card;
use crate::hand::Hand;
use crate::scoring::{score, DEALER_STANDS_ON};
use crate::shoe::{Shoe, ShoeError};
use std::fmt;
use std::str::FromStr;

/// Largest accepted bet. Payouts are signed, so a stake must fit in `i64`.
pub const MAX_BET: u64 = i64::MAX as u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Phase {
    Dealing,
    PlayerTurn,
    DealerTurn,
    Settled,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Dealing => "dealing",
            Phase::PlayerTurn => "player turn",
            Phase::DealerTurn => "dealer turn",
            Phase::Settled => "settled",
        };
        f.write_str(s)
    }
}

/// The only two decisions a player can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Hit,
    Stand,
}

impl PlayerAction {
    pub fn label(self) -> &'static str {
        match self {
            PlayerAction::Hit => "Hit",
            PlayerAction::Stand => "Stand",
        }
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionParseError {
    #[error("invalid action: '{0}' (expected hit or stand)")]
    Invalid(String),
}

impl FromStr for PlayerAction {
    type Err = ActionParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hit" | "h" => Ok(PlayerAction::Hit),
            "stand" | "s" => Ok(PlayerAction::Stand),
            _ => Err(ActionParseError::Invalid(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Outcome {
    PlayerBlackjack,
    DealerBlackjack,
    PushBlackjack,
    PlayerBust,
    DealerBust,
    PlayerWin,
    DealerWin,
    PushTie,
}

impl Outcome {
    pub fn label(self) -> &'static str {
        match self {
            Outcome::PlayerBlackjack => "Blackjack! Player wins",
            Outcome::DealerBlackjack => "Dealer blackjack",
            Outcome::PushBlackjack => "Push: both have blackjack",
            Outcome::PlayerBust => "Player busts",
            Outcome::DealerBust => "Dealer busts",
            Outcome::PlayerWin => "Player wins",
            Outcome::DealerWin => "Dealer wins",
            Outcome::PushTie => "Push",
        }
    }

    pub fn is_push(self) -> bool {
        matches!(self, Outcome::PushBlackjack | Outcome::PushTie)
    }

    pub fn player_won(self) -> bool {
        matches!(self, Outcome::PlayerBlackjack | Outcome::DealerBust | Outcome::PlayerWin)
    }
}

/// Outcome of a round and the signed amount to credit to the bankroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    pub outcome: Outcome,
    pub payout: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    Player,
    Dealer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundVerb {
    Deal,
    Hit,
    Stand,
    Bust,
    DealerHit,
    DealerStand,
    Settle,
}

impl RoundVerb {
    pub fn label(self) -> &'static str {
        match self {
            RoundVerb::Deal => "Deal",
            RoundVerb::Hit => "Hit",
            RoundVerb::Stand => "Stand",
            RoundVerb::Bust => "Bust",
            RoundVerb::DealerHit => "Dealer hits",
            RoundVerb::DealerStand => "Dealer stands",
            RoundVerb::Settle => "Settle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct RoundEvent {
    pub seat: Seat,
    pub verb: RoundVerb,
    pub card: Option<Card>,
    /// Seat's hand total after the event.
    pub total: u8,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundError {
    #[error(transparent)]
    Shoe(#[from] ShoeError),
    #[error("cannot {action} during {phase}")]
    InvalidAction { action: PlayerAction, phase: Phase },
    #[error("expected {expected}, round is in {actual}")]
    WrongPhase { expected: Phase, actual: Phase },
    #[error("bet must be between 1 and {}", MAX_BET)]
    InvalidBet,
}

/// Drive the dealer's hand to completion: draw while the total is below 17
/// and the hand has not busted. Returns the final total.
pub fn play_dealer_turn(dealer: &mut Hand, shoe: &mut Shoe) -> Result<u8, ShoeError> {
    while dealer.total() < DEALER_STANDS_ON && !dealer.is_busted() {
        dealer.add_card(shoe.draw()?);
    }
    Ok(dealer.total())
}

/// Resolve final hands against a bet.
///
/// Order matters: blackjacks first, then player bust, then dealer bust,
/// then a plain comparison of totals. Stakes above [`MAX_BET`] are settled
/// as `MAX_BET`, and a blackjack payout saturates at `i64::MAX`.
///
/// ```
/// use blackjack_rs::engine::{settle, Outcome};
/// use blackjack_rs::hand::Hand;
///
/// let player: Hand = "As Kh".parse().unwrap();
/// let dealer: Hand = "9c 8d".parse().unwrap();
/// let s = settle(&player, &dealer, 10);
/// assert_eq!(s.outcome, Outcome::PlayerBlackjack);
/// assert_eq!(s.payout, 15);
/// ```
pub fn settle(player: &Hand, dealer: &Hand, bet: u64) -> Settlement {
    let stake = i64::try_from(bet.min(MAX_BET)).unwrap_or(i64::MAX);
    let (outcome, payout) = match (player.is_blackjack(), dealer.is_blackjack()) {
        (true, true) => (Outcome::PushBlackjack, 0),
        // 3:2, rounded down
        (true, false) => (Outcome::PlayerBlackjack, stake.saturating_add(stake / 2)),
        (false, true) => (Outcome::DealerBlackjack, -stake),
        (false, false) => {
            if player.is_busted() {
                (Outcome::PlayerBust, -stake)
            } else if dealer.is_busted() {
                (Outcome::DealerBust, stake)
            } else if player.total() > dealer.total() {
                (Outcome::PlayerWin, stake)
            } else if dealer.total() > player.total() {
                (Outcome::DealerWin, -stake)
            } else {
                (Outcome::PushTie, 0)
            }
        }
    };
    Settlement { outcome, payout }
}

/// Owns the shoe and both hands for a single round.
#[derive(Debug, Clone)]
pub struct RoundEngine {
    shoe: Shoe,
    player: Hand,
    dealer: Hand,
    phase: Phase,
    bet: u64,
    settlement: Option<Settlement>,
    events: Vec<RoundEvent>,
}

impl RoundEngine {
    /// Take a bet and deal two cards each, dealer first in each pair.
    /// A player blackjack skips the player's turn.
    pub fn deal(shoe: Shoe, bet: u64) -> Result<Self, RoundError> {
        if bet == 0 || bet > MAX_BET {
            return Err(RoundError::InvalidBet);
        }
        let mut round = Self {
            shoe,
            player: Hand::new(),
            dealer: Hand::new(),
            phase: Phase::Dealing,
            bet,
            settlement: None,
            events: Vec::with_capacity(12),
        };
        for _ in 0..2 {
            round.deal_to(Seat::Dealer)?;
            round.deal_to(Seat::Player)?;
        }
        round.phase =
            if round.player.is_blackjack() { Phase::DealerTurn } else { Phase::PlayerTurn };
        log::debug!(
            "dealt player {:?} ({}) dealer {:?} -> {}",
            round.player.cards(),
            round.player.total(),
            round.dealer.cards(),
            round.phase
        );
        Ok(round)
    }

    fn deal_to(&mut self, seat: Seat) -> Result<(), RoundError> {
        let card = self.shoe.draw()?;
        let hand = match seat {
            Seat::Player => &mut self.player,
            Seat::Dealer => &mut self.dealer,
        };
        hand.add_card(card);
        let total = hand.total();
        self.record(seat, RoundVerb::Deal, Some(card), total);
        Ok(())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    pub fn bet(&self) -> u64 {
        self.bet
    }

    /// Dealer card shown face up while the player acts (the second one dealt).
    pub fn dealer_upcard(&self) -> Option<Card> {
        self.dealer.cards().get(1).copied()
    }

    pub fn shoe_remaining(&self) -> usize {
        self.shoe.len()
    }

    pub fn settlement(&self) -> Option<Settlement> {
        self.settlement
    }

    pub fn events(&self) -> &[RoundEvent] {
        &self.events
    }

    fn ensure_player_turn(&self, action: PlayerAction) -> Result<(), RoundError> {
        if self.phase != Phase::PlayerTurn {
            return Err(RoundError::InvalidAction { action, phase: self.phase });
        }
        Ok(())
    }

    /// Draw one card for the player. Busting ends the player's turn.
    pub fn hit(&mut self) -> Result<Card, RoundError> {
        self.ensure_player_turn(PlayerAction::Hit)?;
        let card = self.shoe.draw()?;
        self.player.add_card(card);
        let total = self.player.total();
        self.record(Seat::Player, RoundVerb::Hit, Some(card), total);
        log::debug!("player hits {card} -> {total}");
        if self.player.is_busted() {
            self.record(Seat::Player, RoundVerb::Bust, None, total);
            self.phase = Phase::DealerTurn;
        }
        Ok(card)
    }

    pub fn stand(&mut self) -> Result<(), RoundError> {
        self.ensure_player_turn(PlayerAction::Stand)?;
        let total = self.player.total();
        self.record(Seat::Player, RoundVerb::Stand, None, total);
        self.phase = Phase::DealerTurn;
        Ok(())
    }

    pub fn act(&mut self, action: PlayerAction) -> Result<(), RoundError> {
        match action {
            PlayerAction::Hit => self.hit().map(|_| ()),
            PlayerAction::Stand => self.stand(),
        }
    }

    /// Run the dealer's turn and settle. The dealer plays even when the
    /// player has busted or holds a blackjack.
    pub fn play_dealer(&mut self) -> Result<Settlement, RoundError> {
        if self.phase != Phase::DealerTurn {
            return Err(RoundError::WrongPhase {
                expected: Phase::DealerTurn,
                actual: self.phase,
            });
        }
        let before = self.dealer.len();
        let result = play_dealer_turn(&mut self.dealer, &mut self.shoe);
        for i in before..self.dealer.len() {
            let cards = &self.dealer.cards()[..=i];
            let total = score(cards.iter().map(|c| c.rank())).total;
            let card = cards[i];
            self.record(Seat::Dealer, RoundVerb::DealerHit, Some(card), total);
        }
        let total = result?;
        let verb = if self.dealer.is_busted() { RoundVerb::Bust } else { RoundVerb::DealerStand };
        self.record(Seat::Dealer, verb, None, total);

        let settlement = settle(&self.player, &self.dealer, self.bet);
        self.record(Seat::Player, RoundVerb::Settle, None, self.player.total());
        self.settlement = Some(settlement);
        self.phase = Phase::Settled;
        log::info!(
            "round settled: {:?} payout {} (player {}, dealer {})",
            settlement.outcome,
            settlement.payout,
            self.player.total(),
            self.dealer.total()
        );
        Ok(settlement)
    }

    fn record(&mut self, seat: Seat, verb: RoundVerb, card: Option<Card>, total: u8) {
        self.events.push(RoundEvent { seat, verb, card, total });
    }
}
