use crate::agents::{BasicStrategyAgent, PlayerAgent, ThresholdAgent};
use crate::engine::{Phase, PlayerAction};
use crate::session::{Session, SessionError, DEFAULT_BANKROLL, DEFAULT_BET, MAX_BANKROLL};
use std::time::{Duration, Instant};

use super::SeedMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    ToggleHistory,
    HistoryUp,
    HistoryDown,
    Deal,
    Hit,
    Stand,
    Autoplay,
    BetInc,
    BetDec,
    AmountOpen,
    AmountDigit(u8),
    AmountBackspace,
    AmountSubmit,
    AmountCancel,
}

/// Which agent plays the hand when autoplay is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayStrategy {
    Basic,
    DealerMimic,
}

impl AutoplayStrategy {
    pub fn label(self) -> &'static str {
        match self {
            AutoplayStrategy::Basic => "Basic strategy",
            AutoplayStrategy::DealerMimic => "Dealer mimic",
        }
    }

    pub(crate) fn agent(self) -> Box<dyn PlayerAgent> {
        match self {
            AutoplayStrategy::Basic => Box::new(BasicStrategyAgent::new()),
            AutoplayStrategy::DealerMimic => Box::new(ThresholdAgent::default()),
        }
    }
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub session: Session,
    /// Bet used by the next deal.
    pub bet: u64,
    pub autoplay: AutoplayStrategy,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_bankroll: u64,
    pub cfg_bet: u64,
    pub cfg_seed: SeedMode,
    pub cfg_autoplay: AutoplayStrategy,
    pub(crate) seed: SeedMode,
    help_open: bool,
    history_open: bool,
    history_offset: usize,
    amount_entry: Option<String>,
    amount_entry_error: Option<String>,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_BANKROLL, DEFAULT_BET, None)
    }
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;
    pub const BET_STEP: u64 = 5;
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);

    /// Start on the menu with the given defaults (usually from the command line).
    pub fn new(bankroll: u64, bet: u64, seed: Option<u64>) -> Self {
        let bankroll = bankroll.clamp(1, MAX_BANKROLL);
        let bet = bet.clamp(1, bankroll);
        let seed = seed.map_or(SeedMode::Random, SeedMode::Fixed);
        Self {
            scene: Scene::Menu,
            session: Session::new(bankroll, seed.value()),
            bet,
            autoplay: AutoplayStrategy::Basic,
            menu_index: 0,
            cfg_bankroll: bankroll,
            cfg_bet: bet,
            cfg_seed: seed,
            cfg_autoplay: AutoplayStrategy::Basic,
            seed,
            help_open: false,
            history_open: false,
            history_offset: 0,
            amount_entry: None,
            amount_entry_error: None,
            action_error: None,
            action_error_at: None,
        }
    }

    /// Player is being asked for a decision.
    pub fn can_act(&self) -> bool {
        self.scene == Scene::Table
            && self.session.round().is_some_and(|r| r.phase() == Phase::PlayerTurn)
    }

    pub fn can_deal(&self) -> bool {
        self.scene == Scene::Table && !self.session.in_round() && !self.session.is_over()
    }

    /// The dealer's first card stays face down until the player is done.
    pub fn dealer_hole_hidden(&self) -> bool {
        self.can_act()
    }

    /// Suggested move for the current hand, if the player is to act.
    pub fn hint(&self) -> Option<PlayerAction> {
        if !self.can_act() {
            return None;
        }
        let round = self.session.round()?;
        let upcard = round.dealer_upcard()?;
        Some(BasicStrategyAgent::advise(round.player(), upcard))
    }

    pub fn amount_entry_active(&self) -> bool {
        self.amount_entry.is_some()
    }

    pub fn amount_entry_text(&self) -> Option<&str> {
        self.amount_entry.as_deref()
    }

    pub fn amount_entry_error(&self) -> Option<&str> {
        self.amount_entry_error.as_deref()
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    fn set_action_error(&mut self, err: &SessionError) {
        self.action_error = Some(err.to_string());
        self.action_error_at = Some(Instant::now());
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn close_history(&mut self) {
        self.history_open = false;
    }

    fn run(&mut self, result: Result<(), SessionError>) -> bool {
        match result {
            Ok(()) => {
                self.clear_action_error();
                self.clamp_bet();
                true
            }
            Err(err) => {
                self.set_action_error(&err);
                false
            }
        }
    }

    /// Keep the next bet inside the bankroll after money moves.
    fn clamp_bet(&mut self) {
        let bankroll = self.session.bankroll();
        if bankroll > 0 {
            self.bet = self.bet.clamp(1, bankroll);
        }
    }

    fn adjust_bet(&mut self, delta: i64) {
        let bankroll = self.session.bankroll();
        if bankroll == 0 || self.session.in_round() {
            return;
        }
        let step = Self::BET_STEP.saturating_mul(delta.unsigned_abs());
        let next = if delta >= 0 {
            self.bet.saturating_add(step)
        } else {
            self.bet.saturating_sub(step)
        };
        self.bet = next.clamp(1, bankroll);
    }

    fn open_amount_entry(&mut self) -> bool {
        if !self.can_deal() {
            return false;
        }
        self.amount_entry = Some(self.bet.to_string());
        self.amount_entry_error = None;
        true
    }

    fn amount_entry_backspace(&mut self) {
        if let Some(buf) = self.amount_entry.as_mut() {
            buf.pop();
        }
        self.amount_entry_error = None;
    }

    fn amount_entry_push_digit(&mut self, digit: u8) {
        if let Some(buf) = self.amount_entry.as_mut() {
            if buf.len() >= 12 {
                return;
            }
            buf.push(char::from(b'0' + digit));
        }
        self.amount_entry_error = None;
    }

    fn amount_entry_submit(&mut self) -> bool {
        let Some(buf) = self.amount_entry.as_ref() else {
            return false;
        };
        let amount = match buf.parse::<u64>() {
            Ok(v) => v,
            Err(_) => {
                self.amount_entry_error = Some("Invalid amount".to_string());
                return false;
            }
        };
        if let Err(err) = self.session.validate_bet(amount) {
            self.amount_entry_error = Some(err.to_string());
            return false;
        }
        self.bet = amount;
        self.amount_entry = None;
        self.amount_entry_error = None;
        true
    }

    fn amount_entry_cancel(&mut self) {
        self.amount_entry = None;
        self.amount_entry_error = None;
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    self.history_open = false;
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::ToggleHistory => {
                if self.scene == Scene::Table {
                    self.help_open = false;
                    if !self.history_open {
                        self.history_offset = 0;
                    }
                    self.history_open = !self.history_open;
                }
                false
            }
            InputAction::HistoryUp => {
                if self.scene == Scene::Table && self.history_open {
                    let max_offset =
                        self.session.history().len().saturating_sub(Self::HISTORY_PAGE_SIZE);
                    self.history_offset = (self.history_offset + 1).min(max_offset);
                }
                false
            }
            InputAction::HistoryDown => {
                if self.scene == Scene::Table && self.history_open && self.history_offset > 0 {
                    self.history_offset -= 1;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::Deal => self.deal(),
            InputAction::Hit => self.player_action(PlayerAction::Hit),
            InputAction::Stand => self.player_action(PlayerAction::Stand),
            InputAction::Autoplay => self.autoplay_hand(),
            InputAction::BetInc => {
                self.adjust_bet(1);
                false
            }
            InputAction::BetDec => {
                self.adjust_bet(-1);
                false
            }
            InputAction::AmountOpen => self.open_amount_entry(),
            InputAction::AmountDigit(d) => {
                self.amount_entry_push_digit(d);
                false
            }
            InputAction::AmountBackspace => {
                self.amount_entry_backspace();
                false
            }
            InputAction::AmountSubmit => self.amount_entry_submit(),
            InputAction::AmountCancel => {
                self.amount_entry_cancel();
                false
            }
        }
    }

    pub fn deal(&mut self) -> bool {
        if self.scene != Scene::Table {
            return false;
        }
        let result = self.session.start_round(self.bet);
        self.run(result)
    }

    fn player_action(&mut self, action: PlayerAction) -> bool {
        if self.scene != Scene::Table {
            return false;
        }
        let result = self.session.act(action);
        self.run(result)
    }

    fn autoplay_hand(&mut self) -> bool {
        if !self.can_act() {
            return false;
        }
        let mut agent = self.autoplay.agent();
        let result = self.session.autoplay(agent.as_mut());
        self.run(result)
    }

    /// Periodic housekeeping from the controller loop.
    pub fn on_tick(&mut self) {
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
    }
}
