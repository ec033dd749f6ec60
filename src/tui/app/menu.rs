use crate::session::{Session, MAX_BANKROLL};

use super::{AppState, AutoplayStrategy};

/// How each new session seeds its shuffles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedMode {
    Random,
    Fixed(u64),
}

impl SeedMode {
    pub fn value(self) -> Option<u64> {
        match self {
            SeedMode::Random => None,
            SeedMode::Fixed(s) => Some(s),
        }
    }

    fn label(self) -> String {
        match self {
            SeedMode::Random => "random".to_string(),
            SeedMode::Fixed(s) => s.to_string(),
        }
    }

    fn inc(self) -> Self {
        match self {
            SeedMode::Random => SeedMode::Fixed(0),
            SeedMode::Fixed(s) => SeedMode::Fixed(s.saturating_add(1)),
        }
    }

    fn dec(self) -> Self {
        match self {
            SeedMode::Random | SeedMode::Fixed(0) => SeedMode::Random,
            SeedMode::Fixed(s) => SeedMode::Fixed(s - 1),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Bankroll,
    Bet,
    Seed,
    Autoplay,
}

const MENU_ITEMS: [MenuItem; 4] =
    [MenuItem::Bankroll, MenuItem::Bet, MenuItem::Seed, MenuItem::Autoplay];

const BANKROLL_STEP: u64 = 50;

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::Bankroll => format!("Starting Bankroll: ${}", app.cfg_bankroll),
            MenuItem::Bet => format!("Default Bet: ${}", app.cfg_bet),
            MenuItem::Seed => format!("Shuffle Seed: {}", app.cfg_seed.label()),
            MenuItem::Autoplay => format!("Autoplay: {}", app.cfg_autoplay.label()),
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::Bankroll => {
                app.cfg_bankroll = app.cfg_bankroll.saturating_add(BANKROLL_STEP).min(MAX_BANKROLL);
            }
            MenuItem::Bet => {
                app.cfg_bet = app.cfg_bet.saturating_add(AppState::BET_STEP).min(app.cfg_bankroll);
            }
            MenuItem::Seed => app.cfg_seed = app.cfg_seed.inc(),
            MenuItem::Autoplay => app.cfg_autoplay = toggle(app.cfg_autoplay),
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::Bankroll => {
                // a bankroll at or below one step is left alone
                if app.cfg_bankroll > BANKROLL_STEP {
                    app.cfg_bankroll -= BANKROLL_STEP;
                }
                if app.cfg_bet > app.cfg_bankroll {
                    app.cfg_bet = app.cfg_bankroll;
                }
            }
            MenuItem::Bet => {
                app.cfg_bet = app.cfg_bet.saturating_sub(AppState::BET_STEP).max(1);
            }
            MenuItem::Seed => app.cfg_seed = app.cfg_seed.dec(),
            MenuItem::Autoplay => app.cfg_autoplay = toggle(app.cfg_autoplay),
        }
    }
}

fn toggle(s: AutoplayStrategy) -> AutoplayStrategy {
    match s {
        AutoplayStrategy::Basic => AutoplayStrategy::DealerMimic,
        AutoplayStrategy::DealerMimic => AutoplayStrategy::Basic,
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.scene = match self.scene {
            super::Scene::Menu => super::Scene::Table,
            _ => {
                self.open_menu();
                super::Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.menu_index = 0;
        self.cfg_bankroll = self.session.starting_bankroll();
        self.cfg_bet = self.bet;
        self.cfg_seed = self.seed;
        self.cfg_autoplay = self.autoplay;
        self.scene = super::Scene::Menu;
    }

    /// Start a fresh session from the edited settings. Any unsettled round
    /// is dropped with the old session.
    pub fn apply_menu(&mut self) {
        // Ensure invariants
        if self.cfg_bankroll == 0 {
            self.cfg_bankroll = 1;
        }
        self.cfg_bet = self.cfg_bet.clamp(1, self.cfg_bankroll);

        if self.session.in_round() {
            log::warn!("settings applied mid-round; the open round is discarded");
        }
        self.seed = self.cfg_seed;
        self.autoplay = self.cfg_autoplay;
        self.bet = self.cfg_bet;
        self.session = Session::new(self.cfg_bankroll, self.seed.value());
        self.scene = super::Scene::Table;
    }

    pub fn cancel_menu(&mut self) {
        self.scene = super::Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
