mod layout;
mod menu;
mod overlays;
mod table;

use crate::tui::app::{AppState, Scene};
use ratatui::prelude::Frame;

/// Draw the active scene, then at most one popup on top of it.
pub fn draw(f: &mut Frame, app: &AppState) {
    match app.scene {
        Scene::Menu => {
            menu::draw_menu(f, app);
            return;
        }
        Scene::Table => table::draw_table(f, app),
    }
    if app.help_open() {
        overlays::draw_help(f);
    } else if app.history_open() {
        overlays::draw_history(f, app);
    } else if app.amount_entry_active() {
        overlays::draw_bet_entry(f, app);
    }
}
