use blackjack_rs::engine::Phase;
use blackjack_rs::tui::app::{AppState, InputAction, Scene, SeedMode};
use blackjack_rs::tui::controller::handle_key;
use crossterm::event::KeyCode;

fn setup_table_app() -> AppState {
    let mut app = AppState::new(100, 10, Some(7));
    app.apply_menu();
    app
}

#[test]
fn menu_navigation_and_apply() {
    let mut app = AppState::default();
    assert!(matches!(app.scene, Scene::Menu));
    let start = app.menu_index;
    let _ = app.handle_input(InputAction::MenuNext);
    assert_ne!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuPrev);
    assert_eq!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuApply);
    assert!(matches!(app.scene, Scene::Table));
}

#[test]
fn menu_applies_new_bankroll_and_seed() {
    let mut app = AppState::default();
    app.menu_index = 0;
    let _ = app.handle_input(InputAction::MenuInc);
    app.menu_index = 2;
    let _ = app.handle_input(InputAction::MenuInc);
    assert_eq!(app.cfg_seed, SeedMode::Fixed(0));
    let _ = app.handle_input(InputAction::MenuApply);
    assert_eq!(app.session.bankroll(), 150);
}

#[test]
fn deal_then_play_out_a_hand() {
    let mut app = setup_table_app();
    assert!(app.handle_input(InputAction::Deal));
    let round = app.session.round().unwrap();
    if round.phase() == Phase::PlayerTurn {
        assert!(app.dealer_hole_hidden());
        assert!(app.hint().is_some());
        assert!(app.handle_input(InputAction::Stand));
    }
    assert_eq!(app.session.round().unwrap().phase(), Phase::Settled);
    assert!(!app.dealer_hole_hidden());
    assert_eq!(app.session.stats().rounds, 1);
}

#[test]
fn autoplay_finishes_the_players_turn() {
    let mut app = setup_table_app();
    for _ in 0..10 {
        assert!(app.handle_input(InputAction::Deal));
        if app.can_act() {
            assert!(app.handle_input(InputAction::Autoplay));
        }
        assert!(!app.session.in_round());
    }
}

#[test]
fn bet_entry_validates_against_bankroll() {
    let mut app = setup_table_app();
    assert!(app.handle_input(InputAction::AmountOpen));
    assert_eq!(app.amount_entry_text(), Some("10"));
    let _ = app.handle_input(InputAction::AmountDigit(0));
    let _ = app.handle_input(InputAction::AmountDigit(0));
    assert_eq!(app.amount_entry_text(), Some("1000"));
    assert!(!app.handle_input(InputAction::AmountSubmit));
    assert!(app.amount_entry_error().is_some());
    let _ = app.handle_input(InputAction::AmountBackspace);
    let _ = app.handle_input(InputAction::AmountBackspace);
    let _ = app.handle_input(InputAction::AmountBackspace);
    let _ = app.handle_input(InputAction::AmountDigit(5));
    assert!(app.handle_input(InputAction::AmountSubmit));
    assert!(!app.amount_entry_active());
    assert_eq!(app.bet, 15);
}

#[test]
fn help_and_log_toggle() {
    let mut app = setup_table_app();
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(app.help_open());
    let _ = app.handle_input(InputAction::ToggleHistory);
    assert!(!app.help_open());
    assert!(app.history_open());
    let _ = app.handle_input(InputAction::ToggleHistory);
    assert!(!app.history_open());
}

#[test]
fn keys_map_to_actions() {
    let mut app = setup_table_app();
    assert!(!handle_key(&mut app, KeyCode::Char(' ')));
    assert_eq!(app.session.stats().rounds + u32::from(app.session.in_round()), 1);
    while app.can_act() {
        let _ = handle_key(&mut app, KeyCode::Char('s'));
    }
    assert!(!app.session.in_round());
    assert!(handle_key(&mut app, KeyCode::Char('q')));
}
