use blackjack_rs::engine::{settle, Outcome, Settlement, MAX_BET};
use blackjack_rs::hand::Hand;

fn hand(s: &str) -> Hand {
    s.parse().unwrap()
}

fn check(player: &str, dealer: &str, bet: u64, outcome: Outcome, payout: i64) {
    let got = settle(&hand(player), &hand(dealer), bet);
    assert_eq!(got, Settlement { outcome, payout }, "player {player} vs dealer {dealer}");
}

#[test]
fn player_blackjack_pays_three_to_two() {
    check("As Kh", "9c 8d", 10, Outcome::PlayerBlackjack, 15);
}

#[test]
fn blackjack_payout_rounds_down() {
    check("As Kh", "9c 8d", 5, Outcome::PlayerBlackjack, 7);
    check("Ad Qc", "10h 7s", 1, Outcome::PlayerBlackjack, 1);
}

#[test]
fn double_blackjack_pushes() {
    check("As Kh", "Ad Qc", 10, Outcome::PushBlackjack, 0);
}

#[test]
fn dealer_blackjack_beats_three_card_21() {
    check("7s 7h 7d", "Ad Qc", 10, Outcome::DealerBlackjack, -10);
}

#[test]
fn three_card_21_is_a_plain_win() {
    check("7s 7h 7d", "10c 9d", 10, Outcome::PlayerWin, 10);
}

#[test]
fn player_bust_loses() {
    check("10s 9h 5c", "10c 7d", 20, Outcome::PlayerBust, -20);
}

#[test]
fn player_bust_checked_before_dealer_bust() {
    check("10s 9h 5c", "10c 6d Kh", 20, Outcome::PlayerBust, -20);
}

#[test]
fn dealer_bust_pays_even_money() {
    check("10s 9h", "10c 6d Kh", 15, Outcome::DealerBust, 15);
}

#[test]
fn higher_total_wins() {
    check("10s 9h", "10c 8d", 5, Outcome::PlayerWin, 5);
    check("10s 7h", "10c 8d", 5, Outcome::DealerWin, -5);
}

#[test]
fn equal_totals_push() {
    check("10s 9h", "10c 9d", 5, Outcome::PushTie, 0);
    check("10s 5h 5c", "Kc Jd", 5, Outcome::PushTie, 0);
}

#[test]
fn outcome_helpers_classify() {
    assert!(Outcome::DealerBust.player_won());
    assert!(Outcome::PushBlackjack.is_push());
    assert!(!Outcome::PlayerBust.player_won());
    assert!(!Outcome::DealerWin.is_push());
}

#[test]
fn stakes_above_the_limit_settle_at_the_limit() {
    let max = i64::MAX;
    check("10s 9h", "10c 8d", MAX_BET, Outcome::PlayerWin, max);
    check("10s 9h", "10c 8d", u64::MAX, Outcome::PlayerWin, max);
    check("10s 7h", "10c 8d", u64::MAX, Outcome::DealerWin, -max);
    check("As Kh", "9c 8d", MAX_BET, Outcome::PlayerBlackjack, max);
}
