use blackjack_rs::cards::parse_cards;
use blackjack_rs::engine::{
    Outcome, Phase, PlayerAction, RoundEngine, RoundError, RoundVerb, Seat, Settlement,
};
use blackjack_rs::shoe::Shoe;

// Draw order is dealer, player, dealer, player, then hits.
fn deal(cards: &str, bet: u64) -> RoundEngine {
    let shoe = Shoe::from_draw_order(parse_cards(cards).unwrap()).unwrap();
    RoundEngine::deal(shoe, bet).unwrap()
}

#[test]
fn stand_then_dealer_plays_to_settlement() {
    let mut round = deal("10c 10s 6d 9h Kh", 15);
    assert_eq!(round.phase(), Phase::PlayerTurn);
    round.stand().unwrap();
    assert_eq!(round.phase(), Phase::DealerTurn);
    let s = round.play_dealer().unwrap();
    assert_eq!(s, Settlement { outcome: Outcome::DealerBust, payout: 15 });
    assert_eq!(round.phase(), Phase::Settled);
    assert_eq!(round.settlement(), Some(s));
}

#[test]
fn hits_until_stand() {
    let mut round = deal("10c 2s 8d 3h 4c 5d", 10);
    round.act(PlayerAction::Hit).unwrap();
    round.act(PlayerAction::Hit).unwrap();
    assert_eq!(round.player().total(), 14);
    assert_eq!(round.phase(), Phase::PlayerTurn);
    round.act(PlayerAction::Stand).unwrap();
    let s = round.play_dealer().unwrap();
    assert_eq!(s.outcome, Outcome::DealerWin);
    assert_eq!(s.payout, -10);
}

#[test]
fn three_card_21_pays_even_money() {
    let mut round = deal("10c 7s 8d 7h 7d", 10);
    round.hit().unwrap();
    assert_eq!(round.player().total(), 21);
    assert!(!round.player().is_blackjack());
    // hitting on 21 is still allowed; the player chooses to stand
    round.stand().unwrap();
    let s = round.play_dealer().unwrap();
    assert_eq!(s, Settlement { outcome: Outcome::PlayerWin, payout: 10 });
}

#[test]
fn both_blackjacks_push_after_dealer_reveal() {
    let mut round = deal("Ad As Kc Qh", 10);
    assert_eq!(round.phase(), Phase::DealerTurn);
    let s = round.play_dealer().unwrap();
    assert_eq!(s, Settlement { outcome: Outcome::PushBlackjack, payout: 0 });
    assert_eq!(round.dealer().len(), 2);
}

#[test]
fn dealer_blackjack_beats_player_twenty() {
    let mut round = deal("Ad Ks Kc Qh", 10);
    round.stand().unwrap();
    let s = round.play_dealer().unwrap();
    assert_eq!(s.outcome, Outcome::DealerBlackjack);
    assert_eq!(s.payout, -10);
}

#[test]
fn settled_round_rejects_more_play() {
    let mut round = deal("10c 10s 8d 9h", 5);
    round.stand().unwrap();
    round.play_dealer().unwrap();
    let player_before = round.player().clone();
    let dealer_before = round.dealer().clone();
    assert_eq!(
        round.hit().unwrap_err(),
        RoundError::InvalidAction { action: PlayerAction::Hit, phase: Phase::Settled }
    );
    assert!(matches!(round.stand(), Err(RoundError::InvalidAction { .. })));
    assert!(matches!(round.play_dealer(), Err(RoundError::WrongPhase { .. })));
    assert_eq!(round.player(), &player_before);
    assert_eq!(round.dealer(), &dealer_before);
}

#[test]
fn events_record_the_round_in_order() {
    let mut round = deal("10c 10s 6d 9h 5c 2h", 20);
    round.hit().unwrap();
    round.play_dealer().unwrap();
    let verbs: Vec<(Seat, RoundVerb)> = round.events().iter().map(|e| (e.seat, e.verb)).collect();
    assert_eq!(
        verbs,
        vec![
            (Seat::Dealer, RoundVerb::Deal),
            (Seat::Player, RoundVerb::Deal),
            (Seat::Dealer, RoundVerb::Deal),
            (Seat::Player, RoundVerb::Deal),
            (Seat::Player, RoundVerb::Hit),
            (Seat::Player, RoundVerb::Bust),
            (Seat::Dealer, RoundVerb::DealerHit),
            (Seat::Dealer, RoundVerb::DealerStand),
            (Seat::Player, RoundVerb::Settle),
        ]
    );
    let dealer_hit = &round.events()[6];
    assert_eq!(dealer_hit.total, 18);
}

#[test]
fn seeded_rounds_are_reproducible() {
    let play = |seed: u64| {
        let mut round = RoundEngine::deal(Shoe::seeded(seed), 10).unwrap();
        if round.phase() == Phase::PlayerTurn {
            round.stand().unwrap();
        }
        let s = round.play_dealer().unwrap();
        (round.player().clone(), round.dealer().clone(), s)
    };
    assert_eq!(play(11), play(11));
}

#[test]
fn dealer_still_draws_after_player_blackjack() {
    // dealer 5+6 = 11 must hit; player holds A+K
    let mut round = deal("5c As 6d Kh 9s", 10);
    assert_eq!(round.phase(), Phase::DealerTurn);
    let s = round.play_dealer().unwrap();
    assert_eq!(round.dealer().len(), 3);
    assert_eq!(round.dealer().total(), 20);
    assert_eq!(round.shoe_remaining(), 0);
    assert_eq!(s, Settlement { outcome: Outcome::PlayerBlackjack, payout: 15 });
    let dealer_hits =
        round.events().iter().filter(|e| e.verb == RoundVerb::DealerHit).count();
    assert_eq!(dealer_hits, 1);
}
