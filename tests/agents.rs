use blackjack_rs::agents::{play_round, BasicStrategyAgent, PlayerAgent, ThresholdAgent};
use blackjack_rs::cards::parse_cards;
use blackjack_rs::engine::{Outcome, Settlement};
use blackjack_rs::shoe::Shoe;
use std::thread;

fn stacked(s: &str) -> Shoe {
    Shoe::from_draw_order(parse_cards(s).unwrap()).unwrap()
}

#[test]
fn threshold_agent_hits_to_its_limit() {
    let mut agent = ThresholdAgent::new(15);
    // player 2+3, hits 4 (9), 5 (14), 6 (20)
    let s = play_round(stacked("10c 2s 8d 3h 4c 5d 6h"), 10, &mut agent).unwrap();
    assert_eq!(s, Settlement { outcome: Outcome::PlayerWin, payout: 10 });
}

#[test]
fn basic_agent_stands_on_stiff_against_weak_upcard() {
    let mut agent = BasicStrategyAgent::new();
    // dealer 10+6 shows 6; player 10+3 stands, dealer draws K
    let s = play_round(stacked("10c 10s 6d 3h Kh"), 10, &mut agent).unwrap();
    assert_eq!(s.outcome, Outcome::DealerBust);
}

#[test]
fn agents_report_names() {
    assert_eq!(ThresholdAgent::default().name(), "threshold");
    assert_eq!(BasicStrategyAgent::new().name(), "basic");
}

#[test]
fn parallel_simulations_use_independent_shoes() {
    let handles: Vec<_> = (0..4u64)
        .map(|t| {
            thread::spawn(move || {
                let mut agent = BasicStrategyAgent::new();
                let mut net = 0i64;
                for i in 0..250u64 {
                    let shoe = Shoe::seeded(t * 1_000 + i);
                    net += play_round(shoe, 2, &mut agent).unwrap().payout;
                }
                net
            })
        })
        .collect();
    let parallel: Vec<i64> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    // same seeds played serially give the same results
    let serial: Vec<i64> = (0..4u64)
        .map(|t| {
            let mut agent = BasicStrategyAgent::new();
            (0..250u64)
                .map(|i| play_round(Shoe::seeded(t * 1_000 + i), 2, &mut agent).unwrap().payout)
                .sum()
        })
        .collect();
    assert_eq!(parallel, serial);
}
