use blackjack_rs::cards::parse_cards;
use blackjack_rs::engine::play_dealer_turn;
use blackjack_rs::hand::Hand;
use blackjack_rs::scoring::DEALER_STANDS_ON;
use blackjack_rs::shoe::{Shoe, ShoeError};

fn stacked(s: &str) -> Shoe {
    Shoe::from_draw_order(parse_cards(s).unwrap()).unwrap()
}

#[test]
fn dealer_draws_until_seventeen() {
    let mut dealer: Hand = "2c 3d".parse().unwrap();
    let mut shoe = stacked("4h 5s 3c Kd");
    // 5 -> 9 -> 14 -> 17
    assert_eq!(play_dealer_turn(&mut dealer, &mut shoe).unwrap(), 17);
    assert_eq!(dealer.len(), 5);
    assert_eq!(shoe.len(), 1);
}

#[test]
fn dealer_stands_on_soft_seventeen() {
    let mut dealer: Hand = "As 6d".parse().unwrap();
    let mut shoe = stacked("5c");
    assert_eq!(play_dealer_turn(&mut dealer, &mut shoe).unwrap(), 17);
    assert_eq!(dealer.len(), 2);
    assert_eq!(shoe.len(), 1);
}

#[test]
fn dealer_never_acts_at_seventeen_or_more() {
    for cards in ["10c 7d", "10c 8d", "Kc Qd", "As Kd"] {
        let mut dealer: Hand = cards.parse().unwrap();
        let mut shoe = Shoe::seeded(3);
        play_dealer_turn(&mut dealer, &mut shoe).unwrap();
        assert_eq!(dealer.len(), 2, "{cards}");
        assert_eq!(shoe.len(), 52);
    }
}

#[test]
fn dealer_stops_on_bust() {
    let mut dealer: Hand = "10c 6d".parse().unwrap();
    let mut shoe = stacked("Kh 2c");
    assert_eq!(play_dealer_turn(&mut dealer, &mut shoe).unwrap(), 26);
    assert!(dealer.is_busted());
    assert_eq!(shoe.len(), 1);
}

#[test]
fn dealer_soft_hand_hardens_then_continues() {
    // A+5 = soft 16, +10 = hard 16, +3 = 19
    let mut dealer: Hand = "Ac 5d".parse().unwrap();
    let mut shoe = stacked("10h 3s");
    assert_eq!(play_dealer_turn(&mut dealer, &mut shoe).unwrap(), 19);
    assert!(!dealer.is_soft());
}

#[test]
fn dealer_result_always_at_least_seventeen_or_bust() {
    for seed in 0..200 {
        let mut shoe = Shoe::seeded(seed);
        let mut dealer = Hand::new();
        dealer.add_card(shoe.draw().unwrap());
        dealer.add_card(shoe.draw().unwrap());
        let total = play_dealer_turn(&mut dealer, &mut shoe).unwrap();
        assert!(total >= DEALER_STANDS_ON || dealer.is_busted());
        // one card fewer would have left the dealer under 17
        if dealer.len() > 2 {
            let prefix: Hand = Hand::try_from_cards(dealer.cards()[..dealer.len() - 1].to_vec())
                .unwrap();
            assert!(prefix.total() < DEALER_STANDS_ON);
        }
    }
}

#[test]
fn empty_shoe_mid_turn_is_reported() {
    let mut dealer: Hand = "2c 3d".parse().unwrap();
    let mut shoe = stacked("4h");
    assert_eq!(play_dealer_turn(&mut dealer, &mut shoe), Err(ShoeError::Empty));
    assert_eq!(dealer.len(), 3);
}
