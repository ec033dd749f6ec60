use blackjack_rs::cards::Card;
use blackjack_rs::shoe::{Shoe, ShoeError, SHOE_SIZE};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

#[test]
fn fresh_shoe_holds_52_distinct_cards() {
    for seed in 0..20 {
        let mut shoe = Shoe::seeded(seed);
        assert_eq!(shoe.len(), SHOE_SIZE);
        let mut seen: HashSet<Card> = HashSet::new();
        while let Ok(card) = shoe.draw() {
            assert!(seen.insert(card), "duplicate {card} with seed {seed}");
        }
        assert_eq!(seen.len(), SHOE_SIZE);
    }
}

#[test]
fn fifty_third_draw_fails() {
    let mut shoe = Shoe::new(&mut ChaCha8Rng::seed_from_u64(9));
    for i in 0..SHOE_SIZE {
        assert_eq!(shoe.len(), SHOE_SIZE - i);
        shoe.draw().unwrap();
    }
    assert!(shoe.is_empty());
    assert_eq!(shoe.draw(), Err(ShoeError::Empty));
    assert_eq!(shoe.draw(), Err(ShoeError::Empty));
}

#[test]
fn different_seeds_shuffle_differently() {
    let draw_all = |mut s: Shoe| -> Vec<Card> {
        let mut out = Vec::new();
        while let Ok(c) = s.draw() {
            out.push(c);
        }
        out
    };
    assert_eq!(draw_all(Shoe::seeded(1)), draw_all(Shoe::seeded(1)));
    assert_ne!(draw_all(Shoe::seeded(1)), draw_all(Shoe::seeded(2)));
}
