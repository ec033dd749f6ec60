use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

/// Number of cards in a freshly built shoe.
pub const SHOE_SIZE: usize = 52;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShoeError {
    #[error("cannot draw from an empty shoe")]
    Empty,
    #[error("duplicate card in stacked shoe: {0}")]
    DuplicateCard(Card),
}

/// A single 52-card deck dealt from during one round.
///
/// Cards come off the end of the backing vector, so the remaining count
/// strictly decreases and nothing is ever returned twice.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    /// Build all 52 suit/rank pairs and shuffle them with `rng`.
    ///
    /// ```
    /// use blackjack_rs::shoe::Shoe;
    ///
    /// let shoe = Shoe::new(&mut rand::rng());
    /// assert_eq!(shoe.len(), 52);
    /// ```
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut shoe = Self::ordered();
        shoe.cards.shuffle(rng);
        shoe
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn seeded(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::new(&mut rng)
    }

    /// Stacked shoe: `cards[0]` is the first card drawn.
    pub fn from_draw_order(cards: Vec<Card>) -> Result<Self, ShoeError> {
        let mut seen = HashSet::with_capacity(cards.len());
        for &c in &cards {
            if !seen.insert(c) {
                return Err(ShoeError::DuplicateCard(c));
            }
        }
        let mut cards = cards;
        cards.reverse();
        Ok(Self { cards })
    }

    fn ordered() -> Self {
        let mut cards = Vec::with_capacity(SHOE_SIZE);
        for &s in &Suit::ALL {
            for &r in &Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remove and return the next card.
    pub fn draw(&mut self) -> Result<Card, ShoeError> {
        self.cards.pop().ok_or(ShoeError::Empty)
    }
}
