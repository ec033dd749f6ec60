use crate::cards::{parse_cards, Card};
use crate::scoring::{score, Score, BLACKJACK};
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate cards in hand")]
    DuplicateCards,
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Cards held by the player or the dealer during one round.
///
/// The total is kept in step with the cards: every [`Hand::add_card`]
/// re-scores the whole hand.
///
/// ```
/// use blackjack_rs::cards::{Card, Rank, Suit};
/// use blackjack_rs::hand::Hand;
///
/// let mut hand = Hand::new();
/// hand.add_card(Card::new(Rank::Ace, Suit::Spades));
/// hand.add_card(Card::new(Rank::King, Suit::Hearts));
/// assert_eq!(hand.total(), 21);
/// assert!(hand.is_blackjack());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    score: Score,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card and re-score. Appending to a busted hand is allowed;
    /// callers stop asking for cards once [`Hand::is_busted`] is set.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.score = score(self.cards.iter().map(|c| c.rank()));
    }

    pub fn total(&self) -> u8 {
        self.score.total
    }

    pub fn is_busted(&self) -> bool {
        self.score.busted
    }

    pub fn is_soft(&self) -> bool {
        self.score.soft
    }

    /// Two-card 21. A 21 built from three or more cards is not a blackjack.
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.score.total == BLACKJACK
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn try_from_cards(cards: Vec<Card>) -> Result<Self, HandError> {
        let mut hand = Hand::new();
        for c in cards {
            if hand.cards.contains(&c) {
                return Err(HandError::DuplicateCards);
            }
            hand.add_card(c);
        }
        Ok(hand)
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::try_from_cards(cards)
    }
}
