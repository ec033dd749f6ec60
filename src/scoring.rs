//! Blackjack hand valuation.
//!
//! Every ace starts out worth 11. While the total is over 21 and some ace is
//! still counted high, one ace drops to 1 (a step of 10). The reduction is
//! order-independent, so the result is the best total not above 21, or the
//! smallest overshoot once every ace is already low.

use crate::cards::Rank;

/// Best possible hand value.
pub const BLACKJACK: u8 = 21;

/// Dealer draws while below this total.
pub const DEALER_STANDS_ON: u8 = 17;

/// Result of valuing a sequence of ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub total: u8,
    /// At least one ace is still counted as 11.
    pub soft: bool,
    pub busted: bool,
}

/// Value `ranks` with soft-ace reduction.
///
/// ```
/// use blackjack_rs::cards::Rank;
/// use blackjack_rs::scoring::score;
///
/// let s = score([Rank::Ace, Rank::Ace, Rank::Nine]);
/// assert_eq!(s.total, 21);
/// assert!(s.soft);
/// assert!(!s.busted);
/// ```
pub fn score<I>(ranks: I) -> Score
where
    I: IntoIterator<Item = Rank>,
{
    // u32 so long synthetic sequences cannot overflow before reduction
    let mut total: u32 = 0;
    let mut high_aces: u32 = 0;
    for r in ranks {
        total += u32::from(r.points());
        if r.is_ace() {
            high_aces += 1;
        }
    }
    while total > u32::from(BLACKJACK) && high_aces > 0 {
        total -= 10;
        high_aces -= 1;
    }
    Score {
        total: u8::try_from(total).unwrap_or(u8::MAX),
        soft: high_aces > 0,
        busted: total > u32::from(BLACKJACK),
    }
}
