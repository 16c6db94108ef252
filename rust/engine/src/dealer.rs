//! Fixed house policies. The dealer never makes a judgement call: blackjack
//! draws follow the stand-on-17 rule and the poker exchange swaps each card
//! with a flat probability. Neither policy is configurable.

use rand::Rng;

/// The dealer stands on every total of 17 or higher, soft or hard.
pub const STAND_MIN: u8 = 17;

/// Probability that the dealer swaps any given card during the poker draw.
pub const EXCHANGE_RATE: f64 = 0.4;

pub fn dealer_hits(total: u8) -> bool {
    total < STAND_MIN
}

/// Pick which of the dealer's five cards to throw away, each independently
/// with probability [`EXCHANGE_RATE`].
pub fn dealer_discards<R: Rng>(rng: &mut R) -> [bool; 5] {
    let mut discards = [false; 5];
    for slot in discards.iter_mut() {
        *slot = rng.random::<f64>() < EXCHANGE_RATE;
    }
    discards
}
