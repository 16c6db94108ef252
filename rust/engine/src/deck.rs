use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// A 52-card deck with a seeded RNG. Shuffled once with Fisher–Yates, then
/// dealt sequentially; equivalent in distribution to drawing a uniformly
/// random remaining card on every call, but reproducible under a seed.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Canonical order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    /// Deal the next card. A card dealt from this deck never comes back:
    /// the cursor only moves forward until the deck is rebuilt by `shuffle`.
    ///
    /// `EmptyDeck` is a defensive guard; the fixed draw counts of both games
    /// stay well under 52, so hitting it means a deck-accounting bug.
    pub fn deal_card(&mut self) -> Result<Card, GameError> {
        if self.position >= self.cards.len() {
            Err(GameError::EmptyDeck)
        } else {
            let c = self.cards[self.position];
            self.position += 1;
            Ok(c)
        }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
