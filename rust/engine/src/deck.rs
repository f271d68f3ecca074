use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// The 52-card deck for one hand. Cards are drawn from the front and never
/// returned, so no card can be dealt twice within a hand.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

impl Deck {
    pub fn new() -> Self {
        // Keep canonical order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
        }
    }

    /// A freshly shuffled deck from a `u64` seed.
    pub fn shuffled(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut deck = Self::new();
        deck.shuffle(&mut rng);
        deck
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards = full_deck();
        self.cards.shuffle(rng);
        self.position = 0;
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        let c = *self
            .cards
            .get(self.position)
            .ok_or(GameError::DeckUnderflow)?;
        self.position += 1;
        Ok(c)
    }

    pub fn draw_n(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        (0..n).map(|_| self.draw()).collect()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
