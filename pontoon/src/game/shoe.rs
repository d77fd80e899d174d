use crate::card::{Card, Rank, Suit};
use crate::error::GameError;

use strum::IntoEnumIterator;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

pub const DECK_SIZE: usize = 52;

/// Represents a shoe in the real world: the pool of undealt cards for a
/// session. Cards are drawn from the end of the vector, so a draw is O(1).
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    cut_card_index: usize,
    dealt: usize,
    rng: StdRng,
}

impl Shoe {
    /// Creates a shuffled single-deck shoe seeded from OS entropy.
    pub fn new(cut_card_proportion: f64) -> Shoe {
        Shoe::with_rng(StdRng::from_entropy(), cut_card_proportion)
    }

    /// Creates a shuffled shoe with an injected generator, so callers can
    /// fix the seed and reproduce exact draw sequences.
    pub fn with_rng(rng: StdRng, cut_card_proportion: f64) -> Shoe {
        let mut shoe = Shoe {
            cards: full_deck(),
            cut_card_index: (cut_card_proportion * DECK_SIZE as f64) as usize,
            dealt: 0,
            rng,
        };
        shoe.shuffle();
        shoe
    }

    /// Re-permutes the current contents in place. Does not change the card
    /// set.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        let card = self.cards.pop().ok_or(GameError::EmptyShoe)?;
        self.dealt += 1;
        Ok(card)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the cut card has been passed. The session restocks the
    /// shoe between rounds once this returns true.
    pub fn reached_cut_card(&self) -> bool {
        self.dealt >= self.cut_card_index
    }

    /// Returns the shoe to a full 52 cards and shuffles.
    pub fn restock(&mut self) {
        self.cards = full_deck();
        self.dealt = 0;
        self.shuffle();
    }
}

#[cfg(test)]
impl Shoe {
    /// Builds a shoe that deals the given cards in the given order.
    pub(crate) fn stacked(cards: &[Card]) -> Shoe {
        let mut stacked: Vec<Card> = cards.to_vec();
        stacked.reverse();
        Shoe {
            cards: stacked,
            cut_card_index: usize::MAX,
            dealt: 0,
            rng: StdRng::seed_from_u64(0),
        }
    }
}

fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::iter() {
        for rank in Rank::iter() {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}
