//! Card sources.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, RANKS};

/// Anything that can hand out cards one at a time.
///
/// Closures returning a [`Card`] implement this trait, which makes it easy to
/// script a draw sequence.
pub trait DrawSource {
    /// Draws the next card.
    fn draw(&mut self) -> Card;
}

impl<F> DrawSource for F
where
    F: FnMut() -> Card,
{
    fn draw(&mut self) -> Card {
        self()
    }
}

/// An endless shoe.
///
/// Each draw is an independent, uniform pick from the thirteen ranks, so
/// nothing is ever used up and earlier draws say nothing about later ones.
#[derive(Debug, Clone)]
pub struct InfiniteShoe {
    rng: ChaCha8Rng,
}

impl InfiniteShoe {
    /// Creates a shoe whose draws are determined by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl DrawSource for InfiniteShoe {
    fn draw(&mut self) -> Card {
        RANKS[self.rng.random_range(0..RANKS.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn same_seed_same_draws() {
        let mut a = InfiniteShoe::new(7);
        let mut b = InfiniteShoe::new(7);
        let first: Vec<Card> = (0..32).map(|_| a.draw()).collect();
        let second: Vec<Card> = (0..32).map(|_| b.draw()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn every_rank_turns_up() {
        let mut shoe = InfiniteShoe::new(3);
        let mut seen = [false; 13];
        for _ in 0..2_000 {
            let card = shoe.draw();
            let index = RANKS.iter().position(|&rank| rank == card).unwrap_or(0);
            seen[index] = true;
        }
        assert!(seen.iter().all(|&hit| hit));
    }

    #[test]
    fn closures_are_sources() {
        let mut next = Card::Two;
        let mut source = move || {
            let card = next;
            next = Card::Three;
            card
        };
        assert_eq!(source.draw(), Card::Two);
        assert_eq!(source.draw(), Card::Three);
    }
}
