//! Deck construction helpers for callers, tests, and benches.
//!
//! The solver itself takes whatever ordered deck the caller supplies;
//! these helpers build canonical decks and produce deterministic seeded
//! shuffles (ChaCha8, same discipline the engine uses everywhere RNG is
//! needed: a fixed seed reproduces the exact permutation).

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::card::{Card, Suit, MAX_RANK, MIN_RANK};

/// The full 52-card deck in canonical (suit-major, rank-ascending) order.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in MIN_RANK..=MAX_RANK {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// The 44-card Scoundrel deck: the standard deck minus the special-rank
/// red cards (J/Q/K/A of Hearts and Diamonds).
#[must_use]
pub fn scoundrel_deck() -> Vec<Card> {
    standard_deck()
        .into_iter()
        .filter(|c| !c.is_special())
        .collect()
}

/// Shuffle a deck deterministically with the given seed.
#[must_use]
pub fn shuffled(mut deck: Vec<Card>, seed: u64) -> Vec<Card> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);
    deck
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_deck_is_complete() {
        let deck = standard_deck();
        assert_eq!(deck.len(), 52);

        let codes: std::collections::HashSet<u8> = deck.iter().map(|c| c.encode()).collect();
        assert_eq!(codes.len(), 52);
    }

    #[test]
    fn test_scoundrel_deck_strips_special_red_cards() {
        let deck = scoundrel_deck();
        assert_eq!(deck.len(), 44);
        assert!(deck.iter().all(|c| !c.is_special()));
    }

    #[test]
    fn test_shuffle_is_seed_deterministic() {
        let a = shuffled(standard_deck(), 7);
        let b = shuffled(standard_deck(), 7);
        let c = shuffled(standard_deck(), 8);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 52);
    }
}
