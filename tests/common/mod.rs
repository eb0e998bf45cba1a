//! Helpers shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::collections::VecDeque;

use carddeck::{Card, Suit};
use rand::{CryptoRng, RngCore};

/// RNG that replays a fixed list of 32-bit draws.
///
/// Panics when the script runs out, so a test fails loudly if the code under
/// test draws more often than expected.
pub struct ScriptedRng {
    draws: VecDeque<u32>,
}

impl ScriptedRng {
    pub fn new(draws: &[u32]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
        }
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.draws.pop_front().expect("scripted draws exhausted")
    }

    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.next_u32());
        let high = u64::from(self.next_u32());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl CryptoRng for ScriptedRng {}

pub fn card(value: &'static str, suit: &Suit) -> Card {
    Card::new(value, suit.clone())
}

/// Counts each distinct card.
pub fn card_counts<'a>(cards: impl IntoIterator<Item = &'a Card>) -> HashMap<Card, usize> {
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry(card.clone()).or_insert(0) += 1;
    }
    counts
}

/// Renders cards as `value+suit` labels for compact assertions.
pub fn labels<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Vec<String> {
    cards
        .into_iter()
        .map(|card| format!("{}{}", card.value(), card.suit().name()))
        .collect()
}
