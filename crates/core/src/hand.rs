use crate::{calculate_score, score_breakdown, value_label, BLACKJACK};
use serde::{Deserialize, Serialize};

/// Card values held by one participant for one round, in draw order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<u8>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: impl Into<Vec<u8>>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    pub fn push(&mut self, value: u8) {
        self.cards.push(value);
    }

    pub fn cards(&self) -> &[u8] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.cards.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Recomputed from the cards on every call.
    pub fn score(&self) -> u32 {
        calculate_score(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        score_breakdown(&self.cards).soft_aces > 0
    }

    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK
    }

    pub fn labels(&self) -> Vec<String> {
        self.iter().map(value_label).collect()
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
