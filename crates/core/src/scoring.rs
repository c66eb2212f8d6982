use crate::{ACE_REDUCTION, ACE_VALUE, BLACKJACK};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub total: u32,
    /// Aces still counted at 11 after reduction.
    pub soft_aces: usize,
}

/// Scores a hand, reinterpreting Aces from 11 to 1 one at a time while the total is over 21.
pub fn score_breakdown(cards: &[u8]) -> ScoreBreakdown {
    let mut total: u32 = cards.iter().map(|&value| u32::from(value)).sum();
    let mut soft_aces = cards.iter().filter(|&&value| value == ACE_VALUE).count();

    while total > BLACKJACK && soft_aces > 0 {
        total -= ACE_REDUCTION;
        soft_aces -= 1;
    }

    ScoreBreakdown { total, soft_aces }
}

pub fn calculate_score(cards: &[u8]) -> u32 {
    score_breakdown(cards).total
}

pub fn is_bust(score: u32) -> bool {
    score > BLACKJACK
}
