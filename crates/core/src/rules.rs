//! Fixed house rules.

/// Highest score that is not a bust.
pub const BLACKJACK: u32 = 21;

/// The dealer stops drawing at the first score at or above this, soft or hard.
pub const DEALER_STAND_THRESHOLD: u32 = 17;

/// Cards each participant receives before the player acts.
pub const INITIAL_CARDS: usize = 2;

/// Difference between an Ace counted high and counted low.
pub const ACE_REDUCTION: u32 = 10;
