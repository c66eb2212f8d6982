//! Fixed table texts shared by the front-ends.

use crate::{Hand, Outcome, TurnPhase};

pub const DEALER: &str = "Dealer";
pub const PLAYER: &str = "Player";
pub const SCORE: &str = "Score:  ";

pub const BUST: &str = "BUST!";
pub const WIN: &str = "You win!";
pub const LOSE: &str = "You lose!";
pub const PUSH: &str = "Push!";
pub const DEALER_STANDS: &str = "Dealer stands";
pub const DEALER_BUST: &str = "Dealer busted!";
pub const YOUR_TURN: &str = "Your turn...";
pub const REMATCH_PROMPT: &str = "Want to play again?";

pub const HIT: &str = "1. [H]it";
pub const STAND: &str = "2. [S]tand";
pub const YES: &str = "1. [Y]es";
pub const NO: &str = "2. [N]o";

/// `Score:  07`, or `Score:  ??` when masked.
pub fn display_score(hand: &Hand, hidden: bool) -> String {
    if hidden {
        format!("{SCORE}??")
    } else {
        format!("{SCORE}{:02}", hand.score())
    }
}

/// Banner lines announcing a result, top to bottom.
pub fn outcome_messages(outcome: Outcome) -> &'static [&'static str] {
    match outcome {
        Outcome::PlayerBustLose => &[BUST, LOSE],
        Outcome::DealerBustWin => &[DEALER_BUST, WIN],
        Outcome::Win => &[WIN],
        Outcome::Push => &[PUSH],
        Outcome::Lose => &[LOSE],
    }
}

/// The two choices offered for a phase, left then right.
pub fn prompt_choices(phase: TurnPhase) -> [&'static str; 2] {
    match phase {
        TurnPhase::PlayerTurn => [HIT, STAND],
        TurnPhase::ReplayPrompt => [YES, NO],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_and_masks_scores() {
        let hand = Hand::from_cards(vec![3, 4]);
        assert_eq!(display_score(&hand, false), "Score:  07");
        assert_eq!(display_score(&hand, true), "Score:  ??");
        assert_eq!(display_score(&Hand::from_cards(vec![10, 10, 5]), false), "Score:  25");
    }

    #[test]
    fn bust_outcomes_have_two_banners() {
        assert_eq!(outcome_messages(Outcome::PlayerBustLose), &[BUST, LOSE]);
        assert_eq!(outcome_messages(Outcome::DealerBustWin), &[DEALER_BUST, WIN]);
        assert_eq!(outcome_messages(Outcome::Push), &[PUSH]);
    }
}
