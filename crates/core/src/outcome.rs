use crate::{is_bust, Hand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Outcome {
    PlayerBustLose,
    DealerBustWin,
    Win,
    Push,
    Lose,
}

impl Outcome {
    pub fn is_win(self) -> bool {
        matches!(self, Outcome::DealerBustWin | Outcome::Win)
    }

    pub fn is_loss(self) -> bool {
        matches!(self, Outcome::PlayerBustLose | Outcome::Lose)
    }
}

/// Classifies a finished round. A player bust loses before the dealer's hand is looked at.
pub fn evaluate(player: &Hand, dealer: &Hand, player_busted: bool) -> Outcome {
    if player_busted {
        return Outcome::PlayerBustLose;
    }
    let dealer_score = dealer.score();
    if is_bust(dealer_score) {
        return Outcome::DealerBustWin;
    }
    let player_score = player.score();
    if player_score > dealer_score {
        Outcome::Win
    } else if player_score == dealer_score {
        Outcome::Push
    } else {
        Outcome::Lose
    }
}

/// Per-process counts of settled rounds. Never persisted.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tally {
    pub rounds: u32,
    pub wins: u32,
    pub losses: u32,
    pub pushes: u32,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        self.rounds += 1;
        if outcome.is_win() {
            self.wins += 1;
        } else if outcome.is_loss() {
            self.losses += 1;
        } else {
            self.pushes += 1;
        }
    }
}
